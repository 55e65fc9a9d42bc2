//! Shared sample records for recurrence tests.

use crate::board::domain::{
    PersistedInstanceData, Priority, RecurringTaskId, TaskInstance, TaskInstanceId, TaskStatus,
};
use crate::directory::domain::ProfileId;
use crate::recurrence::domain::{Cadence, PersistedRecurringTaskData, RecurringTask};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// A fixed timestamp on the sweep's reference day.
pub fn moment(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a persisted daily template with explicit series bounds.
pub fn template_record(
    title: &str,
    end_date: Option<NaiveDate>,
    last_generated: Option<DateTime<Utc>>,
) -> RecurringTask {
    RecurringTask::from_persisted(PersistedRecurringTaskData {
        id: RecurringTaskId::new(),
        title: title.to_owned(),
        description: Some("Rotina da equipe".to_owned()),
        assignee: Some(ProfileId::new()),
        priority: Priority::High,
        cadence: Cadence::Daily,
        start_date: NaiveDate::from_ymd_opt(2026, 7, 1).expect("valid date"),
        end_date,
        last_generated,
        created_at: moment(6),
        updated_at: moment(6),
    })
}

/// Builds a completed instance of the given template with an explicit
/// completion time.
pub fn completed_instance_of(
    template: &RecurringTask,
    completed_at: DateTime<Utc>,
) -> TaskInstance {
    TaskInstance::from_persisted(PersistedInstanceData {
        id: TaskInstanceId::new(),
        recurring_task: template.id(),
        title: template.title().to_owned(),
        description: template.description().map(str::to_owned),
        assignee: template.assignee(),
        priority: template.priority(),
        due_date: NaiveDate::from_ymd_opt(2026, 7, 31).expect("valid date"),
        status: TaskStatus::Completed,
        completed_at: Some(completed_at),
        created_at: moment(7),
        updated_at: completed_at,
    })
}
