//! Tests for the activity recorder port and best-effort helper.

use crate::activity::{
    adapters::memory::InMemoryActivityLog,
    domain::{ActivityAction, ActivityEntry, EntityKind},
    ports::{
        ActivityRecorder, ActivityRecorderError, ActivityRecorderResult, record_best_effort,
    },
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

/// Recorder double whose appends always fail.
struct RefusingRecorder;

#[async_trait]
impl ActivityRecorder for RefusingRecorder {
    async fn append(&self, _entry: &ActivityEntry) -> ActivityRecorderResult<()> {
        Err(ActivityRecorderError::Rejected(
            "row-level policy denied insert".to_owned(),
        ))
    }

    async fn list_for_entity(
        &self,
        _entity_id: &str,
    ) -> ActivityRecorderResult<Vec<ActivityEntry>> {
        Ok(Vec::new())
    }
}

fn sample_entry(entity_id: &str) -> ActivityEntry {
    ActivityEntry::new(
        ActivityAction::UpdateStatus,
        EntityKind::Task,
        entity_id,
        json!({"task_title": "Revisar contrato"}),
        None,
        &DefaultClock,
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn append_and_list_for_entity_filters_by_id() {
    let recorder = InMemoryActivityLog::new();
    recorder
        .append(&sample_entry("t1"))
        .await
        .expect("append should succeed");
    recorder
        .append(&sample_entry("t2"))
        .await
        .expect("append should succeed");
    recorder
        .append(&sample_entry("t1"))
        .await
        .expect("append should succeed");

    let for_t1 = recorder
        .list_for_entity("t1")
        .await
        .expect("listing should succeed");

    assert_eq!(for_t1.len(), 2);
    assert!(for_t1.iter().all(|entry| entry.entity_id() == "t1"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_best_effort_swallows_append_failures() {
    // Must return normally even though every append is refused.
    record_best_effort(&RefusingRecorder, sample_entry("t9")).await;
}

#[rstest]
fn action_tags_round_trip_their_wire_strings() {
    for action in [
        ActivityAction::UpdateStatus,
        ActivityAction::RegenerateTask,
        ActivityAction::CreateTask,
        ActivityAction::CreateRecurringTask,
    ] {
        let parsed = ActivityAction::try_from(action.as_str()).expect("tag should parse");
        assert_eq!(parsed, action);
    }
}
