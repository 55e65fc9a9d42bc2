//! Diesel schema for board card persistence.

diesel::table! {
    /// Standalone task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Card title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Board column.
        #[max_length = 50]
        status -> Varchar,
        /// Priority badge.
        #[max_length = 50]
        priority -> Varchar,
        /// Optional assignee reference.
        assignee_id -> Nullable<Uuid>,
        /// Optional due timestamp.
        due_at -> Nullable<Timestamptz>,
        /// Optional project/category reference.
        #[max_length = 120]
        category -> Nullable<Varchar>,
        /// Completion timestamp, set while the card sits in the completed
        /// column.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Generated recurring-task instance records.
    task_instances (id) {
        /// Instance identifier.
        id -> Uuid,
        /// Owning template reference.
        recurring_task_id -> Uuid,
        /// Card title copied from the template.
        #[max_length = 255]
        title -> Varchar,
        /// Optional description copied from the template.
        description -> Nullable<Text>,
        /// Optional assignee copied from the template.
        assignee_id -> Nullable<Uuid>,
        /// Priority badge.
        #[max_length = 50]
        priority -> Varchar,
        /// Day this occurrence is due.
        due_date -> Date,
        /// Board column.
        #[max_length = 50]
        status -> Varchar,
        /// Completion timestamp, set while the card sits in the completed
        /// column.
        completed_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(tasks, task_instances);
