//! Diesel schema for recurring-template persistence.

diesel::table! {
    /// Recurring template records.
    recurring_tasks (id) {
        /// Template identifier.
        id -> Uuid,
        /// Template title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional assignee reference.
        assignee_id -> Nullable<Uuid>,
        /// Priority spawned instances carry.
        #[max_length = 50]
        priority -> Varchar,
        /// Cadence payload including type and custom day/month sets.
        cadence -> Jsonb,
        /// Day the series starts.
        start_date -> Date,
        /// Optional day the series stops spawning.
        end_date -> Nullable<Date>,
        /// When the series last spawned an instance.
        last_generated -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
