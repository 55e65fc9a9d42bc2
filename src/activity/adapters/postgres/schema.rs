//! Diesel schema for activity log persistence.

diesel::table! {
    /// Append-only activity history records.
    activity_entries (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Optional acting profile.
        actor_id -> Nullable<Uuid>,
        /// Action tag.
        #[max_length = 50]
        action -> Varchar,
        /// Kind of entity referred to.
        #[max_length = 50]
        entity_kind -> Varchar,
        /// Identifier of the referred entity.
        #[max_length = 255]
        entity_id -> Varchar,
        /// Free-form detail payload.
        details -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
