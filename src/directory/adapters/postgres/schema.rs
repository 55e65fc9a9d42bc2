//! Diesel schema for directory persistence.

diesel::table! {
    /// Department records (the collection keeps its localized name).
    departamentos (id) {
        /// Department identifier.
        id -> Uuid,
        /// Department name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional display colour.
        #[max_length = 50]
        color -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Member profile records joined for assignee display data.
    profiles (id) {
        /// Profile identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        display_name -> Varchar,
        /// Optional department reference.
        department_id -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(departamentos, profiles);
