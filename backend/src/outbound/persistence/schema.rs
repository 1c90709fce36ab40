//! Diesel table definitions for the SQLite schema.
//!
//! These must match the DDL in [`super::bootstrap`]. Table names keep their
//! capitalised SQL spelling; the Rust modules are lower case.

diesel::table! {
    /// Registered bloggers.
    #[sql_name = "Users"]
    users (user_id) {
        /// Primary key, assigned by `AUTOINCREMENT`.
        user_id -> BigInt,
        /// Unique, non-blank username.
        username -> Text,
        /// Optional unique email.
        email -> Nullable<Text>,
        /// Insertion time (UTC, `CURRENT_TIMESTAMP`).
        created_at -> Timestamp,
    }
}

diesel::table! {
    /// Blog posts; deleted with their author.
    #[sql_name = "Posts"]
    posts (post_id) {
        /// Primary key, assigned by `AUTOINCREMENT`.
        post_id -> BigInt,
        /// Author, references `Users.user_id`.
        user_id -> BigInt,
        title -> Text,
        content -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::joinable!(posts -> users (user_id));
diesel::allow_tables_to_appear_in_same_query!(posts, users);
