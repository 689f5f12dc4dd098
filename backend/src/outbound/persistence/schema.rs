//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the migrations exactly. They are used by
//! Diesel for compile-time query validation and type-safe SQL generation.
//!
//! `location_id` columns hold catalog positions; the catalog itself is
//! bundled data, not a table, so no association exists for it.

diesel::table! {
    /// Account table.
    ///
    /// Stores registered users. The password column holds the raw secret in
    /// this design; rows leave this module only with it stripped.
    users (id) {
        /// Primary key, store-assigned.
        id -> BigInt,
        /// Login email, unique and case-sensitive as stored.
        email -> Text,
        /// Raw password compared by string equality.
        password -> Text,
        /// Display name.
        name -> Text,
        /// Free-text bio.
        bio -> Text,
        /// Avatar URI.
        avatar -> Text,
    }
}

diesel::table! {
    /// Review table: append-only, many rows per (user, location) allowed.
    reviews (id) {
        /// Primary key, store-assigned.
        id -> BigInt,
        /// Author account.
        user_id -> BigInt,
        /// Catalog position of the reviewed place.
        location_id -> BigInt,
        /// Rating stored as a real; authored as whole stars.
        rating -> Double,
        /// Free-text comment.
        comment -> Text,
        /// Store-assigned creation instant (UTC).
        created_at -> Timestamp,
    }
}

diesel::table! {
    /// Favourite table: at most one row per (user, location) pair.
    favorites (id) {
        /// Primary key, store-assigned.
        id -> BigInt,
        /// Owning account.
        user_id -> BigInt,
        /// Catalog position of the favourited place.
        location_id -> BigInt,
        /// Store-assigned creation instant (UTC).
        created_at -> Timestamp,
    }
}

diesel::joinable!(reviews -> users (user_id));
diesel::joinable!(favorites -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, reviews, favorites);
