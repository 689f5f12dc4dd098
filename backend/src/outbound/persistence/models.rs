//! Internal Diesel row structs for store operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use super::schema::{favorites, reviews, users};

/// Row struct for reading from the users table.
///
/// The only place the raw password is visible; conversions to the domain
/// profile drop it.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    #[expect(dead_code, reason = "read for completeness; never leaves the adapter")]
    pub password: String,
    pub name: String,
    pub bio: String,
    pub avatar: String,
}

/// Insertable struct for creating new account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub bio: &'a str,
    pub avatar: &'a str,
}

/// Changeset for partial profile updates; `None` leaves a column untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct ProfileChangeset<'a> {
    pub name: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub avatar: Option<&'a str>,
}

/// Row struct for reading from the reviews table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ReviewRow {
    pub id: i64,
    pub user_id: i64,
    pub location_id: i64,
    pub rating: f64,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

/// Insertable struct for creating review records; the timestamp comes from
/// the store default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reviews)]
pub(crate) struct NewReviewRow<'a> {
    pub user_id: i64,
    pub location_id: i64,
    pub rating: f64,
    pub comment: &'a str,
}

/// Insertable struct for creating favourite records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favorites)]
pub(crate) struct NewFavoriteRow {
    pub user_id: i64,
    pub location_id: i64,
}
