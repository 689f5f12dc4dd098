//! SQLite-backed `AccountRepository` implementation using Diesel ORM.
//!
//! A thin adapter: translates between Diesel rows and domain profiles and
//! maps store failures into the port error. The raw password never crosses
//! the module boundary; [`row_to_profile`] drops it.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::account::{
    Credentials, DEFAULT_AVATAR, DEFAULT_BIO, NewAccount, ProfileUpdate, UserId, UserProfile,
};
use crate::domain::ports::{AccountRepository, StoreError};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, ProfileChangeset, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Message stored in the conflict raised for an already-registered email.
const EMAIL_TAKEN: &str = "Email already registered";

/// Diesel-backed implementation of the `AccountRepository` port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a store row to a domain profile, dropping the password.
fn row_to_profile(row: UserRow) -> UserProfile {
    UserProfile {
        id: UserId::new(row.id),
        email: row.email,
        name: row.name,
        bio: row.bio,
        avatar: row.avatar,
    }
}

/// Outcome of the create closure, separating the email pre-check from
/// Diesel-level failures.
enum CreateOutcome {
    Created(UserRow),
    EmailTaken,
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<UserProfile>, StoreError> {
        let email = credentials.email().to_owned();
        let password = credentials.password().to_owned();

        let row: Option<UserRow> = self
            .pool
            .run(move |conn| {
                users::table
                    .filter(users::email.eq(&email).and(users::password.eq(&password)))
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_profile))
    }

    async fn create(&self, account: &NewAccount) -> Result<UserProfile, StoreError> {
        let account = account.clone();

        let outcome = self
            .pool
            .run(move |conn| {
                let taken: Option<i64> = users::table
                    .filter(users::email.eq(&account.email))
                    .select(users::id)
                    .first(conn)
                    .optional()?;
                if taken.is_some() {
                    return Ok(CreateOutcome::EmailTaken);
                }

                let new_row = NewUserRow {
                    email: &account.email,
                    password: &account.password,
                    name: &account.name,
                    bio: DEFAULT_BIO,
                    avatar: DEFAULT_AVATAR,
                };

                diesel::insert_into(users::table)
                    .values(&new_row)
                    .returning(UserRow::as_returning())
                    .get_result(conn)
                    .map(CreateOutcome::Created)
            })
            .await
            .map_err(map_pool_error)?
            .map_err(|error| {
                // The unique email constraint backs the pre-check; a racing
                // duplicate insert lands here as a conflict.
                let mapped = map_diesel_error(error);
                if mapped.is_conflict() {
                    StoreError::conflict(EMAIL_TAKEN)
                } else {
                    mapped
                }
            })?;

        match outcome {
            CreateOutcome::Created(row) => Ok(row_to_profile(row)),
            CreateOutcome::EmailTaken => Err(StoreError::conflict(EMAIL_TAKEN)),
        }
    }

    async fn update(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<UserProfile>, StoreError> {
        if update.is_empty() {
            return Ok(None);
        }
        let update = update.clone();

        let row: Option<UserRow> = self
            .pool
            .run(move |conn| {
                let changeset = ProfileChangeset {
                    name: update.name.as_deref(),
                    bio: update.bio.as_deref(),
                    avatar: update.avatar.as_deref(),
                };

                let touched = diesel::update(users::table.find(id.get()))
                    .set(&changeset)
                    .execute(conn)?;
                if touched == 0 {
                    return Ok(None);
                }

                users::table
                    .find(id.get())
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_profile))
    }

    async fn find(&self, id: UserId) -> Result<Option<UserProfile>, StoreError> {
        let row: Option<UserRow> = self
            .pool
            .run(move |conn| {
                users::table
                    .find(id.get())
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_profile))
    }
}
