//! SQLite-backed `FavoriteRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;

use crate::domain::account::UserId;
use crate::domain::favorite::FavoriteToggle;
use crate::domain::place::PlaceId;
use crate::domain::ports::{FavoriteRepository, StoreError};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::NewFavoriteRow;
use super::pool::DbPool;
use super::schema::favorites;

/// Diesel-backed implementation of the `FavoriteRepository` port.
#[derive(Clone)]
pub struct DieselFavoriteRepository {
    pool: DbPool,
}

impl DieselFavoriteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for DieselFavoriteRepository {
    async fn toggle(&self, user: UserId, place: PlaceId) -> Result<FavoriteToggle, StoreError> {
        let outcome = self
            .pool
            .run(move |conn| {
                // Delete-first keeps the existence check and the write in
                // one transaction; the unique (user, location) constraint
                // turns a racing duplicate insert into a clean conflict.
                conn.transaction(|conn| {
                    let deleted = diesel::delete(
                        favorites::table.filter(
                            favorites::user_id
                                .eq(user.get())
                                .and(favorites::location_id.eq(place.get())),
                        ),
                    )
                    .execute(conn)?;

                    if deleted > 0 {
                        return Ok(FavoriteToggle::Removed);
                    }

                    diesel::insert_into(favorites::table)
                        .values(&NewFavoriteRow {
                            user_id: user.get(),
                            location_id: place.get(),
                        })
                        .execute(conn)?;
                    Ok(FavoriteToggle::Added)
                })
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(outcome)
    }

    async fn is_favorite(&self, user: UserId, place: PlaceId) -> Result<bool, StoreError> {
        let found = self
            .pool
            .run(move |conn| {
                diesel::select(exists(
                    favorites::table.filter(
                        favorites::user_id
                            .eq(user.get())
                            .and(favorites::location_id.eq(place.get())),
                    ),
                ))
                .get_result::<bool>(conn)
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(found)
    }

    async fn count_for_user(&self, user: UserId) -> Result<u64, StoreError> {
        let count: i64 = self
            .pool
            .run(move |conn| {
                favorites::table
                    .filter(favorites::user_id.eq(user.get()))
                    .count()
                    .get_result(conn)
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
