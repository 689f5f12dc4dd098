//! SQLite-backed `ReviewRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::account::UserId;
use crate::domain::place::PlaceId;
use crate::domain::ports::{ReviewRepository, StoreError};
use crate::domain::review::{NewReview, Review, ReviewId, ReviewWithAuthor};

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{NewReviewRow, ReviewRow};
use super::pool::DbPool;
use super::schema::{reviews, users};

/// Diesel-backed implementation of the `ReviewRepository` port.
#[derive(Clone)]
pub struct DieselReviewRepository {
    pool: DbPool,
}

impl DieselReviewRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a joined row to the display record.
///
/// Store timestamps are naive UTC (`CURRENT_TIMESTAMP`); they pick their
/// timezone back up here.
fn row_to_review(row: ReviewRow, author_name: String, author_avatar: String) -> ReviewWithAuthor {
    ReviewWithAuthor {
        review: Review {
            id: ReviewId::new(row.id),
            user_id: UserId::new(row.user_id),
            place_id: PlaceId::new(row.location_id),
            rating: row.rating,
            comment: row.comment,
            created_at: DateTime::<Utc>::from_naive_utc_and_offset(row.created_at, Utc),
        },
        author_name,
        author_avatar,
    }
}

#[async_trait]
impl ReviewRepository for DieselReviewRepository {
    async fn add(&self, review: &NewReview) -> Result<(), StoreError> {
        let user_id = review.user_id.get();
        let location_id = review.place_id.get();
        let rating = review.rating.as_stored();
        let comment = review.comment.clone();

        self.pool
            .run(move |conn| {
                diesel::insert_into(reviews::table)
                    .values(&NewReviewRow {
                        user_id,
                        location_id,
                        rating,
                        comment: &comment,
                    })
                    .execute(conn)
                    .map(|_| ())
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)
    }

    async fn for_location(&self, place: PlaceId) -> Result<Vec<ReviewWithAuthor>, StoreError> {
        let rows: Vec<(ReviewRow, String, String)> = self
            .pool
            .run(move |conn| {
                // Same-second inserts tie on created_at; the id breaks the
                // tie so "newest first" stays deterministic.
                reviews::table
                    .inner_join(users::table)
                    .filter(reviews::location_id.eq(place.get()))
                    .order((reviews::created_at.desc(), reviews::id.desc()))
                    .select((ReviewRow::as_select(), users::name, users::avatar))
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(row, name, avatar)| row_to_review(row, name, avatar))
            .collect())
    }

    async fn count_for_user(&self, user: UserId) -> Result<u64, StoreError> {
        let count: i64 = self
            .pool
            .run(move |conn| {
                reviews::table
                    .filter(reviews::user_id.eq(user.get()))
                    .count()
                    .get_result(conn)
            })
            .await
            .map_err(map_pool_error)?
            .map_err(map_diesel_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
