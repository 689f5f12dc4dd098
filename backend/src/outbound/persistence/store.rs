//! Store initialisation: schema migrations and first-run seeding.
//!
//! [`initialize`] is called on every process start. Migrations are tracked
//! by Diesel and only run once per schema version; the seed is gated on a
//! pre-check for the built-in administrator's email, so repeated starts
//! never duplicate it.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::domain::ports::StoreError;

use super::error_map::{map_diesel_error, map_pool_error};
use super::models::{NewFavoriteRow, NewReviewRow, NewUserRow};
use super::pool::DbPool;
use super::schema::{favorites, reviews, users};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Email of the built-in administrator account.
pub const ADMIN_EMAIL: &str = "admin@hackathon.ro";
/// Password of the built-in administrator account (plaintext by design,
/// see the hardening note on [`initialize`]).
pub const ADMIN_PASSWORD: &str = "admin123";
/// Display name of the built-in administrator account.
pub const ADMIN_NAME: &str = "Alex Traveler";
/// Bio of the built-in administrator account.
pub const ADMIN_BIO: &str = "Explorer of hidden gems & coffee enthusiast ☕️";
/// Avatar of the built-in administrator account.
pub const ADMIN_AVATAR: &str = "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde";

/// Catalog positions favourited for the administrator on first run.
pub const SEED_FAVORITE_LOCATIONS: [i64; 2] = [1, 2];
/// Catalog position the seed review is attached to.
pub const SEED_REVIEW_LOCATION: i64 = 1;
/// Rating of the seed review.
pub const SEED_REVIEW_RATING: f64 = 5.0;
/// Comment of the seed review.
pub const SEED_REVIEW_COMMENT: &str =
    "Still my favourite terrace in the old town. Ask for the pour-over.";

/// Idempotently ensure the schema exists and the seed data is present.
///
/// Safe to call on every process start. Passwords are stored and compared
/// as plaintext in this design; anything beyond a prototype must replace
/// the scheme with a salted one-way hash before shipping.
///
/// # Errors
///
/// Returns [`StoreError`] when the store cannot be opened, a migration
/// fails, or the seed transaction is rejected.
pub async fn initialize(pool: &DbPool) -> Result<(), StoreError> {
    pool.run(|conn| {
        conn.run_pending_migrations(MIGRATIONS)
            .map(|applied| debug!(count = applied.len(), "migrations applied"))
            .map_err(|error| error.to_string())
    })
    .await
    .map_err(map_pool_error)?
    .map_err(|message| StoreError::query(format!("migrations failed: {message}")))?;

    let seeded = pool
        .run(|conn| {
            conn.transaction(|conn| {
                let existing: Option<i64> = users::table
                    .filter(users::email.eq(ADMIN_EMAIL))
                    .select(users::id)
                    .first(conn)
                    .optional()?;
                if existing.is_some() {
                    return Ok(false);
                }

                let admin_id: i64 = diesel::insert_into(users::table)
                    .values(&NewUserRow {
                        email: ADMIN_EMAIL,
                        password: ADMIN_PASSWORD,
                        name: ADMIN_NAME,
                        bio: ADMIN_BIO,
                        avatar: ADMIN_AVATAR,
                    })
                    .returning(users::id)
                    .get_result(conn)?;

                for location_id in SEED_FAVORITE_LOCATIONS {
                    diesel::insert_into(favorites::table)
                        .values(&NewFavoriteRow {
                            user_id: admin_id,
                            location_id,
                        })
                        .execute(conn)?;
                }

                diesel::insert_into(reviews::table)
                    .values(&NewReviewRow {
                        user_id: admin_id,
                        location_id: SEED_REVIEW_LOCATION,
                        rating: SEED_REVIEW_RATING,
                        comment: SEED_REVIEW_COMMENT,
                    })
                    .execute(conn)?;

                Ok(true)
            })
        })
        .await
        .map_err(map_pool_error)?
        .map_err(map_diesel_error)?;

    if seeded {
        info!("store seeded with the built-in administrator account");
    } else {
        debug!("seed data already present");
    }
    Ok(())
}
