//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain's store ports backed by a single
//! local SQLite file.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Serialised operations**: the pool holds one connection by default
//!   and runs Diesel's synchronous calls on the blocking thread pool, so
//!   callers see suspension points and the file sees a single writer.
//! - **Strongly typed errors**: all database errors are mapped to the
//!   domain's [`StoreError`](crate::domain::ports::StoreError).
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, PoolConfig, initialize};
//!
//! let pool = DbPool::new(PoolConfig::new("/var/lib/app/store.db"))?;
//! initialize(&pool).await?;
//! let accounts = DieselAccountRepository::new(pool.clone());
//! ```

mod diesel_account_repository;
mod diesel_favorite_repository;
mod diesel_review_repository;
mod error_map;
mod models;
mod pool;
mod schema;
mod store;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_favorite_repository::DieselFavoriteRepository;
pub use diesel_review_repository::DieselReviewRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use store::{
    ADMIN_AVATAR, ADMIN_BIO, ADMIN_EMAIL, ADMIN_NAME, ADMIN_PASSWORD, SEED_FAVORITE_LOCATIONS,
    SEED_REVIEW_COMMENT, SEED_REVIEW_LOCATION, SEED_REVIEW_RATING, initialize,
};
