//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the local store and the remote completion endpoint). Each trait exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants instead of returning `anyhow::Result`.

mod account_repository;
mod favorite_repository;
mod review_repository;
mod store_error;
mod vibe_source;

pub use account_repository::{AccountRepository, FixtureAccountRepository};
pub use favorite_repository::{FavoriteRepository, FixtureFavoriteRepository};
pub use review_repository::{FixtureReviewRepository, ReviewRepository};
pub use store_error::StoreError;
pub use vibe_source::{
    FixtureVibeSource, PlaceContext, VIBE_ERROR_REPLY, VibeSource, is_error_reply,
};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use vibe_source::MockVibeSource;
