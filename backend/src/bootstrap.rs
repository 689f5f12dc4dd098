//! Process-start wiring.
//!
//! The presentation shell calls [`App::bootstrap`] once before rendering
//! anything: it opens the store, runs migrations and first-run seeding,
//! loads the bundled catalog, and hands back the fully wired services. The
//! session context is constructed in its pre-ready phase and only activated
//! once initialisation has resolved, so consumers observing it mid-boot see
//! the transient `Starting` phase rather than a bogus signed-out state.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::domain::ports::{AccountRepository, FavoriteRepository, ReviewRepository, VibeSource};
use crate::domain::{FavoriteService, ProfileStatsService, ReviewService, SessionContext};
use crate::outbound::persistence::{
    DbPool, DieselAccountRepository, DieselFavoriteRepository, DieselReviewRepository, PoolConfig,
    PoolError, initialize,
};
use crate::outbound::vibe::{CompletionVibeSource, VibeConfig};

/// Errors raised while wiring the application together.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    /// The store pool could not be opened.
    #[error("store pool failed to open: {0}")]
    Pool(#[from] PoolError),
    /// Migrations or seeding failed.
    #[error("store initialisation failed: {0}")]
    Store(#[from] crate::domain::ports::StoreError),
    /// The completion client could not be constructed.
    #[error("vibe client failed to build: {message}")]
    VibeClient {
        /// Underlying build detail.
        message: String,
    },
}

/// Application configuration supplied by the host shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the SQLite store file; created when absent.
    pub database_path: PathBuf,
    /// Completion adapter configuration; `None` disables vibe generation.
    pub vibe: Option<VibeConfig>,
}

impl AppConfig {
    /// Configuration with vibe generation disabled.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            vibe: None,
        }
    }

    /// Enable vibe generation with the given adapter configuration.
    #[must_use]
    pub fn with_vibe(mut self, vibe: VibeConfig) -> Self {
        self.vibe = Some(vibe);
        self
    }
}

/// The wired application core handed to the presentation shell.
#[derive(Clone)]
pub struct App {
    /// The bundled, read-only catalog.
    pub catalog: &'static Catalog,
    /// The injected session slot.
    pub session: Arc<SessionContext>,
    /// Favourite toggling and lookup.
    pub favorites: FavoriteService,
    /// Review posting and listing.
    pub reviews: ReviewService,
    /// Profile counters.
    pub stats: ProfileStatsService,
    /// Vibe generation, when configured.
    pub vibe: Option<Arc<dyn VibeSource>>,
}

impl App {
    /// Open the store, initialise it, and wire the services.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError`] when the store cannot be opened or
    /// initialised, or when the completion client cannot be built.
    pub async fn bootstrap(config: AppConfig) -> Result<Self, BootstrapError> {
        info!(path = %config.database_path.display(), "opening local store");
        let pool = DbPool::new(PoolConfig::new(&config.database_path))?;

        let accounts: Arc<dyn AccountRepository> =
            Arc::new(DieselAccountRepository::new(pool.clone()));
        let session = Arc::new(SessionContext::starting(accounts));

        initialize(&pool).await?;
        session.activate();
        info!("local store ready");

        let reviews: Arc<dyn ReviewRepository> =
            Arc::new(DieselReviewRepository::new(pool.clone()));
        let favorites: Arc<dyn FavoriteRepository> =
            Arc::new(DieselFavoriteRepository::new(pool.clone()));

        let vibe: Option<Arc<dyn VibeSource>> = match config.vibe {
            Some(vibe_config) => {
                let source = CompletionVibeSource::new(vibe_config).map_err(|error| {
                    BootstrapError::VibeClient {
                        message: error.to_string(),
                    }
                })?;
                Some(Arc::new(source))
            }
            None => None,
        };

        let catalog = Catalog::bundled();
        info!(places = catalog.len(), "catalog loaded");

        Ok(Self {
            catalog,
            session,
            favorites: FavoriteService::new(Arc::clone(&favorites)),
            reviews: ReviewService::new(Arc::clone(&reviews)),
            stats: ProfileStatsService::new(reviews, favorites),
            vibe,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_no_vibe_generation() {
        let config = AppConfig::new("/tmp/store.db");
        assert!(config.vibe.is_none());
        assert_eq!(config.database_path, PathBuf::from("/tmp/store.db"));
    }

    #[test]
    fn config_can_enable_vibe_generation() {
        let config = AppConfig::new("/tmp/store.db").with_vibe(VibeConfig::default());
        assert!(config.vibe.is_some());
    }
}
