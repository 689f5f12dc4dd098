//! Shared fixtures for the store integration suites.
//!
//! Every suite works against a freshly initialised store file inside a
//! temporary directory, so tests are hermetic and can run in parallel.

use backend::domain::UserProfile;
use backend::domain::NewAccount;
use backend::domain::ports::AccountRepository;
use backend::outbound::persistence::{
    DbPool, DieselAccountRepository, PoolConfig, initialize,
};
use tempfile::TempDir;

/// Open and initialise a store in a temporary directory.
///
/// The directory guard must stay alive for as long as the pool is used.
pub async fn open_initialized_store() -> (TempDir, DbPool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let dir = tempfile::tempdir().expect("temp dir");
    let pool = DbPool::new(PoolConfig::new(dir.path().join("store.db"))).expect("pool opens");
    initialize(&pool).await.expect("store initialises");
    (dir, pool)
}

/// Create a throwaway account and return its profile.
pub async fn create_account(pool: &DbPool, name: &str, email: &str, password: &str) -> UserProfile {
    DieselAccountRepository::new(pool.clone())
        .create(&NewAccount::new(name, email, password))
        .await
        .expect("account creation succeeds")
}
