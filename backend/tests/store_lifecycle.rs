//! End-to-end lifecycle of a freshly bootstrapped store.
//!
//! Covers the documented seed data, the session phase machine through
//! bootstrap, idempotent re-initialisation, and the flagged plaintext
//! password scheme.

mod support;

use backend::bootstrap::{App, AppConfig};
use backend::domain::ports::AccountRepository;
use backend::domain::{Credentials, SessionPhase, UserStats};
use backend::outbound::persistence::{
    ADMIN_EMAIL, ADMIN_NAME, ADMIN_PASSWORD, DieselAccountRepository, initialize,
};

#[tokio::test]
async fn bootstrap_seeds_once_and_signs_the_administrator_in() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("store.db");

    let app = App::bootstrap(AppConfig::new(&path)).await.expect("bootstrap succeeds");
    assert_eq!(app.session.phase(), SessionPhase::SignedOut);
    assert!(!app.catalog.is_empty());

    let admin = app
        .session
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("seeded administrator can sign in");
    assert_eq!(admin.name, ADMIN_NAME);

    // The documented seed: one review and two favourites.
    let stats = app.stats.stats(admin.id).await;
    assert_eq!(stats, UserStats { reviews: 1, favorites: 2 });

    // A second boot on the same file must not duplicate the seed.
    let again = App::bootstrap(AppConfig::new(&path)).await.expect("second bootstrap succeeds");
    let admin_again = again
        .session
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("administrator still signs in");
    assert_eq!(admin_again.id, admin.id);
    assert_eq!(
        again.stats.stats(admin_again.id).await,
        UserStats { reviews: 1, favorites: 2 }
    );
}

#[tokio::test]
async fn initialize_is_safe_to_call_repeatedly() {
    let (_dir, pool) = support::open_initialized_store().await;

    initialize(&pool).await.expect("second initialise succeeds");
    initialize(&pool).await.expect("third initialise succeeds");

    let accounts = DieselAccountRepository::new(pool);
    let admin = accounts
        .authenticate(&Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD))
        .await
        .expect("lookup succeeds")
        .expect("administrator exists");
    assert_eq!(admin.email, ADMIN_EMAIL);
}

#[tokio::test]
async fn login_failures_surface_the_inline_message() {
    let dir = tempfile::tempdir().expect("temp dir");
    let app = App::bootstrap(AppConfig::new(dir.path().join("store.db")))
        .await
        .expect("bootstrap succeeds");

    let error = app
        .session
        .login(ADMIN_EMAIL, "wrong-password")
        .await
        .expect_err("wrong password fails");
    assert_eq!(error.message(), "Invalid email or password");
    assert_eq!(app.session.phase(), SessionPhase::SignedOut);
}

/// Passwords are stored and compared as raw strings: a deliberate,
/// documented gap in this design, pinned here so it cannot change silently.
/// Anything beyond a prototype must replace the comparison with a salted
/// one-way hash, and rewrite this test around the hash scheme when it does.
#[tokio::test]
async fn plaintext_password_comparison_is_a_flagged_hardening_gap() {
    let (_dir, pool) = support::open_initialized_store().await;
    let accounts = DieselAccountRepository::new(pool);

    // Exact string equality matches.
    let admin = accounts
        .authenticate(&Credentials::new(ADMIN_EMAIL, ADMIN_PASSWORD))
        .await
        .expect("lookup succeeds");
    assert!(admin.is_some());

    // Comparison is case-sensitive on both fields; no hashing is involved.
    let wrong_case = accounts
        .authenticate(&Credentials::new(ADMIN_EMAIL, "ADMIN123"))
        .await
        .expect("lookup succeeds");
    assert!(wrong_case.is_none());

    let wrong_email_case = accounts
        .authenticate(&Credentials::new("Admin@hackathon.ro", ADMIN_PASSWORD))
        .await
        .expect("lookup succeeds");
    assert!(wrong_email_case.is_none());
}
