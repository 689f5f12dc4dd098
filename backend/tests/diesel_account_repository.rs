//! Integration tests for `DieselAccountRepository` against a real store
//! file.

mod support;

use backend::domain::ports::{AccountRepository, StoreError};
use backend::domain::{Credentials, DEFAULT_AVATAR, DEFAULT_BIO, NewAccount, ProfileUpdate, UserId};
use backend::outbound::persistence::DieselAccountRepository;

#[tokio::test]
async fn created_accounts_authenticate_with_their_credentials() {
    let (_dir, pool) = support::open_initialized_store().await;
    let accounts = DieselAccountRepository::new(pool);

    let created = accounts
        .create(&NewAccount::new("Maria Popescu", "maria@test.com", "test123"))
        .await
        .expect("creation succeeds");
    assert_eq!(created.bio, DEFAULT_BIO);
    assert_eq!(created.avatar, DEFAULT_AVATAR);

    let authenticated = accounts
        .authenticate(&Credentials::new("maria@test.com", "test123"))
        .await
        .expect("lookup succeeds")
        .expect("credentials match");
    assert_eq!(authenticated.id, created.id);

    // The profile type has no password field; the secret cannot appear in
    // anything serialised from it.
    let json = serde_json::to_string(&authenticated).expect("serialise");
    assert!(!json.contains("test123"));
    assert!(!json.contains("password"));
}

#[tokio::test]
async fn duplicate_email_is_a_conflict_and_inserts_nothing() {
    let (_dir, pool) = support::open_initialized_store().await;
    let accounts = DieselAccountRepository::new(pool);

    let original = accounts
        .create(&NewAccount::new("Maria Popescu", "maria@test.com", "test123"))
        .await
        .expect("creation succeeds");

    let error = accounts
        .create(&NewAccount::new("Impostor", "maria@test.com", "other-pass"))
        .await
        .expect_err("duplicate email rejected");
    assert!(matches!(error, StoreError::Conflict { .. }));
    assert_eq!(error.to_string(), "store conflict: Email already registered");

    // No row was written for the impostor: their credentials miss, and the
    // original account is untouched.
    let impostor = accounts
        .authenticate(&Credentials::new("maria@test.com", "other-pass"))
        .await
        .expect("lookup succeeds");
    assert!(impostor.is_none());

    let still_there = accounts
        .authenticate(&Credentials::new("maria@test.com", "test123"))
        .await
        .expect("lookup succeeds")
        .expect("original credentials still match");
    assert_eq!(still_there.id, original.id);
    assert_eq!(still_there.name, "Maria Popescu");
}

#[tokio::test]
async fn partial_updates_leave_absent_fields_unchanged() {
    let (_dir, pool) = support::open_initialized_store().await;
    let accounts = DieselAccountRepository::new(pool);

    let created = accounts
        .create(&NewAccount::new("Maria Popescu", "maria@test.com", "test123"))
        .await
        .expect("creation succeeds");

    let refreshed = accounts
        .update(
            created.id,
            &ProfileUpdate::default().with_bio("Chasing mountain sunrises"),
        )
        .await
        .expect("update succeeds")
        .expect("account exists");

    assert_eq!(refreshed.bio, "Chasing mountain sunrises");
    assert_eq!(refreshed.name, "Maria Popescu", "name was not in the update");
    assert_eq!(refreshed.avatar, DEFAULT_AVATAR, "avatar was not in the update");
    assert_eq!(refreshed.email, "maria@test.com");
}

#[tokio::test]
async fn empty_updates_are_refused_without_touching_the_store() {
    let (_dir, pool) = support::open_initialized_store().await;
    let accounts = DieselAccountRepository::new(pool);

    let created = accounts
        .create(&NewAccount::new("Maria Popescu", "maria@test.com", "test123"))
        .await
        .expect("creation succeeds");

    let outcome = accounts
        .update(created.id, &ProfileUpdate::default())
        .await
        .expect("update call succeeds");
    assert!(outcome.is_none(), "empty update reports no profile");

    let unchanged = accounts
        .find(created.id)
        .await
        .expect("lookup succeeds")
        .expect("account exists");
    assert_eq!(unchanged.bio, DEFAULT_BIO);
}

#[tokio::test]
async fn updates_for_unknown_ids_report_none() {
    let (_dir, pool) = support::open_initialized_store().await;
    let accounts = DieselAccountRepository::new(pool);

    let outcome = accounts
        .update(UserId::new(9999), &ProfileUpdate::default().with_name("Ghost"))
        .await
        .expect("update call succeeds");
    assert!(outcome.is_none());
}

#[tokio::test]
async fn email_comparison_is_case_sensitive_as_stored() {
    let (_dir, pool) = support::open_initialized_store().await;
    let accounts = DieselAccountRepository::new(pool);

    accounts
        .create(&NewAccount::new("Maria Popescu", "Maria@Test.com", "test123"))
        .await
        .expect("creation succeeds");

    let lowercase = accounts
        .authenticate(&Credentials::new("maria@test.com", "test123"))
        .await
        .expect("lookup succeeds");
    assert!(lowercase.is_none(), "stored casing is the only casing that matches");

    // Different casing is a different email to the store, so it can be
    // registered separately.
    accounts
        .create(&NewAccount::new("Other Maria", "maria@test.com", "test123"))
        .await
        .expect("distinct casing registers as a distinct account");
}
