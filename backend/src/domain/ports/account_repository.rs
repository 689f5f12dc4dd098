//! Port for account persistence.

use async_trait::async_trait;

use crate::domain::account::{Credentials, NewAccount, ProfileUpdate, UserId, UserProfile};

use super::store_error::StoreError;

/// Port for account storage, lookup, and mutation.
///
/// Profiles returned from every method have the password stripped; the
/// [`UserProfile`] type has no field to carry one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Look up an account whose stored email and password both match the
    /// credentials exactly (case-sensitive string equality).
    ///
    /// Returns `None` when no row matches; the caller cannot tell a wrong
    /// password from an unknown email, which is intentional.
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<UserProfile>, StoreError>;

    /// Insert a new account with stock bio and avatar defaults.
    ///
    /// Fails with [`StoreError::Conflict`] when the email is already
    /// registered; the store-level uniqueness constraint backs the
    /// pre-check, so a racing duplicate insert also lands here.
    async fn create(&self, account: &NewAccount) -> Result<UserProfile, StoreError>;

    /// Apply the present fields of `update` to the account with matching id
    /// and return the refreshed profile.
    ///
    /// Returns `None` when the id is unknown or when `update` is empty;
    /// an empty update never reaches the store.
    async fn update(
        &self,
        id: UserId,
        update: &ProfileUpdate,
    ) -> Result<Option<UserProfile>, StoreError>;

    /// Fetch a profile by id.
    async fn find(&self, id: UserId) -> Result<Option<UserProfile>, StoreError>;
}

/// Fixture implementation for tests that don't exercise accounts.
///
/// Lookups miss, creation echoes the input with a fixed id, updates and
/// finds return `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountRepository;

#[async_trait]
impl AccountRepository for FixtureAccountRepository {
    async fn authenticate(
        &self,
        _credentials: &Credentials,
    ) -> Result<Option<UserProfile>, StoreError> {
        Ok(None)
    }

    async fn create(&self, account: &NewAccount) -> Result<UserProfile, StoreError> {
        Ok(UserProfile {
            id: UserId::new(1),
            email: account.email.clone(),
            name: account.name.clone(),
            bio: String::new(),
            avatar: String::new(),
        })
    }

    async fn update(
        &self,
        _id: UserId,
        _update: &ProfileUpdate,
    ) -> Result<Option<UserProfile>, StoreError> {
        Ok(None)
    }

    async fn find(&self, _id: UserId) -> Result<Option<UserProfile>, StoreError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_authentication_always_misses() {
        let repo = FixtureAccountRepository;
        let creds = Credentials::new("anyone@example.com", "anything");
        let found = repo.authenticate(&creds).await.expect("fixture lookup");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn fixture_creation_echoes_the_input() {
        let repo = FixtureAccountRepository;
        let account = NewAccount::new("Ada", "ada@example.com", "pw");
        let profile = repo.create(&account).await.expect("fixture create");
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.name, "Ada");
    }
}
