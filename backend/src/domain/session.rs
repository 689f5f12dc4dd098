//! Session/auth context.
//!
//! A single-slot, process-wide state machine holding the currently signed-in
//! profile, injected into every consumer rather than hidden behind a global.
//! It is constructed in the [`Starting`] phase and activated once the store
//! has finished initialising; consumers must render a loading state until
//! then, because `Starting` is neither signed out nor signed in.
//!
//! [`Starting`]: SessionPhase::Starting

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use super::account::{Credentials, NewAccount, ProfileUpdate, UserProfile};
use super::error::DomainError;
use super::ports::AccountRepository;

/// Message surfaced inline when credentials don't match a stored account.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Message surfaced inline when a profile update cannot be applied.
const UPDATE_FAILED: &str = "Failed to update profile";

/// Message surfaced when an operation arrives before activation.
const NOT_READY: &str = "Please wait, the app is still starting";

/// Lifecycle phase of the session slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// The store is still initialising; neither signed out nor signed in.
    Starting,
    /// No authenticated user.
    SignedOut,
    /// Exactly one authenticated user, held as a password-free snapshot.
    SignedIn(UserProfile),
}

/// Injected session context.
///
/// Constructed once at process start, torn down never; the only way back to
/// [`SessionPhase::SignedOut`] is an explicit [`logout`](Self::logout).
pub struct SessionContext {
    accounts: Arc<dyn AccountRepository>,
    phase: RwLock<SessionPhase>,
}

impl SessionContext {
    /// Create a context in the [`SessionPhase::Starting`] phase.
    pub fn starting(accounts: Arc<dyn AccountRepository>) -> Self {
        Self {
            accounts,
            phase: RwLock::new(SessionPhase::Starting),
        }
    }

    /// Leave the pre-ready window: `Starting` becomes `SignedOut`.
    ///
    /// Called exactly once by bootstrap after store initialisation resolves;
    /// any other phase is left untouched.
    pub fn activate(&self) {
        let mut phase = self.write_phase();
        if *phase == SessionPhase::Starting {
            *phase = SessionPhase::SignedOut;
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.read_phase()
    }

    /// The signed-in profile snapshot, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        match self.read_phase() {
            SessionPhase::SignedIn(profile) => Some(profile),
            _ => None,
        }
    }

    /// Authenticate and transition to `SignedIn` on success.
    ///
    /// A credential miss keeps the current phase and surfaces
    /// "Invalid email or password"; a store failure collapses into the same
    /// inline message (logged for diagnostics) so the sign-in screen never
    /// crashes.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, DomainError> {
        self.ensure_ready()?;

        let credentials = Credentials::new(email, password);
        let found = match self.accounts.authenticate(&credentials).await {
            Ok(found) => found,
            Err(error) => {
                warn!(%error, "credential lookup failed; treating as a miss");
                None
            }
        };

        match found {
            Some(profile) => {
                debug!(user = %profile.id, "login succeeded");
                *self.write_phase() = SessionPhase::SignedIn(profile.clone());
                Ok(profile)
            }
            None => Err(DomainError::not_found(INVALID_CREDENTIALS)),
        }
    }

    /// Create an account and transition to `SignedIn` with it.
    ///
    /// A duplicate email keeps the current phase and surfaces the store's
    /// conflict reason.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, DomainError> {
        self.ensure_ready()?;

        let account = NewAccount::new(name, email, password);
        match self.accounts.create(&account).await {
            Ok(profile) => {
                debug!(user = %profile.id, "signup succeeded");
                *self.write_phase() = SessionPhase::SignedIn(profile.clone());
                Ok(profile)
            }
            Err(error) if error.is_conflict() => Err(DomainError::conflict(error.to_string())),
            Err(error) => {
                warn!(%error, "account creation failed");
                Err(DomainError::store_unavailable(
                    "Could not create your account right now",
                ))
            }
        }
    }

    /// Discard the in-memory snapshot unconditionally.
    ///
    /// Never touches the store, and lands `SignedOut` from any phase.
    pub fn logout(&self) {
        *self.write_phase() = SessionPhase::SignedOut;
    }

    /// Apply a partial profile update and refresh the snapshot.
    ///
    /// Only meaningful while signed in; an empty update, an unknown id, or
    /// a store failure all report "Failed to update profile" without
    /// changing phase.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, DomainError> {
        self.ensure_ready()?;

        let Some(current) = self.current_user() else {
            return Err(DomainError::not_found(UPDATE_FAILED));
        };
        if update.is_empty() {
            return Err(DomainError::validation_failure(UPDATE_FAILED));
        }

        match self.accounts.update(current.id, update).await {
            Ok(Some(profile)) => {
                *self.write_phase() = SessionPhase::SignedIn(profile.clone());
                Ok(profile)
            }
            Ok(None) => Err(DomainError::not_found(UPDATE_FAILED)),
            Err(error) => {
                warn!(%error, "profile update failed");
                Err(DomainError::store_unavailable(UPDATE_FAILED))
            }
        }
    }

    fn ensure_ready(&self) -> Result<(), DomainError> {
        if self.read_phase() == SessionPhase::Starting {
            return Err(DomainError::store_unavailable(NOT_READY));
        }
        Ok(())
    }

    fn read_phase(&self) -> SessionPhase {
        self.phase
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write_phase(&self) -> std::sync::RwLockWriteGuard<'_, SessionPhase> {
        self.phase.write().unwrap_or_else(PoisonError::into_inner)
    }
}
