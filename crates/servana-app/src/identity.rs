//! Identity provider seam.
//!
//! The app only needs `authorize`, `clear_session` and the resulting profile.
//! [`LocalIdentity`] stands in for a hosted provider and signs in the profile
//! from configuration.

use std::time::Duration;

use servana_core::prelude::*;
use servana_core::UserProfile;

use crate::config::{IdentityOutcome, IdentitySettings};

/// Identity operations used by the profile screen
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Interactive login; resolves to the signed-in user's profile
    async fn authorize(&self) -> Result<UserProfile>;

    /// End the current session
    async fn clear_session(&self) -> Result<()>;
}

/// Identity provider backed by the configured profile
#[derive(Debug, Clone)]
pub struct LocalIdentity {
    profile: UserProfile,
    latency: Duration,
    outcome: IdentityOutcome,
}

impl LocalIdentity {
    pub fn new(profile: UserProfile, latency: Duration) -> Self {
        Self {
            profile,
            latency,
            outcome: IdentityOutcome::Complete,
        }
    }

    pub fn with_outcome(mut self, outcome: IdentityOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn from_settings(settings: &IdentitySettings) -> Self {
        Self::new(
            UserProfile {
                name: settings.name.clone(),
                email: settings.email.clone(),
                picture: settings.picture.clone(),
            },
            Duration::from_millis(settings.latency_ms),
        )
        .with_outcome(settings.outcome)
    }
}

impl IdentityProvider for LocalIdentity {
    async fn authorize(&self) -> Result<UserProfile> {
        tokio::time::sleep(self.latency).await;
        if self.outcome == IdentityOutcome::Cancel {
            return Err(Error::LoginCancelled);
        }
        if self.profile.email.trim().is_empty() {
            return Err(Error::identity("no account configured"));
        }
        debug!("Authorized {}", self.profile.email);
        Ok(self.profile.clone())
    }

    async fn clear_session(&self) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        if self.outcome == IdentityOutcome::Cancel {
            return Err(Error::LogoutCancelled);
        }
        debug!("Session cleared");
        Ok(())
    }
}
