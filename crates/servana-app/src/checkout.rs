//! Payment checkout seam.
//!
//! The checkout is opened with a [`CheckoutOptions`] payload and resolves to a
//! payment reference or a failure with an optional description.
//! [`SimulatedCheckout`] stands in for the hosted checkout SDK.

use std::time::Duration;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use servana_core::{Provider, UserProfile};

use crate::config::{CheckoutOutcome, PaymentSettings};
use crate::theme::Palette;

/// Fallback shown when the checkout fails without a description
pub const FALLBACK_FAILURE_MESSAGE: &str = "Payment failed";

/// Customer identity pre-filled into the checkout form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefill {
    pub email: String,
    pub contact: String,
    pub name: String,
}

impl Prefill {
    /// Logged-in user's name and email when available, configured placeholder otherwise
    pub fn for_user(user: Option<&UserProfile>, settings: &PaymentSettings) -> Self {
        match user {
            Some(user) => Self {
                email: user.email.clone(),
                contact: settings.prefill_contact.clone(),
                name: user.name.clone(),
            },
            None => Self {
                email: settings.prefill_email.clone(),
                contact: settings.prefill_contact.clone(),
                name: settings.prefill_name.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTheme {
    pub color: String,
}

/// Configuration object handed to the checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOptions {
    pub description: String,
    pub image: String,
    pub currency: String,
    pub key: String,
    /// Minor units (paise)
    pub amount: i64,
    pub name: String,
    pub prefill: Prefill,
    pub theme: CheckoutTheme,
}

impl CheckoutOptions {
    /// Build the checkout payload for booking `provider`.
    ///
    /// The amount comes straight from the catalog's structured price.
    pub fn for_provider(
        provider: &Provider,
        prefill: Prefill,
        palette: &Palette,
        settings: &PaymentSettings,
    ) -> Self {
        let money = provider.price.money;
        Self {
            description: format!("Payment for {}", provider.service_name),
            image: provider.image.to_string(),
            currency: money.currency().code().to_string(),
            key: settings.key.clone(),
            amount: money.minor_units(),
            name: provider.name.to_string(),
            prefill,
            theme: CheckoutTheme {
                color: palette.primary.to_hex(),
            },
        }
    }
}

/// Successful checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSuccess {
    pub payment_reference: String,
}

/// Failed or dismissed checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentFailure {
    pub description: Option<String>,
}

impl PaymentFailure {
    /// Text for the error dialog
    pub fn user_message(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(FALLBACK_FAILURE_MESSAGE)
    }
}

pub type CheckoutResult = std::result::Result<PaymentSuccess, PaymentFailure>;

/// Hosted checkout
#[trait_variant::make(PaymentGateway: Send)]
pub trait LocalPaymentGateway {
    async fn open(&self, options: CheckoutOptions) -> CheckoutResult;
}

/// Checkout stand-in that approves or declines after a fixed latency
#[derive(Debug, Clone)]
pub struct SimulatedCheckout {
    outcome: CheckoutOutcome,
    decline_reason: Option<String>,
    latency: Duration,
}

impl SimulatedCheckout {
    pub fn new(outcome: CheckoutOutcome, decline_reason: Option<String>, latency: Duration) -> Self {
        Self {
            outcome,
            decline_reason,
            latency,
        }
    }

    pub fn from_settings(settings: &PaymentSettings) -> Self {
        Self::new(
            settings.outcome,
            settings.decline_reason.clone(),
            Duration::from_millis(settings.latency_ms),
        )
    }
}

impl PaymentGateway for SimulatedCheckout {
    async fn open(&self, options: CheckoutOptions) -> CheckoutResult {
        match serde_json::to_string(&options) {
            Ok(payload) => tracing::debug!("Opening checkout: {}", payload),
            Err(e) => tracing::warn!("Could not serialize checkout options: {}", e),
        }

        tokio::time::sleep(self.latency).await;

        match self.outcome {
            CheckoutOutcome::Approve => Ok(PaymentSuccess {
                payment_reference: generate_payment_reference(),
            }),
            CheckoutOutcome::Decline => Err(PaymentFailure {
                description: self.decline_reason.clone(),
            }),
        }
    }
}

/// `pay_` followed by 14 random alphanumerics
fn generate_payment_reference() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(14)
        .map(char::from)
        .collect();
    format!("pay_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DARK_PALETTE, LIGHT_PALETTE};
    use servana_core::providers_for_service;

    fn electrician() -> &'static Provider {
        providers_for_service("Electrician")[0]
    }

    #[test]
    fn test_options_use_structured_amount() {
        let settings = PaymentSettings::default();
        let prefill = Prefill::for_user(None, &settings);

        let options = CheckoutOptions::for_provider(electrician(), prefill, &LIGHT_PALETTE, &settings);

        assert_eq!(options.amount, 5000);
        assert_eq!(options.currency, "INR");
        assert_eq!(options.description, "Payment for Electrician");
        assert_eq!(options.name, "Rajesh Kumar");
        assert_eq!(options.key, "rzp_test_servana");
        assert_eq!(options.theme.color, "#6200EE");
    }

    #[test]
    fn test_options_theme_color_follows_palette() {
        let settings = PaymentSettings::default();
        let prefill = Prefill::for_user(None, &settings);
        let options = CheckoutOptions::for_provider(electrician(), prefill, &DARK_PALETTE, &settings);
        assert_eq!(options.theme.color, "#BB86FC");
    }

    #[test]
    fn test_prefill_uses_logged_in_user() {
        let settings = PaymentSettings::default();
        let user = UserProfile {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            picture: None,
        };

        let prefill = Prefill::for_user(Some(&user), &settings);

        assert_eq!(prefill.name, "Asha");
        assert_eq!(prefill.email, "asha@example.com");
        assert_eq!(prefill.contact, "9191919191");
    }

    #[test]
    fn test_prefill_placeholder_when_logged_out() {
        let prefill = Prefill::for_user(None, &PaymentSettings::default());
        assert_eq!(prefill.email, "user@example.com");
        assert_eq!(prefill.name, "User Name");
    }

    #[test]
    fn test_options_serialize_to_sdk_shape() {
        let settings = PaymentSettings::default();
        let prefill = Prefill::for_user(None, &settings);
        let options = CheckoutOptions::for_provider(electrician(), prefill, &LIGHT_PALETTE, &settings);

        let value = serde_json::to_value(&options).unwrap();

        assert_eq!(value["amount"], 5000);
        assert_eq!(value["prefill"]["contact"], "9191919191");
        assert_eq!(value["theme"]["color"], "#6200EE");
    }

    #[test]
    fn test_failure_message_fallback() {
        let failure = PaymentFailure {
            description: Some("Card declined".to_string()),
        };
        assert_eq!(failure.user_message(), "Card declined");

        let failure = PaymentFailure { description: None };
        assert_eq!(failure.user_message(), "Payment failed");

        let failure = PaymentFailure {
            description: Some("  ".to_string()),
        };
        assert_eq!(failure.user_message(), "Payment failed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_checkout_approves() {
        let checkout = SimulatedCheckout::new(CheckoutOutcome::Approve, None, Duration::from_secs(2));
        let settings = PaymentSettings::default();
        let options = CheckoutOptions::for_provider(
            electrician(),
            Prefill::for_user(None, &settings),
            &LIGHT_PALETTE,
            &settings,
        );

        let success = PaymentGateway::open(&checkout, options).await.unwrap();

        assert!(success.payment_reference.starts_with("pay_"));
        assert_eq!(success.payment_reference.len(), 18);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_checkout_declines_with_reason() {
        let checkout = SimulatedCheckout::new(
            CheckoutOutcome::Decline,
            Some("Card declined".to_string()),
            Duration::from_millis(5),
        );
        let settings = PaymentSettings::default();
        let options = CheckoutOptions::for_provider(
            electrician(),
            Prefill::for_user(None, &settings),
            &LIGHT_PALETTE,
            &settings,
        );

        let failure = PaymentGateway::open(&checkout, options).await.unwrap_err();

        assert_eq!(failure.user_message(), "Card declined");
    }
}
