//! Configuration types for Servana
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

/// Application settings (`<config_dir>/servana/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub chat: ChatSettings,

    #[serde(default)]
    pub payment: PaymentSettings,

    #[serde(default)]
    pub identity: IdentitySettings,
}

/// Which appearance the app starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Sample the host appearance at startup
    #[default]
    System,
    Light,
    Dark,
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: ThemePreference,
}

/// FAQ chat settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatSettings {
    /// Lower bound (inclusive) of the simulated typing delay
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,

    /// Upper bound (exclusive) of the simulated typing delay
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

fn default_min_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    3000
}

/// What the local checkout does when opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutOutcome {
    #[default]
    Approve,
    Decline,
}

/// Payment checkout settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaymentSettings {
    /// Merchant key passed to the checkout
    #[serde(default = "default_payment_key")]
    pub key: String,

    /// Simulated round-trip time of the checkout
    #[serde(default = "default_payment_latency_ms")]
    pub latency_ms: u64,

    #[serde(default)]
    pub outcome: CheckoutOutcome,

    /// Description reported on decline (None = checkout gives no description)
    #[serde(default)]
    pub decline_reason: Option<String>,

    /// Placeholder identity used when nobody is logged in
    #[serde(default = "default_prefill_email")]
    pub prefill_email: String,

    #[serde(default = "default_prefill_contact")]
    pub prefill_contact: String,

    #[serde(default = "default_prefill_name")]
    pub prefill_name: String,
}

impl Default for PaymentSettings {
    fn default() -> Self {
        Self {
            key: default_payment_key(),
            latency_ms: default_payment_latency_ms(),
            outcome: CheckoutOutcome::default(),
            decline_reason: None,
            prefill_email: default_prefill_email(),
            prefill_contact: default_prefill_contact(),
            prefill_name: default_prefill_name(),
        }
    }
}

fn default_payment_key() -> String {
    "rzp_test_servana".to_string()
}

fn default_payment_latency_ms() -> u64 {
    1500
}

fn default_prefill_email() -> String {
    "user@example.com".to_string()
}

fn default_prefill_contact() -> String {
    "9191919191".to_string()
}

fn default_prefill_name() -> String {
    "User Name".to_string()
}

/// What the local identity provider does when asked to log in or out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityOutcome {
    #[default]
    Complete,
    /// Behave as if the user dismissed the prompt
    Cancel,
}

/// Local identity provider settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IdentitySettings {
    #[serde(default = "default_identity_name")]
    pub name: String,

    #[serde(default = "default_identity_email")]
    pub email: String,

    #[serde(default)]
    pub picture: Option<String>,

    /// Simulated round-trip time of authorize/clear-session
    #[serde(default = "default_identity_latency_ms")]
    pub latency_ms: u64,

    #[serde(default)]
    pub outcome: IdentityOutcome,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            name: default_identity_name(),
            email: default_identity_email(),
            picture: None,
            latency_ms: default_identity_latency_ms(),
            outcome: IdentityOutcome::default(),
        }
    }
}

fn default_identity_name() -> String {
    "John Doe".to_string()
}

fn default_identity_email() -> String {
    "john@example.com".to_string()
}

fn default_identity_latency_ms() -> u64 {
    800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.ui.theme, ThemePreference::System);
        assert_eq!(settings.chat.min_delay_ms, 1000);
        assert_eq!(settings.chat.max_delay_ms, 3000);
        assert_eq!(settings.payment.outcome, CheckoutOutcome::Approve);
        assert_eq!(settings.payment.prefill_email, "user@example.com");
        assert!(settings.payment.decline_reason.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
theme = "dark"

[payment]
outcome = "decline"
decline_reason = "Card declined"
"#,
        )
        .unwrap();

        assert_eq!(settings.ui.theme, ThemePreference::Dark);
        assert_eq!(settings.payment.outcome, CheckoutOutcome::Decline);
        assert_eq!(
            settings.payment.decline_reason.as_deref(),
            Some("Card declined")
        );
        assert_eq!(settings.payment.key, "rzp_test_servana");
        assert_eq!(settings.chat, ChatSettings::default());
    }

    #[test]
    fn test_settings_roundtrip_through_toml() {
        let settings = Settings::default();
        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
