//! # Demo Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_CURRENCY_SYMBOL=$                                         │
//! │     CHECKOUT_RECEIPT_FORMAT=json                                       │
//! │     CHECKOUT_SHIPPING_FEE_CENTS=3000                                   │
//! │     CHECKOUT_SHIPPING_PER_GRAMS=1100                                   │
//! │                                                                         │
//! │  2. TOML Config File (path from CHECKOUT_CONFIG)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     no symbol, text receipts, 30.00 per 1.1 kg                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! currency_symbol = "EGP "
//! receipt_format = "text"   # text | json
//!
//! [shipping]
//! fee_cents = 3000
//! per_grams = 1100
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};

use checkout_core::{Money, ShippingRate, Weight};

use crate::error::{ConfigError, ConfigResult};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "CHECKOUT_CONFIG";

// =============================================================================
// Receipt Format
// =============================================================================

/// How successful checkouts are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptFormat {
    /// Shipment notice and receipt as console text.
    #[default]
    Text,
    /// The receipt as pretty-printed JSON.
    Json,
}

impl fmt::Display for ReceiptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptFormat::Text => write!(f, "text"),
            ReceiptFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReceiptFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReceiptFormat::Text),
            "json" => Ok(ReceiptFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "receipt_format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Shipping Settings
// =============================================================================

/// Shipping rate as it appears in config: `fee_cents` per `per_grams`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingSettings {
    #[serde(default = "default_fee_cents")]
    pub fee_cents: i64,

    #[serde(default = "default_per_grams")]
    pub per_grams: u64,
}

fn default_fee_cents() -> i64 {
    3000
}

fn default_per_grams() -> u64 {
    1100
}

impl Default for ShippingSettings {
    fn default() -> Self {
        ShippingSettings {
            fee_cents: default_fee_cents(),
            per_grams: default_per_grams(),
        }
    }
}

impl ShippingSettings {
    /// Converts to the core rate type, validating it.
    pub fn rate(&self) -> ConfigResult<ShippingRate> {
        Ok(ShippingRate::new(
            Money::from_cents(self.fee_cents),
            Weight::from_grams(self.per_grams),
        )?)
    }
}

// =============================================================================
// Demo Config
// =============================================================================

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Printed in front of every amount on text receipts.
    #[serde(default)]
    pub currency_symbol: String,

    #[serde(default)]
    pub receipt_format: ReceiptFormat,

    #[serde(default)]
    pub shipping: ShippingSettings,
}

impl DemoConfig {
    /// Loads config from `config_path` (or `CHECKOUT_CONFIG`), then applies
    /// environment overrides and validates.
    ///
    /// A missing file falls back to defaults; an unreadable or malformed one
    /// is an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`DemoConfig::load`] with every environment read going through
    /// `lookup`, including `CHECKOUT_CONFIG`.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let path = config_path.or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from));
        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading checkout config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path, source })?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.shipping.rate().map(|_| ())
    }

    /// Applies overrides from `lookup` (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(symbol) = lookup("CHECKOUT_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(format) = lookup("CHECKOUT_RECEIPT_FORMAT") {
            debug!(format = %format, "Overriding receipt format from environment");
            self.receipt_format = format.parse()?;
        }

        if let Some(fee) = lookup("CHECKOUT_SHIPPING_FEE_CENTS") {
            self.shipping.fee_cents = parse_env("CHECKOUT_SHIPPING_FEE_CENTS", &fee)?;
        }

        if let Some(per) = lookup("CHECKOUT_SHIPPING_PER_GRAMS") {
            self.shipping.per_grams = parse_env("CHECKOUT_SHIPPING_PER_GRAMS", &per)?;
        }

        Ok(())
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.currency_symbol, "");
        assert_eq!(config.receipt_format, ReceiptFormat::Text);
        assert_eq!(config.shipping.rate().unwrap(), ShippingRate::default());
    }

    #[test]
    fn test_receipt_format_parsing() {
        assert_eq!("json".parse::<ReceiptFormat>().unwrap(), ReceiptFormat::Json);
        assert_eq!("TEXT".parse::<ReceiptFormat>().unwrap(), ReceiptFormat::Text);
        assert!("pdf".parse::<ReceiptFormat>().is_err());
        assert_eq!(ReceiptFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_from_toml() {
        let config = DemoConfig::from_toml(
            r#"
            currency_symbol = "EGP "
            receipt_format = "json"

            [shipping]
            fee_cents = 1000
            "#,
        )
        .unwrap();

        assert_eq!(config.currency_symbol, "EGP ");
        assert_eq!(config.receipt_format, ReceiptFormat::Json);
        assert_eq!(config.shipping.fee_cents, 1000);
        assert_eq!(config.shipping.per_grams, 1100);
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            DemoConfig::from_toml("receipt_format = 7"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DemoConfig::default();
        config
            .apply_overrides(env(&[
                ("CHECKOUT_CURRENCY_SYMBOL", "$"),
                ("CHECKOUT_RECEIPT_FORMAT", "json"),
                ("CHECKOUT_SHIPPING_PER_GRAMS", "1000"),
            ]))
            .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.receipt_format, ReceiptFormat::Json);
        assert_eq!(config.shipping.per_grams, 1000);
        assert_eq!(config.shipping.fee_cents, 3000);
    }

    #[test]
    fn test_invalid_env_value() {
        let mut config = DemoConfig::default();
        let err = config
            .apply_overrides(env(&[("CHECKOUT_SHIPPING_FEE_CENTS", "thirty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "CHECKOUT_SHIPPING_FEE_CENTS"));
    }

    #[test]
    fn test_zero_weight_basis_rejected() {
        let mut config = DemoConfig::default();
        config.shipping.per_grams = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRate(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("checkout-demo-no-such-config.toml");
        let config = DemoConfig::load_with(Some(path), env(&[])).unwrap();
        assert_eq!(config.shipping.per_grams, 1100);
        assert_eq!(config.receipt_format, ReceiptFormat::Text);
    }

    #[test]
    fn test_load_file_then_env_overrides() {
        let path = std::env::temp_dir().join(format!(
            "checkout-demo-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "currency_symbol = \"EGP \"\n[shipping]\nfee_cents = 1000\n",
        )
        .unwrap();

        let config = DemoConfig::load_with(
            None,
            env(&[
                (CONFIG_PATH_ENV, path.to_str().unwrap()),
                ("CHECKOUT_SHIPPING_FEE_CENTS", "2000"),
            ]),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.currency_symbol, "EGP ");
        assert_eq!(config.shipping.fee_cents, 2000);
        assert_eq!(config.shipping.per_grams, 1100);
    }
}
