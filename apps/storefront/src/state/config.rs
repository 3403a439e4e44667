//! # Configuration State
//!
//! Stores configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use storefront_core::Money;

/// Most decimal places `format_currency` will render.
const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name shown in the header
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// How long a cart drawer banner stays up
    pub feedback_ttl_ms: u64,

    /// How long the "Added to Cart!" badge stays on a product card
    pub added_badge_ms: u64,
}

impl Default for StoreConfig {
    /// ## Default Values
    /// - Store: "Storefront"
    /// - Currency: `$`, 2 decimals
    /// - Drawer banner: 3 s, added badge: 2 s
    fn default() -> Self {
        StoreConfig {
            store_name: "Storefront".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            feedback_ttl_ms: 3_000,
            added_badge_ms: 2_000,
        }
    }
}

impl StoreConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOREFRONT_CURRENCY_DECIMALS`: Override decimal places (0-4)
    /// - `STOREFRONT_FEEDBACK_TTL_MS`: Override drawer banner duration
    /// - `STOREFRONT_ADDED_BADGE_MS`: Override added badge duration
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    ///
    /// Values that fail to parse keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("STOREFRONT_CURRENCY_DECIMALS")
            .and_then(|v| v.parse().ok())
            .filter(|d| *d <= MAX_CURRENCY_DECIMALS)
        {
            config.currency_decimals = decimals;
        }

        if let Some(ttl) = lookup("STOREFRONT_FEEDBACK_TTL_MS").and_then(|v| v.parse().ok()) {
            config.feedback_ttl_ms = ttl;
        }

        if let Some(ms) = lookup("STOREFRONT_ADDED_BADGE_MS").and_then(|v| v.parse().ok()) {
            config.added_badge_ms = ms;
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// # use storefront_app::state::StoreConfig;
    /// # use storefront_core::Money;
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(29_999)), "$299.99");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        let config = StoreConfig {
            currency_symbol: "€".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(6_999)), "€69.99");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STOREFRONT_STORE_NAME", "Gadget Hub"),
            ("STOREFRONT_FEEDBACK_TTL_MS", "5000"),
        ]
        .into_iter()
        .collect();

        let config = StoreConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Gadget Hub");
        assert_eq!(config.feedback_ttl_ms, 5_000);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.added_badge_ms, 2_000);
    }

    #[test]
    fn test_currency_decimals_override() {
        let config = StoreConfig::from_lookup(|k| {
            (k == "STOREFRONT_CURRENCY_DECIMALS").then(|| "0".to_string())
        });
        assert_eq!(config.currency_decimals, 0);
        // Cents rendered with no fractional digits: 29999 -> $29999
        assert_eq!(config.format_currency(Money::from_cents(29_999)), "$29999");

        let config = StoreConfig::from_lookup(|k| {
            (k == "STOREFRONT_CURRENCY_DECIMALS").then(|| "3".to_string())
        });
        assert_eq!(config.format_currency(Money::from_cents(1_234)), "$1.234");

        let config = StoreConfig::from_lookup(|k| {
            (k == "STOREFRONT_CURRENCY_DECIMALS").then(|| "30".to_string())
        });
        assert_eq!(config.currency_decimals, 2);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = StoreConfig::from_lookup(|k| {
            (k == "STOREFRONT_FEEDBACK_TTL_MS").then(|| "soon".to_string())
        });
        assert_eq!(config, StoreConfig::default());
    }
}
