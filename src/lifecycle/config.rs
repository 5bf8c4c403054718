use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding [`ShopConfig::inventory_buffer`].
pub const INVENTORY_BUFFER_ENV: &str = "CART_SERVICE_INVENTORY_BUFFER";

const DEFAULT_INVENTORY_BUFFER: usize = 32;

/// Runtime settings for a [`ShopSystem`](super::ShopSystem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// How many requests the inventory actor can queue before senders wait.
    pub inventory_buffer: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            inventory_buffer: DEFAULT_INVENTORY_BUFFER,
        }
    }
}

impl ShopConfig {
    /// Reads the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(INVENTORY_BUFFER_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.inventory_buffer = size,
                _ => warn!(
                    value = %raw,
                    default = DEFAULT_INVENTORY_BUFFER,
                    "Ignoring invalid {INVENTORY_BUFFER_ENV}"
                ),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = ShopConfig::from_lookup(|_| None);
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.inventory_buffer, 32);
    }

    #[test]
    fn reads_buffer_size() {
        let config = ShopConfig::from_lookup(|key| {
            (key == INVENTORY_BUFFER_ENV).then(|| " 128 ".to_string())
        });
        assert_eq!(config.inventory_buffer, 128);
    }

    #[test]
    fn rejects_zero_and_garbage() {
        for raw in ["0", "-4", "lots"] {
            let config = ShopConfig::from_lookup(|_| Some(raw.to_string()));
            assert_eq!(config.inventory_buffer, 32, "value {raw:?}");
        }
    }
}
