//! Coordinator configuration.

/// Default upper bound on order quantity.
const DEFAULT_MAX_ORDER_QUANTITY: i32 = 1000;

/// Limits the coordinator applies before invoking any capability.
///
/// Reads from environment variables:
/// - `MAX_ORDER_QUANTITY` — quantity bound for `place_order` (default: `1000`)
///
/// The configuration is fixed at construction; there is no runtime mutation.
#[derive(Debug, Clone, Copy)]
pub struct CoordinatorConfig {
    /// Orders at or above this quantity are rejected outright.
    pub max_order_quantity: i32,
}

impl CoordinatorConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            max_order_quantity: std::env::var("MAX_ORDER_QUANTITY")
                .ok()
                .and_then(|q| q.parse().ok())
                .unwrap_or(DEFAULT_MAX_ORDER_QUANTITY),
        }
    }
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            max_order_quantity: DEFAULT_MAX_ORDER_QUANTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.max_order_quantity, 1000);
    }

    #[test]
    fn test_explicit_bound() {
        let config = CoordinatorConfig {
            max_order_quantity: 50,
        };
        assert_eq!(config.max_order_quantity, 50);
    }
}
