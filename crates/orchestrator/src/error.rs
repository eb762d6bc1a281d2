//! Orchestrator error types.

use thiserror::Error;

/// Errors that abort an order pipeline.
///
/// These are the hard-fault channel: a declined order, unavailable stock,
/// or refused payment is an `Ok(false)` outcome, never an error. Capability
/// faults carry the implementation-defined message unmodified.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Order quantity reached the configured maximum.
    #[error("Order quantity {quantity} exceeds the maximum of {max}, please contact support")]
    ExcessiveQuantity { quantity: i32, max: i32 },

    /// Inventory capability fault.
    #[error("Inventory service error: {0}")]
    Inventory(String),

    /// Tax capability fault.
    #[error("Tax service error: {0}")]
    Tax(String),

    /// Payment capability fault.
    #[error("Payment service error: {0}")]
    Payment(String),
}

/// Convenience type alias for orchestrator results.
pub type Result<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excessive_quantity_message_names_the_bound() {
        let err = OrderError::ExcessiveQuantity {
            quantity: 1200,
            max: 1000,
        };
        let msg = err.to_string();
        assert!(msg.contains("1200"));
        assert!(msg.contains("1000"));
    }

    #[test]
    fn capability_faults_carry_the_original_message() {
        let err = OrderError::Inventory("connection reset".to_string());
        assert_eq!(err.to_string(), "Inventory service error: connection reset");
    }
}
