//! Payment capability trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::ProductId;

use crate::error::OrderError;

/// Trait for payment processing.
///
/// A negative amount signifies a refund. Processing either succeeds or is
/// refused in full; there is no partial-success state.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Attempts to move funds for a product, reporting success or refusal.
    async fn process_payment(&self, product_id: &ProductId, amount: f64)
        -> Result<bool, OrderError>;
}

#[derive(Debug, Default)]
struct InMemoryPaymentState {
    transactions: Vec<(ProductId, f64)>,
    decline: bool,
    fail: bool,
}

/// In-memory payment service for testing.
///
/// Records every transaction it is asked to process, declined ones
/// included, so callers can assert on exact amounts after the fact.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    state: Arc<RwLock<InMemoryPaymentState>>,
}

impl InMemoryPaymentService {
    /// Creates a new in-memory payment service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures processing to refuse transactions without a fault.
    pub fn set_decline(&self, decline: bool) {
        self.state.write().unwrap().decline = decline;
    }

    /// Configures processing to fail with an infrastructure fault.
    pub fn set_fail(&self, fail: bool) {
        self.state.write().unwrap().fail = fail;
    }

    /// Returns how many transactions were processed, declined ones included.
    pub fn payment_count(&self) -> usize {
        self.state.read().unwrap().transactions.len()
    }

    /// Returns the processed transactions in order.
    pub fn transactions(&self) -> Vec<(ProductId, f64)> {
        self.state.read().unwrap().transactions.clone()
    }
}

#[async_trait]
impl PaymentService for InMemoryPaymentService {
    async fn process_payment(
        &self,
        product_id: &ProductId,
        amount: f64,
    ) -> Result<bool, OrderError> {
        let mut state = self.state.write().unwrap();

        if state.fail {
            return Err(OrderError::Payment("Payment gateway unavailable".to_string()));
        }

        state.transactions.push((product_id.clone(), amount));
        Ok(!state.decline)
    }
}
