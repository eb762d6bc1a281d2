//! Tax capability trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::ProductId;

use crate::error::OrderError;

/// Default tax rate for the in-memory service.
const DEFAULT_RATE: f64 = 0.1;

/// Trait for tax calculation.
///
/// A negative return value is the capability contract for "invalid or
/// unavailable" — an in-band decline, distinct from an `Err` fault. The
/// coordinator converts it into an explicit quote outcome immediately.
#[async_trait]
pub trait TaxService: Send + Sync {
    /// Returns the tax owed for a product at the given price.
    async fn calculate_tax(&self, product_id: &ProductId, price: f64) -> Result<f64, OrderError>;
}

#[derive(Debug)]
struct InMemoryTaxState {
    rate: f64,
    flat_amount: Option<f64>,
    calculations: u32,
    invalid: bool,
    fail: bool,
}

/// In-memory tax service for testing.
///
/// Computes a flat-rate tax (`price * rate`) by default; a fixed per-call
/// amount can be configured instead.
#[derive(Debug, Clone)]
pub struct InMemoryTaxService {
    state: Arc<RwLock<InMemoryTaxState>>,
}

impl InMemoryTaxService {
    /// Creates a tax service with the default rate.
    pub fn new() -> Self {
        Self::with_rate(DEFAULT_RATE)
    }

    /// Creates a tax service charging `price * rate`.
    pub fn with_rate(rate: f64) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaxState {
                rate,
                flat_amount: None,
                calculations: 0,
                invalid: false,
                fail: false,
            })),
        }
    }

    /// Creates a tax service charging a fixed amount per calculation.
    pub fn with_flat_amount(amount: f64) -> Self {
        let service = Self::with_rate(0.0);
        service.state.write().unwrap().flat_amount = Some(amount);
        service
    }

    /// Configures calculations to report the price as untaxable.
    pub fn set_invalid(&self, invalid: bool) {
        self.state.write().unwrap().invalid = invalid;
    }

    /// Configures calculations to fail with an infrastructure fault.
    pub fn set_fail(&self, fail: bool) {
        self.state.write().unwrap().fail = fail;
    }

    /// Returns how many tax calculations were made.
    pub fn calculations(&self) -> u32 {
        self.state.read().unwrap().calculations
    }
}

impl Default for InMemoryTaxService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaxService for InMemoryTaxService {
    async fn calculate_tax(&self, _product_id: &ProductId, price: f64) -> Result<f64, OrderError> {
        let mut state = self.state.write().unwrap();
        state.calculations += 1;

        if state.fail {
            return Err(OrderError::Tax("Tax service unavailable".to_string()));
        }

        if state.invalid {
            return Ok(-1.0);
        }

        Ok(state.flat_amount.unwrap_or(price * state.rate))
    }
}
