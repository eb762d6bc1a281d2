//! Order orchestration core.
//!
//! This crate decides whether a purchase or cancellation succeeds by
//! coordinating three external capabilities behind narrow traits:
//! inventory, tax, and payment.
//!
//! Placing an order walks a linear pipeline:
//! 1. Check availability with the inventory capability
//! 2. Quote the total cost with the tax capability
//! 3. Charge the total with the payment capability
//!
//! Each stage short-circuits on a decline (`Ok(false)`), while capability
//! faults propagate to the caller untouched. Cancelling an order restocks
//! the inventory and then refunds the payment.

pub mod config;
pub mod coordinator;
pub mod cost;
pub mod error;
pub mod services;

pub use config::CoordinatorConfig;
pub use coordinator::OrderCoordinator;
pub use cost::CostQuote;
pub use error::OrderError;
pub use services::{
    InMemoryInventoryService, InMemoryPaymentService, InMemoryTaxService, InventoryService,
    PaymentService, TaxService,
};
