//! Capability traits and in-memory implementations for the order pipelines.

pub mod inventory;
pub mod payment;
pub mod tax;

pub use inventory::{InMemoryInventoryService, InventoryService};
pub use payment::{InMemoryPaymentService, PaymentService};
pub use tax::{InMemoryTaxService, TaxService};
