//! Shared types for the order orchestration core.

pub mod types;

pub use types::ProductId;
