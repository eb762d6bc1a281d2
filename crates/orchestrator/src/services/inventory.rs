//! Inventory capability trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::ProductId;

use crate::error::OrderError;

/// Trait for inventory operations.
///
/// The availability answer is authoritative: the coordinator never
/// re-checks, and implementations are free to reserve stock as a side
/// effect of a successful check. Infrastructure faults surface as
/// `Err(OrderError::Inventory(_))` and are propagated by the coordinator
/// unmodified.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Returns whether the requested quantity of a product can be fulfilled.
    async fn check_availability(
        &self,
        product_id: &ProductId,
        quantity: i32,
    ) -> Result<bool, OrderError>;

    /// Returns stock to inventory, reporting whether restocking succeeded.
    async fn restock(&self, product_id: &ProductId, quantity: i32) -> Result<bool, OrderError>;
}

#[derive(Debug, Default)]
struct InMemoryInventoryState {
    stock: HashMap<ProductId, i64>,
    availability_checks: u32,
    restocks: u32,
    fail_on_check: bool,
    fail_on_restock: bool,
    decline_restock: bool,
}

/// In-memory inventory service for testing.
///
/// A successful availability check reserves the stock it confirmed:
/// repeated orders against the same product draw the level down until a
/// check fails. Non-positive quantities are never fulfillable here; that
/// judgment belongs to the inventory capability, not the coordinator.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventoryService {
    state: Arc<RwLock<InMemoryInventoryState>>,
}

impl InMemoryInventoryService {
    /// Creates a new in-memory inventory service with no stock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stock level for a product.
    pub fn set_stock(&self, product_id: impl Into<ProductId>, quantity: i64) {
        self.state
            .write()
            .unwrap()
            .stock
            .insert(product_id.into(), quantity);
    }

    /// Returns the current stock level for a product.
    pub fn stock_of(&self, product_id: &ProductId) -> i64 {
        self.state
            .read()
            .unwrap()
            .stock
            .get(product_id)
            .copied()
            .unwrap_or(0)
    }

    /// Configures availability checks to fail with an infrastructure fault.
    pub fn set_fail_on_check(&self, fail: bool) {
        self.state.write().unwrap().fail_on_check = fail;
    }

    /// Configures restocking to fail with an infrastructure fault.
    pub fn set_fail_on_restock(&self, fail: bool) {
        self.state.write().unwrap().fail_on_restock = fail;
    }

    /// Configures restocking to be declined without a fault.
    pub fn set_decline_restock(&self, decline: bool) {
        self.state.write().unwrap().decline_restock = decline;
    }

    /// Returns how many availability checks were made.
    pub fn availability_checks(&self) -> u32 {
        self.state.read().unwrap().availability_checks
    }

    /// Returns how many restock calls were made.
    pub fn restocks(&self) -> u32 {
        self.state.read().unwrap().restocks
    }
}

#[async_trait]
impl InventoryService for InMemoryInventoryService {
    async fn check_availability(
        &self,
        product_id: &ProductId,
        quantity: i32,
    ) -> Result<bool, OrderError> {
        let mut state = self.state.write().unwrap();
        state.availability_checks += 1;

        if state.fail_on_check {
            return Err(OrderError::Inventory("Database unavailable".to_string()));
        }

        if quantity <= 0 {
            return Ok(false);
        }

        match state.stock.get_mut(product_id) {
            Some(level) if *level >= i64::from(quantity) => {
                *level -= i64::from(quantity);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn restock(&self, product_id: &ProductId, quantity: i32) -> Result<bool, OrderError> {
        let mut state = self.state.write().unwrap();
        state.restocks += 1;

        if state.fail_on_restock {
            return Err(OrderError::Inventory("Database unavailable".to_string()));
        }

        if state.decline_restock {
            return Ok(false);
        }

        *state.stock.entry(product_id.clone()).or_insert(0) += i64::from(quantity);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_check_reserves_stock() {
        let service = InMemoryInventoryService::new();
        let product = ProductId::new("SKU-001");
        service.set_stock("SKU-001", 5);

        assert!(service.check_availability(&product, 3).await.unwrap());
        assert_eq!(service.stock_of(&product), 2);
        assert!(!service.check_availability(&product, 3).await.unwrap());
        assert_eq!(service.availability_checks(), 2);
    }

    #[tokio::test]
    async fn test_non_positive_quantity_is_unfulfillable() {
        let service = InMemoryInventoryService::new();
        let product = ProductId::new("SKU-001");
        service.set_stock("SKU-001", 5);

        assert!(!service.check_availability(&product, 0).await.unwrap());
        assert!(!service.check_availability(&product, -1).await.unwrap());
        assert_eq!(service.stock_of(&product), 5);
    }

    #[tokio::test]
    async fn test_restock_adds_stock() {
        let service = InMemoryInventoryService::new();
        let product = ProductId::new("SKU-001");

        assert!(service.restock(&product, 4).await.unwrap());
        assert_eq!(service.stock_of(&product), 4);
        assert_eq!(service.restocks(), 1);
    }

    #[tokio::test]
    async fn test_fail_on_check() {
        let service = InMemoryInventoryService::new();
        let product = ProductId::new("SKU-001");
        service.set_fail_on_check(true);

        let result = service.check_availability(&product, 1).await;
        assert!(matches!(result, Err(OrderError::Inventory(_))));
    }

    #[tokio::test]
    async fn test_declined_restock_leaves_stock_untouched() {
        let service = InMemoryInventoryService::new();
        let product = ProductId::new("SKU-001");
        service.set_decline_restock(true);

        assert!(!service.restock(&product, 4).await.unwrap());
        assert_eq!(service.stock_of(&product), 0);
    }
}
