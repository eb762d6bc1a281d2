//! Order coordinator driving the placement and cancellation pipelines.

use common::ProductId;

use crate::config::CoordinatorConfig;
use crate::cost::CostQuote;
use crate::error::OrderError;
use crate::services::inventory::InventoryService;
use crate::services::payment::PaymentService;
use crate::services::tax::TaxService;

/// Coordinates order placement and cancellation across the three
/// capabilities.
///
/// Placement runs inventory → tax → payment and stops at the first stage
/// that declines; cancellation runs restock → refund. The coordinator holds
/// no mutable state: every call is an independent pipeline, each capability
/// is invoked at most once per stage, and consistency across capabilities
/// (including over-draw prevention between concurrent calls) is the
/// capabilities' concern.
///
/// `price` is a lump sum when placing an order — the amount charged is
/// `price + tax`, independent of quantity — but acts as a per-unit price
/// when refunding a cancellation (`price * quantity`). The asymmetry is
/// part of the inherited contract and is preserved as-is, as is the
/// absence of any negative-price validation.
pub struct OrderCoordinator<I, T, P>
where
    I: InventoryService,
    T: TaxService,
    P: PaymentService,
{
    config: CoordinatorConfig,
    inventory: I,
    tax: T,
    payment: P,
}

impl<I, T, P> OrderCoordinator<I, T, P>
where
    I: InventoryService,
    T: TaxService,
    P: PaymentService,
{
    /// Creates a coordinator with the default configuration.
    pub fn new(inventory: I, tax: T, payment: P) -> Self {
        Self::with_config(CoordinatorConfig::default(), inventory, tax, payment)
    }

    /// Creates a coordinator with an explicit configuration.
    pub fn with_config(config: CoordinatorConfig, inventory: I, tax: T, payment: P) -> Self {
        Self {
            config,
            inventory,
            tax,
            payment,
        }
    }

    /// Attempts to place an order, returning whether it succeeded.
    ///
    /// `Ok(false)` is a business decline — unavailable stock, an untaxable
    /// price, or a refused charge. A quantity at or above the configured
    /// maximum is a hard rejection (`OrderError::ExcessiveQuantity`) raised
    /// before any capability is invoked, and capability faults propagate
    /// unmodified.
    #[tracing::instrument(skip(self))]
    pub async fn place_order(
        &self,
        product_id: &ProductId,
        quantity: i32,
        price: f64,
    ) -> Result<bool, OrderError> {
        metrics::counter!("orders_attempted_total").increment(1);

        if quantity >= self.config.max_order_quantity {
            metrics::counter!("orders_rejected_total").increment(1);
            tracing::warn!(
                %product_id,
                quantity,
                max = self.config.max_order_quantity,
                "order rejected: quantity over the configured maximum"
            );
            return Err(OrderError::ExcessiveQuantity {
                quantity,
                max: self.config.max_order_quantity,
            });
        }

        if !self
            .inventory
            .check_availability(product_id, quantity)
            .await?
        {
            metrics::counter!("orders_declined_total").increment(1);
            tracing::info!(%product_id, quantity, "order declined: insufficient availability");
            return Ok(false);
        }

        let total = match self.quote_total_cost(product_id, price).await? {
            CostQuote::Priced(total) => total,
            CostQuote::Invalid => {
                metrics::counter!("orders_declined_total").increment(1);
                tracing::info!(%product_id, "order declined: tax quote invalid");
                return Ok(false);
            }
        };

        // A priced total can still be negative when the caller passed a
        // negative price; such orders never reach payment.
        if total < 0.0 {
            metrics::counter!("orders_declined_total").increment(1);
            tracing::info!(%product_id, total, "order declined: negative total");
            return Ok(false);
        }

        let paid = self.payment.process_payment(product_id, total).await?;
        if paid {
            metrics::counter!("orders_placed_total").increment(1);
            tracing::info!(%product_id, quantity, total, "order placed");
        } else {
            metrics::counter!("orders_declined_total").increment(1);
            tracing::info!(%product_id, total, "order declined: payment refused");
        }
        Ok(paid)
    }

    /// Attempts to cancel an order, returning whether it succeeded.
    ///
    /// Restocks first; a declined restock skips the refund entirely. A
    /// successful restock followed by a refused refund is not rolled back —
    /// compensating for that is the caller's concern.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        product_id: &ProductId,
        quantity: i32,
        price: f64,
    ) -> Result<bool, OrderError> {
        if !self.inventory.restock(product_id, quantity).await? {
            metrics::counter!("cancellations_declined_total").increment(1);
            tracing::info!(%product_id, quantity, "cancellation declined: restock refused");
            return Ok(false);
        }

        let refund = -price * f64::from(quantity);
        let refunded = self.payment.process_payment(product_id, refund).await?;
        if refunded {
            metrics::counter!("orders_cancelled_total").increment(1);
            tracing::info!(%product_id, quantity, refund, "order cancelled");
        } else {
            metrics::counter!("cancellations_declined_total").increment(1);
            tracing::warn!(%product_id, refund, "refund refused after restock");
        }
        Ok(refunded)
    }

    /// Quotes the total cost of an order, folding the tax capability's
    /// negative-amount sentinel into an explicit outcome.
    async fn quote_total_cost(
        &self,
        product_id: &ProductId,
        price: f64,
    ) -> Result<CostQuote, OrderError> {
        let tax = self.tax.calculate_tax(product_id, price).await?;
        Ok(CostQuote::from_tax(price, tax))
    }
}
