//! Total-cost quote produced by the tax stage.

/// Outcome of quoting the total cost of an order.
///
/// The tax capability signals "invalid/unavailable" in-band with a negative
/// tax amount. The quote folds that sentinel into an explicit variant at the
/// capability boundary, so no magic number travels through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostQuote {
    /// Tax was computed; the order total is price plus tax.
    Priced(f64),

    /// The tax capability reported the price as untaxable.
    Invalid,
}

impl CostQuote {
    /// Builds a quote from a raw tax amount.
    ///
    /// A negative tax is the capability contract for a failed computation
    /// and yields `Invalid`; anything else prices the order at `price + tax`.
    pub fn from_tax(price: f64, tax: f64) -> Self {
        if tax >= 0.0 {
            CostQuote::Priced(price + tax)
        } else {
            CostQuote::Invalid
        }
    }

    /// Returns true if the quote carries a payable total.
    pub fn is_priced(&self) -> bool {
        matches!(self, CostQuote::Priced(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_tax_prices_the_order() {
        let quote = CostQuote::from_tax(100.0, 15.0);
        assert_eq!(quote, CostQuote::Priced(115.0));
        assert!(quote.is_priced());
    }

    #[test]
    fn test_zero_tax_is_a_valid_quote() {
        assert_eq!(CostQuote::from_tax(0.0, 0.0), CostQuote::Priced(0.0));
    }

    #[test]
    fn test_negative_tax_is_the_invalid_sentinel() {
        let quote = CostQuote::from_tax(100.0, -1.0);
        assert_eq!(quote, CostQuote::Invalid);
        assert!(!quote.is_priced());
    }

    #[test]
    fn test_negative_price_with_valid_tax_still_prices() {
        // The guard against charging a negative total lives in the
        // coordinator, not in the quote.
        assert_eq!(CostQuote::from_tax(-200.0, 50.0), CostQuote::Priced(-150.0));
    }
}
