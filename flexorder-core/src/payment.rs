use crate::{CoreError, CoreResult};

/// Credit limit applied when a card is set up without an explicit one
pub const DEFAULT_CREDIT_LIMIT: f64 = 1000.0;

/// Discount granted to PIX payments (5%)
pub const PIX_DISCOUNT_RATE: f64 = 0.05;

/// A way of paying for an order.
///
/// Implementations decide whether an amount is approved and which discount
/// the method grants. Rejection is a normal outcome, not an error.
pub trait PaymentStrategy: Send + Sync {
    /// Attempt to pay `amount`, returning whether the payment was approved
    fn process(&self, amount: f64) -> bool;

    /// Fraction of the order value waived for this method, in `[0, 1)`
    fn discount_rate(&self) -> f64;

    /// Display name used in logs
    fn name(&self) -> &'static str;
}

/// Instant transfer via PIX: always approved, 5% off
#[derive(Debug, Clone, Copy, Default)]
pub struct PixPayment;

impl PixPayment {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for PixPayment {
    fn process(&self, amount: f64) -> bool {
        tracing::info!(method = self.name(), amount, "Processing R${:.2} via PIX", amount);
        tracing::info!(method = self.name(), "Payment approved (QR code generated)");
        true
    }

    fn discount_rate(&self) -> f64 {
        PIX_DISCOUNT_RATE
    }

    fn name(&self) -> &'static str {
        "PIX"
    }
}

/// Credit card payment bounded by a credit limit
#[derive(Debug, Clone, Copy)]
pub struct CreditPayment {
    limit: f64,
}

impl CreditPayment {
    pub fn new() -> Self {
        Self { limit: DEFAULT_CREDIT_LIMIT }
    }

    /// Card with a custom limit. Negative or non-finite limits are rejected.
    pub fn with_limit(limit: f64) -> CoreResult<Self> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "credit limit must be a non-negative amount, got {}",
                limit
            )));
        }
        Ok(Self { limit })
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl Default for CreditPayment {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentStrategy for CreditPayment {
    fn process(&self, amount: f64) -> bool {
        tracing::info!(method = self.name(), amount, "Processing R${:.2} via credit card", amount);

        // An amount equal to the limit is already over it
        if amount < self.limit {
            tracing::info!(method = self.name(), "Payment approved");
            true
        } else {
            tracing::warn!(method = self.name(), limit = self.limit, "Payment rejected (limit exceeded)");
            false
        }
    }

    fn discount_rate(&self) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "Credit"
    }
}

/// Mana transfer: always approved, no discount
#[derive(Debug, Clone, Copy, Default)]
pub struct ManaPayment;

impl ManaPayment {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentStrategy for ManaPayment {
    fn process(&self, amount: f64) -> bool {
        tracing::info!(method = self.name(), amount, "Processing R${:.2} via mana transfer", amount);
        tracing::info!(method = self.name(), "Payment approved (settles after a 10 second wait)");
        true
    }

    fn discount_rate(&self) -> f64 {
        0.0
    }

    fn name(&self) -> &'static str {
        "Mana"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pix_always_approves_with_discount() {
        let pix = PixPayment::new();
        assert!(pix.process(0.0));
        assert!(pix.process(1_000_000.0));
        assert_eq!(pix.discount_rate(), 0.05);
    }

    #[test]
    fn test_credit_limit_is_strict() {
        let credit = CreditPayment::new();
        assert_eq!(credit.limit(), 1000.0);

        assert!(credit.process(999.99));
        // Exactly at the limit is rejected
        assert!(!credit.process(1000.0));
        assert!(!credit.process(1500.0));
        assert_eq!(credit.discount_rate(), 0.0);
    }

    #[test]
    fn test_credit_custom_limit() {
        let credit = CreditPayment::with_limit(250.0).unwrap();
        assert!(credit.process(249.0));
        assert!(!credit.process(250.0));

        assert!(CreditPayment::with_limit(-1.0).is_err());
        assert!(CreditPayment::with_limit(f64::NAN).is_err());
    }

    #[test]
    fn test_mana_always_approves() {
        let mana = ManaPayment::new();
        assert!(mana.process(475.0));
        assert_eq!(mana.discount_rate(), 0.0);
        assert_eq!(mana.name(), "Mana");
    }
}
