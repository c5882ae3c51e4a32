use crate::item::{CatalogError, OrderItem};

/// Orders above this value qualify for the large order discount
pub const LARGE_ORDER_THRESHOLD: f64 = 500.0;

/// Fraction taken off large orders
pub const LARGE_ORDER_DISCOUNT_RATE: f64 = 0.10;

pub use flexorder_core::DEFAULT_GIFT_WRAP_FEE;

/// Something that can be priced and described.
///
/// Implemented by [`BaseOrder`] and by every decorator wrapping it. Each
/// decorator owns exactly one inner component, so a chain is always linear
/// and rooted at a single base order.
pub trait OrderComponent: Send + Sync {
    /// Value of the order after every layer up to this one
    fn compute_value(&self) -> f64;

    /// Human-readable summary, extended by each layer
    fn describe(&self) -> String;
}

impl<T: OrderComponent + ?Sized> OrderComponent for Box<T> {
    fn compute_value(&self) -> f64 {
        (**self).compute_value()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The undecorated order: a list of items and their total
#[derive(Debug, Clone)]
pub struct BaseOrder {
    items: Vec<OrderItem>,
    base_value: f64,
}

impl BaseOrder {
    pub fn new(items: Vec<OrderItem>) -> Self {
        let base_value: f64 = items.iter().map(OrderItem::value).sum();
        Self { items, base_value }
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }
}

impl OrderComponent for BaseOrder {
    fn compute_value(&self) -> f64 {
        self.base_value
    }

    fn describe(&self) -> String {
        match self.items.len() {
            1 => "Order with 1 item".to_string(),
            n => format!("Order with {} items", n),
        }
    }
}

/// Takes 10% off orders strictly above R$500
pub struct LargeOrderDiscount {
    inner: Box<dyn OrderComponent>,
}

impl LargeOrderDiscount {
    pub fn new(inner: impl OrderComponent + 'static) -> Self {
        Self { inner: Box::new(inner) }
    }

    fn qualifies(value: f64) -> bool {
        value > LARGE_ORDER_THRESHOLD
    }
}

impl OrderComponent for LargeOrderDiscount {
    fn compute_value(&self) -> f64 {
        let value = self.inner.compute_value();
        if Self::qualifies(value) {
            tracing::debug!(value, "Applying 10% large order discount");
            return value * (1.0 - LARGE_ORDER_DISCOUNT_RATE);
        }
        value
    }

    fn describe(&self) -> String {
        // Threshold is checked against the inner value, not the discounted one
        let value = self.inner.compute_value();
        let description = self.inner.describe();
        if Self::qualifies(value) {
            return description + " + Large Order Discount (10%)";
        }
        description
    }
}

/// Adds a flat gift wrapping fee
pub struct GiftWrapFee {
    inner: Box<dyn OrderComponent>,
    fee: f64,
}

impl GiftWrapFee {
    pub fn new(inner: impl OrderComponent + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            fee: DEFAULT_GIFT_WRAP_FEE,
        }
    }

    /// Wrap with a custom fee. Negative or non-finite fees are rejected.
    pub fn with_fee(inner: impl OrderComponent + 'static, fee: f64) -> Result<Self, CatalogError> {
        if !fee.is_finite() || fee < 0.0 {
            return Err(CatalogError::InvalidFee(fee));
        }
        Ok(Self {
            inner: Box::new(inner),
            fee,
        })
    }

    pub fn fee(&self) -> f64 {
        self.fee
    }
}

impl OrderComponent for GiftWrapFee {
    fn compute_value(&self) -> f64 {
        let value = self.inner.compute_value();
        tracing::debug!(fee = self.fee, "Adding R${:.2} gift wrap fee", self.fee);
        value + self.fee
    }

    fn describe(&self) -> String {
        format!("{} + Gift Wrap (R${:.2})", self.inner.describe(), self.fee)
    }
}
