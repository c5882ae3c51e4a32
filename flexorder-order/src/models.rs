use chrono::{DateTime, Utc};
use flexorder_catalog::OrderComponent;
use flexorder_core::{PaymentStrategy, ShippingStrategy};
use uuid::Uuid;

/// A priced order bound to the way it is paid for and shipped.
///
/// Bindings are fixed at construction; checking out with a different payment
/// or shipping method means building a new `Order`.
pub struct Order {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    component: Box<dyn OrderComponent>,
    payment: Box<dyn PaymentStrategy>,
    shipping: Box<dyn ShippingStrategy>,
}

impl Order {
    pub fn new(
        component: impl OrderComponent + 'static,
        payment: impl PaymentStrategy + 'static,
        shipping: impl ShippingStrategy + 'static,
    ) -> Self {
        Self::from_boxed(Box::new(component), Box::new(payment), Box::new(shipping))
    }

    /// Build from strategies chosen at runtime
    pub fn from_boxed(
        component: Box<dyn OrderComponent>,
        payment: Box<dyn PaymentStrategy>,
        shipping: Box<dyn ShippingStrategy>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            component,
            payment,
            shipping,
        }
    }

    /// Component value with the payment method's discount applied
    pub fn discounted_value(&self) -> f64 {
        let value = self.component.compute_value();
        let discount = self.payment.discount_rate();

        if discount > 0.0 {
            tracing::debug!(
                method = self.payment.name(),
                discount,
                "Applying {:.0}% payment method discount",
                discount * 100.0
            );
            return value * (1.0 - discount);
        }
        value
    }

    /// Shipping for the discounted value
    pub fn shipping_cost(&self) -> f64 {
        let value = self.discounted_value();
        self.shipping.compute_cost(value)
    }

    /// Amount due: discounted value plus shipping
    pub fn final_value(&self) -> f64 {
        // Not memoized: each call re-runs the chain so the trace matches
        let value = self.discounted_value();
        let shipping = self.shipping_cost();
        value + shipping
    }

    /// Charge the final value through the bound payment method
    pub fn process_payment(&self) -> bool {
        let amount = self.final_value();
        self.payment.process(amount)
    }

    pub fn describe(&self) -> String {
        self.component.describe()
    }

    pub fn payment_method(&self) -> &'static str {
        self.payment.name()
    }

    pub fn shipping_method(&self) -> &'static str {
        self.shipping.name()
    }
}

// Leaves the component out: describing it would price the whole chain
impl std::fmt::Debug for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("payment", &self.payment_method())
            .field("shipping", &self.shipping_method())
            .finish_non_exhaustive()
    }
}
