use crate::finance::{InvoiceGenerator, InvoiceIssuer};
use crate::inventory::{InventorySystem, StockRegistry};
use crate::models::Order;
use std::sync::Arc;

/// Single entry point for checking out an order.
///
/// Prices the order, charges it, and only when the payment is approved hands
/// it to the stock and invoicing systems. A rejected payment leaves both
/// untouched.
pub struct CheckoutFacade {
    inventory: Arc<dyn InventorySystem>,
    invoicing: Arc<dyn InvoiceIssuer>,
}

impl CheckoutFacade {
    pub fn new(inventory: Arc<dyn InventorySystem>, invoicing: Arc<dyn InvoiceIssuer>) -> Self {
        Self { inventory, invoicing }
    }

    /// Run the checkout, returning whether the payment went through
    pub fn complete_transaction(&self, order: &Order) -> bool {
        tracing::info!(order_id = %order.id, description = %order.describe(), "Starting checkout");

        let final_value = order.final_value();
        tracing::info!(order_id = %order.id, "Amount due: R${:.2}", final_value);

        // process_payment prices the order again on its own
        if !order.process_payment() {
            tracing::warn!(order_id = %order.id, "Transaction aborted: payment rejected");
            return false;
        }

        tracing::info!(order_id = %order.id, "Transaction approved");
        self.inventory.register_order(order);
        self.invoicing.issue_invoice(order, final_value);
        true
    }
}

impl Default for CheckoutFacade {
    fn default() -> Self {
        Self::new(Arc::new(StockRegistry::new()), Arc::new(InvoiceGenerator::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexorder_catalog::{BaseOrder, GiftWrapFee, LargeOrderDiscount, OrderItem};
    use flexorder_core::{CreditPayment, ExpressShipping, NormalShipping, PixPayment};

    fn facade() -> (CheckoutFacade, Arc<StockRegistry>, Arc<InvoiceGenerator>) {
        let stock = Arc::new(StockRegistry::new());
        let invoices = Arc::new(InvoiceGenerator::new());
        (CheckoutFacade::new(stock.clone(), invoices.clone()), stock, invoices)
    }

    fn base(values: &[f64]) -> BaseOrder {
        BaseOrder::new(values.iter().map(|v| OrderItem::new("item", *v).unwrap()).collect())
    }

    #[test]
    fn test_approved_checkout_notifies_collaborators() {
        let (checkout, stock, invoices) = facade();
        let order = Order::new(base(&[150.0, 80.0]), PixPayment::new(), NormalShipping::new());

        assert!(checkout.complete_transaction(&order));
        assert!(stock.is_registered(&order.id));

        let invoice = invoices.find_by_order(&order.id).unwrap();
        assert!((invoice.total - 229.425).abs() < 1e-9);
        assert_eq!(invoice.description, "Order with 2 items");
    }

    #[test]
    fn test_rejected_payment_skips_side_effects() {
        let (checkout, stock, invoices) = facade();
        let component = GiftWrapFee::new(LargeOrderDiscount::new(base(&[1200.0])));
        let order = Order::new(component, CreditPayment::new(), ExpressShipping::new());

        assert!(!checkout.complete_transaction(&order));
        assert!(stock.entries().is_empty());
        assert!(invoices.invoices().is_empty());
    }

    #[test]
    fn test_total_exactly_at_credit_limit_is_rejected() {
        let (checkout, stock, invoices) = facade();
        // Teleport is flat, so the total is exactly 100 + 50
        let credit = CreditPayment::with_limit(150.0).unwrap();
        let order = Order::new(base(&[100.0]), credit, flexorder_core::TeleportShipping::new());

        assert!(!checkout.complete_transaction(&order));
        assert!(stock.entries().is_empty());
        assert!(invoices.invoices().is_empty());
    }

    #[test]
    fn test_default_facade_runs() {
        let checkout = CheckoutFacade::default();
        let order = Order::new(base(&[10.0]), PixPayment::new(), NormalShipping::new());
        assert!(checkout.complete_transaction(&order));
    }
}
