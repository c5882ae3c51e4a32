use crate::models::Order;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

/// Stock side of a completed checkout
pub trait InventorySystem: Send + Sync {
    /// Record a paid order against stock
    fn register_order(&self, order: &Order);
}

/// Registration record kept by [`StockRegistry`]
#[derive(Debug, Clone, Serialize)]
pub struct StockEntry {
    pub order_id: Uuid,
    pub description: String,
    pub registered_at: DateTime<Utc>,
}

/// In-memory stock registry
#[derive(Debug, Default)]
pub struct StockRegistry {
    entries: Mutex<Vec<StockEntry>>,
}

impl StockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every registration so far
    pub fn entries(&self) -> Vec<StockEntry> {
        self.entries.lock().clone()
    }

    /// Take every registration so far, leaving the registry empty
    pub fn drain(&self) -> Vec<StockEntry> {
        std::mem::take(&mut *self.entries.lock())
    }

    pub fn is_registered(&self, order_id: &Uuid) -> bool {
        self.entries.lock().iter().any(|e| &e.order_id == order_id)
    }
}

impl InventorySystem for StockRegistry {
    fn register_order(&self, order: &Order) {
        let entry = StockEntry {
            order_id: order.id,
            description: order.describe(),
            registered_at: Utc::now(),
        };

        tracing::info!(
            order_id = %entry.order_id,
            description = %entry.description,
            "Order registered in stock system"
        );
        self.entries.lock().push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexorder_catalog::{BaseOrder, OrderItem};
    use flexorder_core::{ManaPayment, TeleportShipping};

    #[test]
    fn test_registration_records_description() {
        let registry = StockRegistry::new();
        let order = Order::new(
            BaseOrder::new(vec![OrderItem::new("Elven Wand", 300.0).unwrap()]),
            ManaPayment::new(),
            TeleportShipping::new(),
        );

        assert!(!registry.is_registered(&order.id));
        registry.register_order(&order);

        let entries = registry.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].order_id, order.id);
        assert_eq!(entries[0].description, "Order with 1 item");
        assert!(registry.is_registered(&order.id));

        let drained = registry.drain();
        assert_eq!(drained.len(), 1);
        assert!(registry.entries().is_empty());
        assert!(!registry.is_registered(&order.id));
    }
}
