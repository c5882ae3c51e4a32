use crate::models::Order;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use uuid::Uuid;

/// Issues the fiscal invoice for a paid order
pub trait InvoiceIssuer: Send + Sync {
    /// `final_value` is the amount the customer was charged
    fn issue_invoice(&self, order: &Order, final_value: f64);
}

#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub id: Uuid,
    pub order_id: Uuid,
    pub description: String,
    pub payment_method: String,
    pub shipping_method: String,
    pub total: f64,
    pub ordered_at: DateTime<Utc>,
    pub issued_at: DateTime<Utc>,
}

impl Invoice {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "invoice_id": self.id,
            "order_id": self.order_id,
            "description": self.description,
            "payment_method": self.payment_method,
            "shipping_method": self.shipping_method,
            "total": format!("{:.2}", self.total),
            "ordered_at": self.ordered_at.to_rfc3339(),
            "issued_at": self.issued_at.to_rfc3339(),
        })
    }
}

/// Keeps issued invoices in memory
#[derive(Debug, Default)]
pub struct InvoiceGenerator {
    invoices: Mutex<Vec<Invoice>>,
}

impl InvoiceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invoices(&self) -> Vec<Invoice> {
        self.invoices.lock().clone()
    }

    /// Take every invoice issued so far, leaving the generator empty
    pub fn drain(&self) -> Vec<Invoice> {
        std::mem::take(&mut *self.invoices.lock())
    }

    /// Invoice issued for the given order, if any
    pub fn find_by_order(&self, order_id: &Uuid) -> Option<Invoice> {
        self.invoices.lock().iter().find(|i| &i.order_id == order_id).cloned()
    }
}

impl InvoiceIssuer for InvoiceGenerator {
    fn issue_invoice(&self, order: &Order, final_value: f64) {
        let invoice = Invoice {
            id: Uuid::new_v4(),
            order_id: order.id,
            description: order.describe(),
            payment_method: order.payment_method().to_string(),
            shipping_method: order.shipping_method().to_string(),
            total: final_value,
            ordered_at: order.created_at,
            issued_at: Utc::now(),
        };

        tracing::info!(
            invoice_id = %invoice.id,
            order_id = %invoice.order_id,
            "Issuing invoice, total R${:.2}",
            invoice.total
        );
        self.invoices.lock().push(invoice);
    }
}
