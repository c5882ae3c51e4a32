pub mod models;
pub mod inventory;
pub mod finance;
pub mod orchestrator;

pub use models::Order;
pub use inventory::{InventorySystem, StockEntry, StockRegistry};
pub use finance::{Invoice, InvoiceGenerator, InvoiceIssuer};
pub use orchestrator::CheckoutFacade;
