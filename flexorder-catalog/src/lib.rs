pub mod item;
pub mod pricing;

pub use item::{CatalogError, OrderItem};
pub use pricing::{BaseOrder, GiftWrapFee, LargeOrderDiscount, OrderComponent};
