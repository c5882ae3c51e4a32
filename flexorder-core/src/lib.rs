pub mod payment;
pub mod shipping;
pub mod app_config;

pub use payment::{CreditPayment, ManaPayment, PaymentStrategy, PixPayment};
pub use shipping::{ExpressShipping, NormalShipping, ShippingStrategy, TeleportShipping};
pub use app_config::CheckoutConfig;

/// Fee charged for gift wrapping unless configured otherwise
pub const DEFAULT_GIFT_WRAP_FEE: f64 = 5.00;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
