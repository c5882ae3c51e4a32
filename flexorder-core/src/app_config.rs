use serde::Deserialize;
use std::env;

use crate::payment::DEFAULT_CREDIT_LIMIT;
use crate::DEFAULT_GIFT_WRAP_FEE;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CheckoutConfig {
    pub payment: PaymentConfig,
    pub decorators: DecoratorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    #[serde(default = "default_credit_limit")]
    pub credit_limit: f64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self { credit_limit: default_credit_limit() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DecoratorConfig {
    #[serde(default = "default_gift_wrap_fee")]
    pub gift_wrap_fee: f64,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self { gift_wrap_fee: default_gift_wrap_fee() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

fn default_credit_limit() -> f64 { DEFAULT_CREDIT_LIMIT }

fn default_gift_wrap_fee() -> f64 { DEFAULT_GIFT_WRAP_FEE }

fn default_log_filter() -> String { "flexorder=info".to_string() }

impl CheckoutConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every key has a default, so even the base file is optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `FLEXORDER__PAYMENT__CREDIT_LIMIT=2500`
            .add_source(config::Environment::with_prefix("FLEXORDER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
