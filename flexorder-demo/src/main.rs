use std::sync::Arc;

use flexorder_core::CheckoutConfig;
use flexorder_demo::{run, scenarios};
use flexorder_order::{CheckoutFacade, InvoiceGenerator, StockRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = CheckoutConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let stock = Arc::new(StockRegistry::new());
    let invoices = Arc::new(InvoiceGenerator::new());
    let checkout = CheckoutFacade::new(stock.clone(), invoices.clone());

    let scenarios = scenarios::build_all(&config)?;
    for outcome in run(&checkout, &scenarios) {
        tracing::info!(
            scenario = outcome.title,
            approved = outcome.approved,
            "{}: R${:.2}",
            outcome.description,
            outcome.final_value
        );
    }

    tracing::info!(registered = stock.entries().len(), "Checkout run finished");

    let issued: Vec<_> = invoices.drain().iter().map(|i| i.to_json()).collect();
    println!("{}", serde_json::to_string_pretty(&issued)?);

    Ok(())
}
