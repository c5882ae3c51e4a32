use flexorder_order::CheckoutFacade;

pub mod scenarios;

pub use scenarios::Scenario;

/// Result of running one scenario through the checkout
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub title: &'static str,
    pub description: String,
    pub final_value: f64,
    pub approved: bool,
}

/// Check out every scenario in order
pub fn run(checkout: &CheckoutFacade, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    scenarios
        .iter()
        .map(|scenario| {
            let span = tracing::info_span!("scenario", title = scenario.title);
            let _guard = span.enter();

            let approved = checkout.complete_transaction(&scenario.order);
            ScenarioOutcome {
                title: scenario.title,
                description: scenario.order.describe(),
                final_value: scenario.order.final_value(),
                approved,
            }
        })
        .collect()
}
