/// Shipping cost policy applied to the post-discount order value
pub trait ShippingStrategy: Send + Sync {
    /// Cost of shipping an order worth `order_value`
    fn compute_cost(&self, order_value: f64) -> f64;

    /// Display name used in logs
    fn name(&self) -> &'static str;
}

/// Standard delivery: 5% of the order value
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalShipping;

impl NormalShipping {
    pub fn new() -> Self {
        Self
    }
}

impl ShippingStrategy for NormalShipping {
    fn compute_cost(&self, order_value: f64) -> f64 {
        let cost = order_value * 0.05;
        tracing::debug!(shipping = self.name(), cost, "Normal shipping: R${:.2}", cost);
        cost
    }

    fn name(&self) -> &'static str {
        "Normal"
    }
}

/// Express delivery: 10% of the order value plus a flat surcharge
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressShipping;

impl ExpressShipping {
    pub const SURCHARGE: f64 = 15.00;

    pub fn new() -> Self {
        Self
    }
}

impl ShippingStrategy for ExpressShipping {
    fn compute_cost(&self, order_value: f64) -> f64 {
        let cost = order_value * 0.10 + Self::SURCHARGE;
        tracing::debug!(shipping = self.name(), cost, "Express shipping (with surcharge): R${:.2}", cost);
        cost
    }

    fn name(&self) -> &'static str {
        "Express"
    }
}

/// Teleport delivery: flat fee regardless of order value
#[derive(Debug, Clone, Copy, Default)]
pub struct TeleportShipping;

impl TeleportShipping {
    pub const FLAT_FEE: f64 = 50.00;

    pub fn new() -> Self {
        Self
    }
}

impl ShippingStrategy for TeleportShipping {
    fn compute_cost(&self, _order_value: f64) -> f64 {
        tracing::debug!(shipping = self.name(), cost = Self::FLAT_FEE, "Teleport shipping: R${:.2}", Self::FLAT_FEE);
        Self::FLAT_FEE
    }

    fn name(&self) -> &'static str {
        "Teleport"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_normal_shipping() {
        let shipping = NormalShipping::new();
        assert!(approx_eq(shipping.compute_cost(218.5), 10.925));
        assert!(approx_eq(shipping.compute_cost(0.0), 0.0));
    }

    #[test]
    fn test_express_shipping() {
        let shipping = ExpressShipping::new();
        assert!(approx_eq(shipping.compute_cost(545.0), 69.5));
        // Surcharge applies even to an empty order
        assert!(approx_eq(shipping.compute_cost(0.0), 15.0));
    }

    #[test]
    fn test_teleport_is_flat() {
        let shipping = TeleportShipping::new();
        assert_eq!(shipping.compute_cost(0.0), 50.0);
        assert_eq!(shipping.compute_cost(425.0), 50.0);
        assert_eq!(shipping.compute_cost(1_000_000.0), 50.0);
    }
}
