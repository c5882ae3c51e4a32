use flexorder_catalog::{BaseOrder, GiftWrapFee, LargeOrderDiscount, OrderItem};
use flexorder_core::{
    CheckoutConfig, CreditPayment, ExpressShipping, ManaPayment, NormalShipping, PixPayment,
    TeleportShipping,
};
use flexorder_order::Order;

pub struct Scenario {
    pub title: &'static str,
    pub order: Order,
}

fn items(entries: &[(&str, f64)]) -> anyhow::Result<Vec<OrderItem>> {
    entries
        .iter()
        .map(|(name, value)| OrderItem::new(*name, *value).map_err(Into::into))
        .collect()
}

/// PIX with normal shipping on a small order
pub fn pix_normal() -> anyhow::Result<Scenario> {
    let base = BaseOrder::new(items(&[
        ("Invisibility Cloak", 150.0),
        ("Flight Potion", 80.0),
    ])?);

    Ok(Scenario {
        title: "PIX + Normal shipping",
        order: Order::new(base, PixPayment::new(), NormalShipping::new()),
    })
}

/// Large gift-wrapped order on credit with express shipping
pub fn credit_express_gift(config: &CheckoutConfig) -> anyhow::Result<Scenario> {
    let base = BaseOrder::new(items(&[("Magic Crystal", 600.0)])?);
    let component = GiftWrapFee::with_fee(
        LargeOrderDiscount::new(base),
        config.decorators.gift_wrap_fee,
    )?;
    let credit = CreditPayment::with_limit(config.payment.credit_limit)?;

    Ok(Scenario {
        title: "Credit + Express + Gift wrap",
        order: Order::new(component, credit, ExpressShipping::new()),
    })
}

/// Mana transfer with teleport delivery
pub fn mana_teleport(config: &CheckoutConfig) -> anyhow::Result<Scenario> {
    let base = BaseOrder::new(items(&[
        ("Elven Wand", 300.0),
        ("Ancient Scroll", 120.0),
    ])?);
    let component = GiftWrapFee::with_fee(base, config.decorators.gift_wrap_fee)?;

    Ok(Scenario {
        title: "Mana + Teleport",
        order: Order::new(component, ManaPayment::new(), TeleportShipping::new()),
    })
}

pub fn build_all(config: &CheckoutConfig) -> anyhow::Result<Vec<Scenario>> {
    Ok(vec![
        pix_normal()?,
        credit_express_gift(config)?,
        mana_teleport(config)?,
    ])
}
