use serde::Serialize;

/// A single product line in an order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    name: String,
    value: f64,
}

impl OrderItem {
    /// Create an item, rejecting negative or non-finite values
    pub fn new(name: impl Into<String>, value: f64) -> Result<Self, CatalogError> {
        let name = name.into();
        if !value.is_finite() || value < 0.0 {
            return Err(CatalogError::InvalidItemValue { name, value });
        }
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid value for item '{name}': {value}")]
    InvalidItemValue {
        name: String,
        value: f64,
    },

    #[error("Invalid gift wrap fee: {0}")]
    InvalidFee(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accessors() {
        let item = OrderItem::new("Invisibility Cloak", 150.0).unwrap();
        assert_eq!(item.name(), "Invisibility Cloak");
        assert_eq!(item.value(), 150.0);
    }

    #[test]
    fn test_free_item_is_allowed() {
        assert!(OrderItem::new("Sample", 0.0).is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = OrderItem::new("Cursed Coin", -1.0).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidItemValue { value, .. } if value == -1.0));

        assert!(OrderItem::new("Void", f64::INFINITY).is_err());
        assert!(OrderItem::new("Void", f64::NAN).is_err());
    }
}
