use crate::core::rate::round_to_cents;
use crate::domain::model::ShippingQuote;
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::validate_non_negative;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl std::str::FromStr for CartLine {
    type Err = ShippingError;

    /// Parses `name:price:quantity`, e.g. `Kit:199.90:2`. The name may itself contain colons.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| ShippingError::ValidationError {
            message: format!("invalid cart line '{}': {}", s, reason),
        };

        let mut parts = s.rsplitn(3, ':');
        let quantity = parts
            .next()
            .ok_or_else(|| invalid("missing quantity"))?
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid("quantity must be a whole number"))?;
        let price = parts
            .next()
            .ok_or_else(|| invalid("missing price"))?
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("price must be a number"))?;
        let name = parts.next().ok_or_else(|| invalid("missing name"))?.trim();

        Ok(CartLine {
            name: name.to_string(),
            price,
            quantity,
        })
    }
}

/// Checkout totals for a cart with an optional shipping choice and a discount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub shipping_fee: f64,
    pub discount: f64,
    pub total: f64,
}

impl OrderSummary {
    /// `total = max(0, subtotal + shipping − discount)`. Without a selected quote shipping is free.
    pub fn compute(
        lines: &[CartLine],
        shipping: Option<&ShippingQuote>,
        discount: f64,
    ) -> Result<Self> {
        validate_non_negative("discount", discount)?;
        for line in lines {
            validate_non_negative(&format!("price of '{}'", line.name), line.price)?;
        }

        let subtotal = round_to_cents(
            lines
                .iter()
                .map(|line| line.price * f64::from(line.quantity))
                .sum(),
        );
        let shipping_fee = shipping.map(|quote| quote.rate).unwrap_or(0.0);
        let total = round_to_cents((subtotal + shipping_fee - discount).max(0.0));

        Ok(Self {
            subtotal,
            shipping_fee,
            discount,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceType;

    fn line(name: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_totals_with_shipping_and_discount() {
        let lines = vec![line("Nebulizador", 150.0, 2), line("Filtro", 12.5, 4)];
        let quote = ShippingQuote::new(ServiceType::Standard, 40.0, 4, "01310100");
        let summary = OrderSummary::compute(&lines, Some(&quote), 25.0).unwrap();

        assert_eq!(summary.subtotal, 350.0);
        assert_eq!(summary.shipping_fee, 40.0);
        assert_eq!(summary.discount, 25.0);
        assert_eq!(summary.total, 365.0);
    }

    #[test]
    fn test_total_never_negative() {
        let lines = vec![line("Brinde", 10.0, 1)];
        let summary = OrderSummary::compute(&lines, None, 50.0).unwrap();
        assert_eq!(summary.shipping_fee, 0.0);
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(OrderSummary::compute(&[line("x", -1.0, 1)], None, 0.0).is_err());
        assert!(OrderSummary::compute(&[line("x", 1.0, 1)], None, -5.0).is_err());
    }

    #[test]
    fn test_parse_cart_line() {
        let parsed: CartLine = "Kit: Oxímetro:199.90:2".parse().unwrap();
        assert_eq!(parsed, line("Kit: Oxímetro", 199.90, 2));
        assert!("Kit:abc:2".parse::<CartLine>().is_err());
        assert!("Kit:10".parse::<CartLine>().is_err());
    }
}
