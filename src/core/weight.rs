use crate::domain::model::LineItem;
use crate::utils::error::{Result, ShippingError};

pub const DEFAULT_ITEM_WEIGHT_KG: f64 = 0.5;
pub const DEFAULT_QUANTITY: u32 = 1;

/// Sum of `weight × quantity` over the items, in kilograms.
///
/// Missing weights count as 0.5 kg. Missing or zero quantities count as 1. An
/// empty list weighs 0.5 kg. An explicit weight of 0 is summed as given.
/// Weights whose product or sum leaves the finite range are rejected.
pub fn total_weight(items: &[LineItem]) -> Result<f64> {
    if items.is_empty() {
        return Ok(DEFAULT_ITEM_WEIGHT_KG);
    }

    items.iter().enumerate().try_fold(0.0, |acc, (index, item)| {
        let weight = item.weight.unwrap_or(DEFAULT_ITEM_WEIGHT_KG);
        if !weight.is_finite() || weight < 0.0 {
            return Err(ShippingError::MalformedItem {
                index,
                reason: format!("weight must be a non-negative number, got {}", weight),
            });
        }
        let quantity = match item.quantity {
            Some(0) | None => DEFAULT_QUANTITY,
            Some(quantity) => quantity,
        };
        let total = acc + weight * f64::from(quantity);
        if !total.is_finite() {
            return Err(ShippingError::MalformedItem {
                index,
                reason: format!("total weight overflows at {} kg x {}", weight, quantity),
            });
        }
        Ok(total)
    })
}
