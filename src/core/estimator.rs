use crate::core::{rate, region, weight};
use crate::domain::model::{ServiceType, ShippingQuote, ShippingRequest};
use crate::domain::ports::QuoteSource;
use crate::utils::error::{Result, ShippingError};
use crate::utils::validation::validate_postal_code;

/// Region-table estimator: one PAC and one SEDEX quote per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingEstimator;

impl ShippingEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl QuoteSource for ShippingEstimator {
    fn quote(&self, request: &ShippingRequest) -> Result<Vec<ShippingQuote>> {
        let raw_zip = request.destination().ok_or(ShippingError::MissingPostalCode)?;
        let items = request.items();

        tracing::info!(
            zip_code = raw_zip,
            item_count = items.len(),
            "Calculating shipping quote"
        );

        let zip_code = validate_postal_code(raw_zip)?;

        let total_weight = weight::total_weight(items)?;
        tracing::info!(total_weight_kg = total_weight, "Total weight calculated");

        let prefix = region::prefix_of(&zip_code)?;
        let tier = region::classify(prefix);
        tracing::debug!(prefix, ?tier, "Region classified");

        let quotes: Vec<ShippingQuote> = ServiceType::ALL
            .iter()
            .map(|&service| {
                ShippingQuote::new(
                    service,
                    rate::rate_for(tier, total_weight, service),
                    rate::delivery_days(tier, service),
                    &zip_code,
                )
            })
            .collect();

        tracing::info!(?quotes, "Shipping rates calculated");
        Ok(quotes)
    }
}
