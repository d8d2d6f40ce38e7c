use crate::domain::model::{ServiceType, ShippingQuote, ShippingRequest};
use crate::domain::ports::QuoteSource;
use crate::utils::error::{Result, ShippingError};

/// Postal code echoed by the fallback quotes. It is the only marker a caller
/// has that the quotes were not computed.
pub const FALLBACK_ZIP_CODE: &str = "00000000";

pub fn fallback_quotes() -> Vec<ShippingQuote> {
    vec![
        ShippingQuote {
            id: "pac-default".to_string(),
            service_type: ServiceType::Standard,
            name: ServiceType::Standard.display_name().to_string(),
            rate: 30.0,
            delivery_days: 7,
            zip_code: FALLBACK_ZIP_CODE.to_string(),
        },
        ShippingQuote {
            id: "sedex-default".to_string(),
            service_type: ServiceType::Express,
            name: ServiceType::Express.display_name().to_string(),
            rate: 55.0,
            delivery_days: 2,
            zip_code: FALLBACK_ZIP_CODE.to_string(),
        },
    ]
}

/// [`fallback_quotes`] as sent on the wire.
pub const FALLBACK_JSON: &str = r#"[{"id":"pac-default","service_type":"PAC","name":"PAC (Convencional)","rate":30.0,"delivery_days":7,"zipCode":"00000000"},{"id":"sedex-default","service_type":"SEDEX","name":"SEDEX (Express)","rate":55.0,"delivery_days":2,"zipCode":"00000000"}]"#;

pub fn is_fallback(quotes: &[ShippingQuote]) -> bool {
    !quotes.is_empty() && quotes.iter().all(|q| q.zip_code == FALLBACK_ZIP_CODE)
}

/// Wraps a [`QuoteSource`] with the availability contract: every call yields
/// a usable pair of quotes, falling back to [`fallback_quotes`] on any error.
pub struct QuoteEngine<Q: QuoteSource> {
    source: Q,
}

impl<Q: QuoteSource> QuoteEngine<Q> {
    pub fn new(source: Q) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Q {
        &self.source
    }

    /// Quotes a raw JSON body. Malformed JSON gets the fallback like any other failure.
    pub fn quote_json(&self, body: &[u8]) -> Vec<ShippingQuote> {
        self.quote_with_fallback(|| {
            let request: ShippingRequest = serde_json::from_slice(body)?;
            self.source.quote(&request)
        })
    }

    pub fn quote(&self, request: &ShippingRequest) -> Vec<ShippingQuote> {
        self.quote_with_fallback(|| self.source.quote(request))
    }

    /// Like [`quote`](Self::quote) but surfaces the error, for callers that
    /// want to report it instead of degrading (the CLI).
    pub fn try_quote(&self, request: &ShippingRequest) -> Result<Vec<ShippingQuote>> {
        let quotes = self.source.quote(request)?;
        if quotes.is_empty() {
            return Err(ShippingError::ValidationError {
                message: "quote source returned no shipping options".to_string(),
            });
        }
        if quotes.iter().any(|q| !q.rate.is_finite()) {
            return Err(ShippingError::ValidationError {
                message: "item weights are too large to price".to_string(),
            });
        }
        Ok(quotes)
    }

    fn quote_with_fallback<F>(&self, compute: F) -> Vec<ShippingQuote>
    where
        F: FnOnce() -> Result<Vec<ShippingQuote>>,
    {
        match compute() {
            Ok(quotes) if quotes.iter().any(|q| !q.rate.is_finite()) => {
                tracing::error!(?quotes, "Quote source produced a non-finite rate, using default quotes");
                fallback_quotes()
            }
            Ok(quotes) if !quotes.is_empty() => quotes,
            Ok(_) => {
                tracing::warn!("Quote source returned no options, using default quotes");
                fallback_quotes()
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    category = ?e.category(),
                    "Shipping quote failed, using default quotes"
                );
                fallback_quotes()
            }
        }
    }
}
