use crate::domain::model::{ShippingQuote, ShippingRequest};
use crate::utils::error::Result;

/// Something able to price a shipping request. Errors are folded into the
/// fallback quotes by `QuoteEngine`, so implementations may fail freely.
pub trait QuoteSource: Send + Sync {
    fn quote(&self, request: &ShippingRequest) -> Result<Vec<ShippingQuote>>;
}

impl<T: QuoteSource + ?Sized> QuoteSource for std::sync::Arc<T> {
    fn quote(&self, request: &ShippingRequest) -> Result<Vec<ShippingQuote>> {
        (**self).quote(request)
    }
}
