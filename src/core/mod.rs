pub mod engine;
pub mod estimator;
pub mod order;
pub mod rate;
pub mod region;
pub mod weight;

pub use crate::domain::model::{LineItem, RegionTier, ServiceType, ShippingQuote, ShippingRequest};
pub use crate::domain::ports::QuoteSource;
pub use crate::utils::error::Result;
