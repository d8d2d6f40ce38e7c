pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::ServiceConfig;

pub use core::{engine::QuoteEngine, estimator::ShippingEstimator};
pub use domain::model::{LineItem, ServiceType, ShippingQuote, ShippingRequest};
pub use domain::ports::QuoteSource;
pub use utils::error::{Result, ShippingError};
