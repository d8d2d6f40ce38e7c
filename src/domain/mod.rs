// Domain layer: request/quote models and the quote source port.

pub mod model;
pub mod ports;
