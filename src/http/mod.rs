//! Transport-neutral request handling shared by the HTTP listener and the
//! Lambda entry point.
//!
//! Every reply is a `200`: preflight requests get an empty body, everything
//! else gets a JSON array of quotes (computed or fallback).

#[cfg(feature = "lambda")]
pub mod gateway;
#[cfg(feature = "server")]
pub mod server;

use crate::core::engine::{QuoteEngine, FALLBACK_JSON};
use crate::domain::ports::QuoteSource;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn cors_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Access-Control-Allow-Origin", ALLOW_ORIGIN),
        ("Access-Control-Allow-Headers", ALLOW_HEADERS),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
}

impl HttpReply {
    fn preflight() -> Self {
        Self {
            status: 200,
            content_type: None,
            body: None,
        }
    }

    fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: Some("application/json"),
            body: Some(body),
        }
    }

    /// Full header set for transports without a CORS middleware in front.
    pub fn headers(&self) -> Vec<(&'static str, &'static str)> {
        let mut headers = cors_headers();
        if let Some(content_type) = self.content_type {
            headers.push(("Content-Type", content_type));
        }
        headers
    }
}

pub fn handle<Q: QuoteSource>(method: &str, body: &[u8], engine: &QuoteEngine<Q>) -> HttpReply {
    if method.eq_ignore_ascii_case("OPTIONS") {
        return HttpReply::preflight();
    }

    let quotes = engine.quote_json(body);
    match serde_json::to_string(&quotes) {
        Ok(json) => HttpReply::json(json),
        Err(e) => {
            tracing::error!("Failed to serialize quotes: {}", e);
            HttpReply::json(FALLBACK_JSON.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimator::ShippingEstimator;

    fn header(reply: &HttpReply, name: &str) -> Option<&'static str> {
        reply
            .headers()
            .into_iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    #[test]
    fn test_preflight_is_empty_with_cors() {
        let engine = QuoteEngine::new(ShippingEstimator::new());
        let reply = handle("OPTIONS", b"", &engine);
        assert_eq!(reply.status, 200);
        assert!(reply.body.is_none());
        assert_eq!(header(&reply, "access-control-allow-origin"), Some("*"));
        assert_eq!(
            header(&reply, "access-control-allow-headers"),
            Some(ALLOW_HEADERS)
        );
    }

    #[test]
    fn test_post_returns_quote_array() {
        let engine = QuoteEngine::new(ShippingEstimator::new());
        let reply = handle(
            "POST",
            br#"{"zipCode": "01310-100", "items": [{"weight": 1, "quantity": 2}]}"#,
            &engine,
        );
        assert_eq!(reply.status, 200);
        assert_eq!(header(&reply, "content-type"), Some("application/json"));

        let body: serde_json::Value = serde_json::from_str(reply.body.as_deref().unwrap()).unwrap();
        let quotes = body.as_array().unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0]["id"], "pac-01310100");
        assert_eq!(quotes[0]["service_type"], "PAC");
        assert_eq!(quotes[0]["rate"], 40.0);
        assert_eq!(quotes[1]["service_type"], "SEDEX");
        assert_eq!(quotes[1]["delivery_days"], 1);
    }

    #[test]
    fn test_invalid_request_still_200() {
        let engine = QuoteEngine::new(ShippingEstimator::new());
        let reply = handle("GET", b"", &engine);
        assert_eq!(reply.status, 200);

        let body: serde_json::Value = serde_json::from_str(reply.body.as_deref().unwrap()).unwrap();
        assert_eq!(body[0]["id"], "pac-default");
        assert_eq!(body[0]["zipCode"], "00000000");
        assert_eq!(body[1]["rate"], 55.0);
    }
}
