//! API Gateway proxy payloads (REST v1 and HTTP v2 shapes) for the Lambda entry point.

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::core::engine::QuoteEngine;
use crate::domain::ports::QuoteSource;
use crate::http::handle;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpDescription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpDescription {
    #[serde(default)]
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayRequest {
    /// v1 `httpMethod`, then v2 `requestContext.http.method`, then POST.
    pub fn method(&self) -> &str {
        self.http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .and_then(|http| http.method.as_deref())
            })
            .unwrap_or("POST")
    }

    /// Raw body bytes. A body that fails base64 decoding is passed on empty,
    /// which the engine answers with the default quotes.
    pub fn body_bytes(&self) -> Vec<u8> {
        let body = self.body.as_deref().unwrap_or_default();
        if !self.is_base64_encoded {
            return body.as_bytes().to_vec();
        }
        BASE64.decode(body).unwrap_or_else(|e| {
            tracing::warn!("Failed to decode base64 body: {}", e);
            Vec::new()
        })
    }
}

pub fn handle_gateway<Q: QuoteSource>(
    request: &GatewayRequest,
    engine: &QuoteEngine<Q>,
) -> GatewayResponse {
    let reply = handle(request.method(), &request.body_bytes(), engine);

    GatewayResponse {
        status_code: reply.status,
        headers: reply
            .headers()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        body: reply.body.unwrap_or_default(),
        is_base64_encoded: false,
    }
}
