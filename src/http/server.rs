use std::{sync::Arc, time::Duration};

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::toml_config::ServerSettings;
use crate::core::engine::QuoteEngine;
use crate::domain::ports::QuoteSource;
use crate::http::{handle, HttpReply};
use crate::utils::error::Result;

impl IntoResponse for HttpReply {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        let mut response = Response::new(self.body.clone().map(Body::from).unwrap_or_else(Body::empty));
        *response.status_mut() = status;
        for (name, value) in self.headers() {
            if let Ok(name) = HeaderName::from_bytes(name.as_bytes()) {
                response.headers_mut().insert(name, HeaderValue::from_static(value));
            }
        }
        response
    }
}

async fn quote_handler<Q: QuoteSource + 'static>(
    State(engine): State<Arc<QuoteEngine<Q>>>,
    method: Method,
    body: Bytes,
) -> HttpReply {
    handle(method.as_str(), &body, &engine)
}

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
        .max_age(Duration::from_secs(60 * 60))
}

/// Mounts the quote handler on `path` for every method. Browser preflights are
/// answered by [`cors_layer`]; every handler reply carries the CORS header set itself.
/// Bodies are unbounded so an oversized cart still gets quotes instead of a 413.
pub fn build_router<Q: QuoteSource + 'static>(engine: Arc<QuoteEngine<Q>>, path: &str) -> Router {
    Router::new()
        .route(path, any(quote_handler::<Q>))
        .layer(DefaultBodyLimit::disable())
        .layer(cors_layer())
        .with_state(engine)
}

pub async fn serve<Q: QuoteSource + 'static>(
    settings: &ServerSettings,
    engine: Arc<QuoteEngine<Q>>,
) -> Result<()> {
    let address = settings.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;

    serve_on(listener, &settings.path, engine).await
}

pub async fn serve_on<Q: QuoteSource + 'static>(
    listener: TcpListener,
    path: &str,
    engine: Arc<QuoteEngine<Q>>,
) -> Result<()> {
    let app = build_router(engine, path);

    info!("Quote server running on {} at {}", listener.local_addr()?, path);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Quote server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
