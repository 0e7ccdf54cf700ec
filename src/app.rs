use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::post;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use tinct_core::Isolator;

use crate::config::Config;
use crate::detect;

/// State shared by request handlers. Cheap to clone; axum clones it per
/// request.
#[derive(Clone)]
pub struct AppState {
    pub isolator: Arc<Isolator>,
}

/// Builds the router: one detection endpoint, CORS locked to the
/// configured origin, request tracing on everything.
pub fn create_app(config: &Config) -> anyhow::Result<Router> {
    let state = AppState {
        isolator: Arc::new(Isolator::default()),
    };
    Ok(Router::new()
        .route("/detect-color", post(detect::detect_color))
        .with_state(state)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .with_context(|| format!("invalid allowed origin {:?}", config.allowed_origin))?;
    // List form: the allow-origin header is only sent back to a
    // matching origin, never to foreign ones.
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
