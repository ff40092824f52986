use std::{env, net::SocketAddr, process, sync::Arc};

#[macro_use]
extern crate lazy_static;

use axum::{
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::app::{env::Envy, errors::StartupError};

mod app;
mod contact;
#[cfg(test)]
mod test_helpers;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub http_client: reqwest::Client,
}

pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .envy
        .allowed_origins()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, %e, "ignoring invalid cors origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/health", get(app::controller::get_health))
        // contact
        .route("/contact", post(contact::controller::submit_contact))
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("contact_relay_api=info,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let state = match envy::from_env::<Envy>()
        .map_err(StartupError::from)
        .and_then(build_state)
    {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(%e, "failed to start");
            process::exit(1);
        }
    };

    // app
    let port = state.envy.port();
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("server running on port {}", port);
    tracing::info!("api endpoint: http://localhost:{}/contact", port);
    tracing::info!("health check: http://localhost:{}/health", port);

    let server = match axum::Server::try_bind(&addr) {
        Ok(builder) => builder,
        Err(e) => {
            tracing::error!(%addr, %e, "failed to bind");
            process::exit(1);
        }
    };

    if let Err(e) = server.serve(app.into_make_service()).await {
        tracing::error!(%e, "server stopped");
        process::exit(1);
    }
}

/// Validates the configuration and builds the shared state.
fn build_state(envy: Envy) -> Result<AppState, StartupError> {
    if let Err(e) = envy.parsed_webhook_url() {
        return Err(StartupError::InvalidWebhookUrl(envy.webhook_url().to_string(), e));
    }

    let http_client = app::util::reqwest::build_client(envy.webhook_timeout())?;

    Ok(AppState {
        envy: Arc::new(envy),
        http_client,
    })
}
