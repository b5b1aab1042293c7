pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::ports::ConfigProvider;

/// Shared server state. Handlers are otherwise stateless; requests are
/// independent and may interleave freely.
#[derive(Debug)]
pub struct AppState {
    start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server until the process is killed.
pub async fn run<C: ConfigProvider>(config: &C) -> anyhow::Result<()> {
    run_with_shutdown(config, std::future::pending()).await
}

/// Run the server until the shutdown future resolves.
pub async fn run_with_shutdown<C, F>(config: &C, shutdown: F) -> anyhow::Result<()>
where
    C: ConfigProvider,
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = create_router(config);

    let addr: SocketAddr = config.listen_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);
    if let Some(dir) = config.static_dir() {
        info!("Serving static files from {}", dir);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Create the application router.
pub fn create_router<C: ConfigProvider>(config: &C) -> Router {
    let state = Arc::new(AppState::new());

    let mut app = Router::new()
        .nest("/api", routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.cors_origins()))
        .with_state(state);

    if let Some(dir) = config.static_dir() {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/color", get(handlers::generate_color))
        .route("/health", get(handlers::health_check))
}

/// Permissive CORS when no origins are configured, otherwise restricted to
/// the configured list. Preflight responses are cacheable for 24 hours.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let max_age = Duration::from_secs(86400);

    if origins.is_empty() {
        CorsLayer::permissive().max_age(max_age)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring CORS origin with invalid header value: {}", origin);
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(max_age)
    }
}
