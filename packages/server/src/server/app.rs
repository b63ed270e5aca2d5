//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use catalog::{CatalogService, Fetcher, MangaStore};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    delete_item, get_item, health_handler, list_items, refresh_items, root_handler, track_item,
};

/// Catalog service as wired into the server: any fetcher, any store.
pub type Catalog = CatalogService<Arc<dyn Fetcher>, Arc<dyn MangaStore>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build the Axum application router
pub fn build_app(app_state: AppState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origins(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/items", get(list_items).put(refresh_items))
        .route(
            "/items/:title",
            get(get_item).post(track_item).delete(delete_item),
        )
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// `*` allows any origin; otherwise the listed origins, skipping unparsable ones.
fn cors_origins(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return Any.into();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}
