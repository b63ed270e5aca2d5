//! Test harness for API integration tests.
//!
//! Each test gets its own in-memory SQLite store and a mock fetcher serving
//! canned source pages, wired into the real router.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use catalog::testing::fixtures;
use catalog::{
    CatalogService, Extractor, Fetcher, MangaStore, MockFetcher, Reconciler, SqliteStore,
    DEMONICSCANS,
};
use serde_json::Value;
use server_core::server::{build_app, AppState};
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, body) = ctx.get("/items").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Canned source pages - add more with `fetcher.add_page`.
    pub fetcher: MockFetcher,
    /// Store behind the app - use this for fixtures and assertions.
    pub store: SqliteStore,
    app: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // In-memory database is dropped with the pool
    }
}

impl TestHarness {
    /// Creates a new harness serving the Blue Lock page from the Demonicscans profile.
    pub async fn new() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let fetcher = MockFetcher::new().with_page(
            fixtures::DEMONIC_BLUE_LOCK_URL,
            fixtures::DEMONIC_BLUE_LOCK_HTML,
        );
        let store = SqliteStore::in_memory()
            .await
            .context("Failed to open in-memory store")?;

        let shared_fetcher: Arc<dyn Fetcher> = Arc::new(fetcher.clone());
        let shared_store: Arc<dyn MangaStore> = Arc::new(store.clone());
        let catalog = CatalogService::new(
            Extractor::new(shared_fetcher, DEMONICSCANS),
            Reconciler::new(shared_store),
        );
        let app = build_app(
            AppState::new(catalog),
            &["http://localhost".to_string()],
        );

        Ok(Self {
            fetcher,
            store,
            app,
        })
    }

    /// Send a request through the router and decode the JSON body.
    pub async fn request(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri).await
    }

    pub async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::POST, uri).await
    }

    pub async fn put(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::PUT, uri).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri).await
    }
}
