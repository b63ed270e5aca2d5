//! Integration tests for the items API.

mod common;

use axum::http::StatusCode;
use catalog::testing::{fixtures, sample_record};
use catalog::{MangaStore, Reconciler};
use common::TestHarness;
use serde_json::json;
use test_context::test_context;

const BLUE_LOCK: &str = "/items/Blue%20Lock";

#[test_context(TestHarness)]
#[tokio::test]
async fn root_is_api_only(ctx: &TestHarness) {
    let (status, body) = ctx.get("/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "API Only" }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn health_reports_store_and_source(ctx: &TestHarness) {
    let (status, body) = ctx.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "ok");
    assert_eq!(body["source"], "demonicscans");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn tracking_new_title_creates_entry(ctx: &TestHarness) {
    let (status, body) = ctx.post(BLUE_LOCK).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Manga: Blue Lock stored successfully.");
    assert_eq!(body["item"]["title"], "Blue Lock");
    assert_eq!(body["item"]["authors"], "Muneyuki Kaneshiro");
    assert_eq!(body["item"]["views"], "No views found");
    assert_eq!(body["item"]["genres"], json!(["Sports", "Drama", "Shounen"]));
    assert_eq!(ctx.store.count().await.unwrap(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn tracking_known_title_updates_in_place(ctx: &TestHarness) {
    // Demonicscans slugs keep the caller's casing
    ctx.fetcher.add_page(
        "https://demonicscans.org/manga/blue-lock",
        fixtures::DEMONIC_BLUE_LOCK_HTML,
    );
    let (_, created) = ctx.post(BLUE_LOCK).await;

    let (status, body) = ctx.post("/items/blue%20lock").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Manga: blue lock updated successfully.");
    assert_eq!(body["item"]["id"], created["item"]["id"]);
    assert_eq!(ctx.store.count().await.unwrap(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn broken_author_landmark_still_succeeds(ctx: &TestHarness) {
    let html = fixtures::DEMONIC_BLUE_LOCK_HTML.replace(
        "<li>Author</li><li>Muneyuki Kaneshiro</li>",
        "<li>Artist</li><li>Yusuke Nomura</li>",
    );
    ctx.fetcher.add_page(fixtures::DEMONIC_BLUE_LOCK_URL, html);

    let (status, body) = ctx.post(BLUE_LOCK).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["item"]["authors"], "No author found");
    assert_eq!(body["item"]["status"], "Ongoing");
    assert_eq!(body["item"]["latest_chapter_label"], "Chapter 280");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn title_unknown_to_source_is_not_found(ctx: &TestHarness) {
    ctx.fetcher.add_page(
        "https://demonicscans.org/manga/Nothing-Here",
        fixtures::DEMONIC_EMPTY_HTML,
    );

    let (status, body) = ctx.post("/items/Nothing%20Here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "no results found for Nothing Here" }));
    assert_eq!(ctx.store.count().await.unwrap(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unreachable_source_is_bad_gateway(ctx: &TestHarness) {
    ctx.fetcher.add_failure(
        fixtures::DEMONIC_BLUE_LOCK_URL,
        "HTTP 503 Service Unavailable",
    );

    let (status, body) = ctx.post(BLUE_LOCK).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("HTTP 503 Service Unavailable"));
    assert_eq!(ctx.store.count().await.unwrap(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn blank_title_is_bad_request(ctx: &TestHarness) {
    let (status, body) = ctx.post("/items/%20%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "title must not be empty");
    assert_eq!(ctx.fetcher.call_count(), 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_returns_stored_entry(ctx: &TestHarness) {
    ctx.post(BLUE_LOCK).await;

    let (status, body) = ctx.get("/items/BLUE%20LOCK").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Blue Lock");
    assert_eq!(body["rating"], 0.87);
    assert_eq!(
        body["latest_chapter_url"],
        "https://demonicscans.org/title/Blue-Lock/chapter/280/1"
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_unknown_title_is_not_found(ctx: &TestHarness) {
    let (status, body) = ctx.get("/items/Nothing%20Here").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "no stored entry for Nothing Here" }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn list_is_ordered_by_title(ctx: &TestHarness) {
    let reconciler = Reconciler::new(ctx.store.clone());
    reconciler.upsert(&sample_record("Vinland Saga")).await.unwrap();
    reconciler.upsert(&sample_record("Berserk")).await.unwrap();

    let (status, body) = ctx.get("/items").await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Berserk", "Vinland Saga"]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn delete_removes_then_reports_not_found(ctx: &TestHarness) {
    ctx.post(BLUE_LOCK).await;

    let (status, body) = ctx.delete(BLUE_LOCK).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Manga: Blue Lock removed successfully.");
    assert_eq!(ctx.store.count().await.unwrap(), 0);

    let (status, _) = ctx.delete(BLUE_LOCK).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn refresh_reports_every_stored_title(ctx: &TestHarness) {
    let reconciler = Reconciler::new(ctx.store.clone());
    reconciler.upsert(&sample_record("Blue Lock")).await.unwrap();
    reconciler.upsert(&sample_record("Gone Title")).await.unwrap();

    let (status, body) = ctx.put("/items").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0], json!({ "title": "Blue Lock", "outcome": "updated" }));
    assert_eq!(body[1]["title"], "Gone Title");
    assert_eq!(body[1]["outcome"], "failed");

    let (_, refreshed) = ctx.get(BLUE_LOCK).await;
    assert_eq!(refreshed["authors"], "Muneyuki Kaneshiro");
}
