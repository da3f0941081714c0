use chrono::{Duration, Utc};
use mockito::{Matcher, Server};
use std::sync::Arc;

use syrins_share::actions::download_image;
use syrins_share::auth::{Secret, TokenGenerator};
use syrins_share::client::ApiClient;
use syrins_share::config::Config;
use syrins_share::error::FetchError;
use syrins_share::listing::{ImageListing, ListingSource, TextListing};
use syrins_share::share_core::token::token_at;

const SECRET: &str = "integration-secret";

fn client_for(origin: &str) -> Arc<ApiClient> {
    let config = Config::for_origin(origin);
    let tokens = TokenGenerator::new(Secret::new(SECRET).unwrap());
    Arc::new(ApiClient::new(&config.api, tokens).unwrap())
}

/// Token for this minute or the next, in case the request crosses a
/// minute boundary.
fn current_token() -> Matcher {
    let now = Utc::now();
    Matcher::AnyOf(vec![
        Matcher::Exact(token_at(SECRET, now)),
        Matcher::Exact(token_at(SECRET, now + Duration::minutes(1))),
    ])
}

#[tokio::test]
async fn test_text_listing_normalizes_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/text-files")
        .match_header("x-api-token", current_token())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"path":"src/app.tsx","content":"export const x=1\n"}]"#)
        .create_async()
        .await;

    let listing = TextListing::new(client_for(&server.url()), "/api/text-files");
    let entries = listing.fetch_listing().await;
    mock.assert_async().await;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "src-app");
    assert_eq!(entries[0].mime_type, "text/tsx");
    assert_eq!(entries[0].preview, "export const x=1");
    assert_eq!(entries[0].content, "export const x=1\n");
}

#[tokio::test]
async fn test_text_listing_sorted_by_name() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/text-files")
        .with_status(200)
        .with_body(
            r#"[
                {"path":"/api/text/zeta.md","content":"z"},
                {"path":"/api/text/alpha.md","content":"a"},
                {"path":"/api/text/Beta.md","content":"b"}
            ]"#,
        )
        .create_async()
        .await;

    let listing = TextListing::new(client_for(&server.url()), "/api/text-files");
    let first = listing.fetch_listing().await;
    let second = listing.fetch_listing().await;

    let names: Vec<&str> = first.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alpha.md", "Beta.md", "zeta.md"]);
    assert_eq!(first, second);
    assert!(first[0].created_at < first[1].created_at);
    assert!(first[1].created_at < first[2].created_at);
}

#[tokio::test]
async fn test_image_listing_normalizes_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/images")
        .match_header("x-api-token", current_token())
        .with_status(200)
        .with_body(r#"["/images/travel/night_sky.jpg","assets/ui/dashboard-dark.png"]"#)
        .create_async()
        .await;

    let listing = ImageListing::new(client_for(&server.url()), "/api/images");
    let images = listing.fetch_listing().await;

    assert_eq!(images.len(), 2);
    assert_eq!(images[0].name, "Dashboard Dark");
    assert_eq!(images[0].category, "General");
    assert_eq!(images[1].name, "Night Sky");
    assert_eq!(images[1].category, "Travel");
    assert_eq!(images[1].url, "/images/travel/night_sky.jpg");
}

#[tokio::test]
async fn test_server_error_yields_empty_listing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/text-files")
        .with_status(500)
        .with_body("boom")
        .expect(2)
        .create_async()
        .await;

    let listing = TextListing::new(client_for(&server.url()), "/api/text-files");
    assert!(listing.fetch_listing().await.is_empty());

    match listing.fetch().await {
        Err(FetchError::Status { status, .. }) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other.map(|e| e.len())),
    }
}

#[tokio::test]
async fn test_forbidden_token_yields_empty_listing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/images")
        .with_status(403)
        .with_body("Invalid or expired token")
        .create_async()
        .await;

    let listing = ImageListing::new(client_for(&server.url()), "/api/images");
    assert!(listing.fetch_listing().await.is_empty());
}

#[tokio::test]
async fn test_malformed_json_yields_empty_listing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/text-files")
        .with_status(200)
        .with_body(r#"{"not":"an array"}"#)
        .expect(2)
        .create_async()
        .await;

    let listing = TextListing::new(client_for(&server.url()), "/api/text-files");
    assert!(listing.fetch_listing().await.is_empty());
    assert!(matches!(listing.fetch().await, Err(FetchError::Decode { .. })));
}

#[tokio::test]
async fn test_unreachable_backend_yields_empty_listing() {
    let listing = TextListing::new(client_for("http://127.0.0.1:9"), "/api/text-files");
    assert!(listing.fetch_listing().await.is_empty());
    assert!(matches!(listing.fetch().await, Err(FetchError::Network { .. })));
}

#[tokio::test]
async fn test_download_image_writes_bytes() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/images/ui/login.png")
        .match_header("x-api-token", current_token())
        .with_status(200)
        .with_body(vec![0x89, b'P', b'N', b'G'])
        .create_async()
        .await;
    let _listing = server
        .mock("GET", "/api/images")
        .with_status(200)
        .with_body(r#"["/images/ui/login.png"]"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let images = ImageListing::new(client.clone(), "/api/images")
        .fetch_listing()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let path = download_image(&client, &images[0], dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("login.png"));
    assert_eq!(std::fs::read(path).unwrap(), vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_download_image_failure_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/images/gone.png")
        .with_status(404)
        .create_async()
        .await;
    let _listing = server
        .mock("GET", "/api/images")
        .with_status(200)
        .with_body(r#"["/images/gone.png"]"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let images = ImageListing::new(client.clone(), "/api/images")
        .fetch_listing()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let err = download_image(&client, &images[0], dir.path())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("404"));
    assert!(!dir.path().join("gone.png").exists());
}
