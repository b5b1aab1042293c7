use std::net::SocketAddr;

use color_api::{create_router, CliConfig};

fn base_config() -> CliConfig {
    CliConfig {
        listen: "127.0.0.1:0".to_string(),
        static_dir: None,
        cors_origins: vec![],
        config: None,
        verbose: false,
        json_logs: false,
    }
}

async fn spawn_server(config: CliConfig) -> SocketAddr {
    let app = create_router(&config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_default_cors_is_permissive() {
    let addr = spawn_server(base_config()).await;

    let response = reqwest::Client::new()
        .get(format!("http://{}/api/color", addr))
        .header("Origin", "http://anywhere.example")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["access-control-allow-origin"]
            .to_str()
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_restricted_to_configured_origins() {
    let mut config = base_config();
    config.cors_origins = vec!["http://localhost:5173".to_string()];
    let addr = spawn_server(config).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/api/color", addr);

    let allowed = client
        .get(&url)
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()["access-control-allow-origin"]
            .to_str()
            .unwrap(),
        "http://localhost:5173"
    );

    let denied = client
        .get(&url)
        .header("Origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert!(!denied.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_static_dir_served_at_root() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<!DOCTYPE html><h1>colors</h1>",
    )
    .unwrap();

    let mut config = base_config();
    config.static_dir = Some(dir.path().to_str().unwrap().to_string());
    let addr = spawn_server(config).await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("<h1>colors</h1>"));

    // The API still answers alongside the static fallback.
    let api = reqwest::get(format!("http://{}/api/color", addr))
        .await
        .unwrap();
    assert_eq!(api.status(), 200);
}

#[tokio::test]
async fn test_root_without_static_dir_is_404() {
    let addr = spawn_server(base_config()).await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status(), 404);
}
