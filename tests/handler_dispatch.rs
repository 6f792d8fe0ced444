mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum_test::TestServer;
use tower::ServiceExt;
use url_redirector::domain::entities::Registries;
use url_redirector::routes::{app_router, router};
use url_redirector::state::AppState;

fn create_server(state: AppState) -> TestServer {
    let app: Router = router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_github() {
    let server = create_server(AppState::from_registries(Registries::builtin()));

    let response = server.get("/github").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location, "https://github.com/jawscout");
}

#[tokio::test]
async fn test_redirect_home() {
    let server = create_server(AppState::from_registries(Registries::builtin()));

    let response = server.get("/home").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location, "https://www.jawscout.cc");
}

#[tokio::test]
async fn test_every_registered_key_redirects_to_its_value() {
    let registries = Registries::builtin()
        .with_redirect("docs", "https://docs.rs")
        .with_redirect("about", "/about-me");
    let expected = registries.redirects.clone();
    let server = create_server(AppState::from_registries(registries));

    for (key, target) in &expected {
        let response = server.get(&format!("/{}", key)).await;

        assert_eq!(response.status_code(), StatusCode::FOUND, "key {}", key);
        assert_eq!(response.header("location"), target.as_str());
    }
}

#[tokio::test]
async fn test_unknown_key_returns_500() {
    let server = create_server(common::create_test_state());

    let response = server.get("/nonexistent").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Key not in DB");
    assert_eq!(response.header("x-content-type-options"), "nosniff");
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_static_key_is_not_reachable_directly() {
    let server = create_server(common::create_test_state());

    let response = server.get("/robots.txt").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Key not in DB");
}

#[tokio::test]
async fn test_static_noop_returns_empty_ok() {
    let server = create_server(common::create_test_state());

    let response = server.get("/favicon").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().get("location").is_none());
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn test_static_delegate_writes_response() {
    let server = create_server(common::create_test_state());

    let response = server.get("/bots").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().get("location").is_none());
    assert_eq!(response.text(), "User-agent: *\nDisallow:\n");
}

#[tokio::test]
async fn test_static_delegate_controls_status_and_headers() {
    let server = create_server(common::create_test_state());

    let response = server.post("/teapot").await;

    assert_eq!(response.status_code(), StatusCode::IM_A_TEAPOT);
    assert_eq!(response.header("x-static-page"), "teapot");
    assert_eq!(response.text(), "POST /teapot");
}

#[tokio::test]
async fn test_any_method_is_dispatched() {
    let server = create_server(AppState::from_registries(Registries::builtin()));

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = server.method(method.clone(), "/github").await;

        assert_eq!(response.status_code(), StatusCode::FOUND, "method {}", method);
        assert_eq!(response.header("location"), "https://github.com/jawscout");
    }
}

#[tokio::test]
async fn test_same_key_twice_gives_same_response() {
    let server = create_server(common::create_test_state());

    let first = server.get("/home").await;
    let second = server.get("/home").await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.header("location"), second.header("location"));

    let first = server.get("/nonexistent").await;
    let second = server.get("/nonexistent").await;

    assert_eq!(first.status_code(), second.status_code());
    assert_eq!(first.text(), second.text());
}

#[tokio::test]
async fn test_multi_segment_path_is_not_routed() {
    let server = create_server(AppState::from_registries(Registries::builtin()));

    server.get("/github/extra").await.assert_status_not_found();
    server.get("/").await.assert_status_not_found();
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app = app_router(AppState::from_registries(Registries::builtin()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/github/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"],
        "https://github.com/jawscout"
    );
}

#[tokio::test]
async fn test_undecodable_key_returns_500() {
    let app = app_router(AppState::from_registries(Registries::builtin()));

    let response = app
        .oneshot(Request::builder().uri("/%FF").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Key not in DB");
}

#[tokio::test]
async fn test_unencodable_target_returns_500() {
    let server = create_server(AppState::from_registries(
        Registries::builtin().with_redirect("bad", "x\ny"),
    ));

    let response = server.get("/bad").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Invalid redirect target");
    assert!(response.headers().get("location").is_none());
}
