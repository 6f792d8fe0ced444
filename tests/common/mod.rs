#![allow(dead_code)]

use axum::http::StatusCode;
use url_redirector::domain::entities::{Registries, StaticEntry};
use url_redirector::state::AppState;

/// Built-in registries plus fixtures for the static branch:
///
/// - `favicon` → `icon.ico` (static, no handler)
/// - `bots` → `robots.txt` (static, delegated handler)
/// - `teapot` → `teapot.txt` (static, delegated handler with a custom status)
pub fn create_test_registries() -> Registries {
    Registries::builtin()
        .with_redirect("favicon", "icon.ico")
        .with_redirect("bots", "robots.txt")
        .with_redirect("teapot", "teapot.txt")
        .with_static_page(
            "robots.txt",
            StaticEntry::delegate(|_req| async { "User-agent: *\nDisallow:\n" }),
        )
        .with_static_page(
            "teapot.txt",
            StaticEntry::delegate(|req: axum::extract::Request| async move {
                (
                    StatusCode::IM_A_TEAPOT,
                    [("x-static-page", "teapot")],
                    format!("{} {}", req.method(), req.uri().path()),
                )
            }),
        )
}

pub fn create_test_state() -> AppState {
    AppState::from_registries(create_test_registries())
}
