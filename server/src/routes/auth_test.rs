use super::*;

use std::net::SocketAddr;

use axum::Router;
use axum::http::header;
use axum::routing::post;

use crate::routes;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
}

async fn spawn_proxy(backend: String) -> SocketAddr {
    serve(routes::app(AppState::new(backend))).await
}

async fn unreachable_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn login_relays_backend_set_cookie() {
    let backend = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                [(header::SET_COOKIE, "session=fresh-token; Path=/; HttpOnly")],
                axum::Json(serde_json::json!({ "status": "ok" })),
            )
        }),
    );
    let backend_addr = serve(backend).await;
    let proxy_addr = spawn_proxy(format!("http://{backend_addr}")).await;

    let response = reqwest::Client::new()
        .post(format!("http://{proxy_addr}/api/auth/login"))
        .json(&serde_json::json!({ "email": "a@b.c", "password": "pw" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let relayed = response.headers().get(header::SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap();
    assert!(relayed.contains("session=fresh-token"));
}

#[tokio::test]
async fn login_rejection_passes_through() {
    let backend = Router::new().route(
        "/auth/login",
        post(|| async {
            (StatusCode::UNAUTHORIZED, axum::Json(serde_json::json!({ "message": "bad credentials" })))
        }),
    );
    let backend_addr = serve(backend).await;
    let proxy_addr = spawn_proxy(format!("http://{backend_addr}")).await;

    let response = reqwest::Client::new()
        .post(format!("http://{proxy_addr}/api/auth/login"))
        .json(&serde_json::json!({ "email": "a@b.c", "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "bad credentials");
}

#[tokio::test]
async fn logout_expires_cookie_even_when_backend_down() {
    let proxy_addr = spawn_proxy(unreachable_origin().await).await;

    let response = reqwest::Client::new()
        .post(format!("http://{proxy_addr}/api/auth/logout"))
        .header(header::COOKIE, "session=whatever")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let cleared = response.headers().get(header::SET_COOKIE).and_then(|v| v.to_str().ok()).unwrap();
    assert!(cleared.starts_with("session="));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn logout_overrides_backend_set_cookie() {
    let backend = Router::new().route(
        "/auth/logout",
        post(|| async {
            (
                [(header::SET_COOKIE, "session=should-not-survive; Path=/")],
                axum::Json(serde_json::json!({ "status": "done" })),
            )
        }),
    );
    let backend_addr = serve(backend).await;
    let proxy_addr = spawn_proxy(format!("http://{backend_addr}")).await;

    let response = reqwest::Client::new()
        .post(format!("http://{proxy_addr}/api/auth/logout"))
        .header(header::COOKIE, "session=whatever")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let cookies: Vec<&str> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].contains("Max-Age=0"));
    assert!(!cookies[0].contains("should-not-survive"));
}

#[tokio::test]
async fn user_info_requires_cookie() {
    let proxy_addr = spawn_proxy(unreachable_origin().await).await;

    let response = reqwest::get(format!("http://{proxy_addr}/api/auth/me")).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn update_location_forwards_body() {
    let backend = Router::new().route(
        "/auth/update_location",
        axum::routing::put(|axum::Json(body): axum::Json<serde_json::Value>| async move {
            axum::Json(serde_json::json!({ "location": body["location"] }))
        }),
    );
    let backend_addr = serve(backend).await;
    let proxy_addr = spawn_proxy(format!("http://{backend_addr}")).await;

    let response = reqwest::Client::new()
        .put(format!("http://{proxy_addr}/api/auth/location"))
        .header(header::COOKIE, "session=tok")
        .json(&serde_json::json!({ "location": "Philadelphia, PA" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["location"], "Philadelphia, PA");
}
