mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let backend = std::env::var("BACKEND_URL").unwrap_or_else(|_| state::DEFAULT_BACKEND_URL.to_owned());

    let state = state::AppState::new(backend);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "phillyflow proxy listening");
    axum::serve(listener, app).await.expect("server failed");
}
