//! Readiness endpoint for hosting platforms. Every path and method answers
//! `200 text/plain`; the browser client itself is served as static files.

use std::net::SocketAddr;

use axum::{http::header, response::IntoResponse, Router};

pub const READY_MESSAGE: &str = "Seembe Deployment - Application is running!\n";
pub const DEFAULT_PORT: u16 = 3000;

pub fn router() -> Router {
    Router::new().fallback(ready)
}

async fn ready() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], READY_MESSAGE)
}

/// Port from a `PORT` value; anything missing or unparsable means the default.
pub fn port_from(value: Option<&str>) -> u16 {
    let Some(raw) = value else {
        return DEFAULT_PORT;
    };
    match raw.trim().parse() {
        Ok(port) => port,
        Err(e) => {
            tracing::warn!("Ignoring PORT={raw:?} ({e}), using {DEFAULT_PORT}");
            DEFAULT_PORT
        }
    }
}

pub async fn serve() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let port = port_from(std::env::var("PORT").ok().as_deref());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running at http://localhost:{port}/");

    axum::serve(listener, router()).await
}
