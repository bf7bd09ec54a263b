//! Web server module for cortexweb.
//!
//! Serves exactly one route: `GET /` returns an HTML greeting resolved
//! from the process environment on every request. Anything else falls
//! through to the router defaults — 404 for unknown paths, 405 for
//! disallowed methods on `/`.
//!
use anyhow::Context;
use axum::{Router, response::Html, routing::get};
use tokio::net::TcpListener;

use crate::{config, html};

/// Build the application router. One route, no custom fallbacks.
fn app() -> Router {
    Router::new().route("/", get(index_page))
}

/// Start the web server on the fixed bind address. A bind failure is
/// fatal and propagates to the caller.
pub async fn run() -> anyhow::Result<()> {
    let addr = format!("{}:{}", config::BIND_HOST, config::BIND_PORT);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    println!("🌐 Web server listening on http://{addr}");

    axum::serve(listener, app()).await?;
    Ok(())
}

/// Display the greeting page. The environment is re-read on each request.
async fn index_page() -> Html<String> {
    Html(html::greeting_page(&config::greeting_message()))
}
