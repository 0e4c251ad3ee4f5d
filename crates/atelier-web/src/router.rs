//! Web router using Axum

use std::path::Path;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Where Trunk writes the compiled frontend, relative to the workspace root
pub const DIST_DIR: &str = "crates/atelier-web/dist";

/// Create the web router
pub fn create_router() -> Router {
    create_router_at(Path::new(DIST_DIR))
}

/// Router serving the compiled frontend from `dist` when present, with the
/// build-instructions placeholder otherwise
pub fn create_router_at(dist: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().route("/api/health", get(health_handler));

    let index = dist.join("index.html");
    let router = if index.exists() {
        // SPA: unmatched paths (client routes) resolve to the shell
        router.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)))
    } else {
        router.route("/", get(index_handler))
    };

    router.layer(cors)
}

async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Atelier Admin - Build Required</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #f5f3ef;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }
        .setup-message {
            max-width: 600px;
            background: white;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }
        h1 { font-size: 1.5rem; margin-bottom: 1rem; }
        p { margin-bottom: 1rem; line-height: 1.6; }
        code {
            background: #f0ede7;
            padding: 0.25rem 0.5rem;
            border-radius: 4px;
            font-family: monospace;
        }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>Atelier Admin - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the admin UI can be displayed.</p>
        <ol style="margin-left: 1.5rem; margin-bottom: 1rem;">
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/atelier-web && trunk build --release</code></li>
            <li>Restart server: <code>atelier serve</code></li>
        </ol>
        <p>Health check: <a href="/api/health">/api/health</a></p>
    </div>
</body>
</html>"#,
    )
}

async fn health_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "service": "atelier-web",
    }))
}
