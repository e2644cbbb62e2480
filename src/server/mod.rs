//! Web server exposing the objective engine over HTTP

pub mod http;

use anyhow::{Context, Result};
use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::engine::ObjectiveEngine;

/// Shared server state
#[derive(Clone, Default)]
pub struct ServerState {
    pub engine: ObjectiveEngine,
}

impl ServerState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the application router
pub fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_page))
        .route("/index.html", get(index_page))
        .route("/health", get(http::health_handler))
        .route("/api/status", get(http::status_handler))
        .route("/api/generate", post(http::generate_handler))
        .fallback(http::not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server and run until Ctrl+C
pub async fn start(host: &str, port: u16) -> Result<()> {
    let app = router(ServerState::new());

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    let addr = listener.local_addr()?;

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("     Learning Objectives Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    println!("Listening on http://{}", addr);
    println!("Press Ctrl+C to stop the server");
    println!();

    info!("Server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutting down server");
}

async fn index_page() -> Html<&'static str> {
    Html(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Learning Objectives Generator</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
            line-height: 1.6;
        }
        .container { background: white; padding: 30px; border-radius: 10px; }
        h1 { color: #2c3e50; text-align: center; }
        textarea {
            width: 100%;
            min-height: 100px;
            padding: 12px;
            font-size: 16px;
            box-sizing: border-box;
        }
        button {
            background: #3498db;
            color: white;
            padding: 12px 30px;
            border: none;
            border-radius: 5px;
            font-size: 16px;
            cursor: pointer;
        }
        button:disabled { background: #95a5a6; }
        .results { margin-top: 30px; padding: 20px; background: #ecf0f1; border-radius: 5px; }
        .objectives { font-family: 'Courier New', monospace; white-space: pre; overflow-x: auto; }
        .error { color: #721c24; background: #f8d7da; padding: 15px; border-radius: 5px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Learning Objectives Generator</h1>
        <p>Enter a course goal to get learning objectives aligned to Bloom's Taxonomy.</p>
        <form id="goal-form">
            <textarea id="goal" placeholder="e.g. Students will design a user interface for a mobile application"></textarea>
            <p><button type="submit" id="generate">Generate Learning Objectives</button></p>
        </form>
        <div id="output"></div>
    </div>
    <script>
        const form = document.getElementById('goal-form');
        const output = document.getElementById('output');
        const button = document.getElementById('generate');

        function escapeHtml(text) {
            const div = document.createElement('div');
            div.textContent = text;
            return div.innerHTML;
        }

        form.addEventListener('submit', async (event) => {
            event.preventDefault();
            const goal = document.getElementById('goal').value.trim();
            if (!goal) {
                output.innerHTML = '<div class="error">Please enter a course goal.</div>';
                return;
            }
            button.disabled = true;
            button.textContent = 'Generating...';
            try {
                const response = await fetch('/api/generate', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ goal })
                });
                const data = await response.json();
                if (data.success) {
                    const r = data.result;
                    const name = r.target_level_name.charAt(0).toUpperCase() + r.target_level_name.slice(1);
                    output.innerHTML = '<div class="results">'
                        + '<p><strong>Target level:</strong> ' + escapeHtml(name) + ' (Level ' + r.target_level + ')</p>'
                        + '<div class="objectives">' + escapeHtml(r.formatted_output) + '</div></div>';
                } else {
                    output.innerHTML = '<div class="error">' + escapeHtml(data.error) + '</div>';
                }
            } catch (err) {
                output.innerHTML = '<div class="error">Request failed: ' + escapeHtml(err.message) + '</div>';
            } finally {
                button.disabled = false;
                button.textContent = 'Generate Learning Objectives';
            }
        });
    </script>
</body>
</html>"#)
}
