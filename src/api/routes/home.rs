//! Landing page.

use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;
use tracing::debug;

use crate::api::server::AppState;

const FALLBACK_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Interactive Learning Platform</title></head>
<body>
<h1>Interactive Learning Platform</h1>
<ul>
<li><code>POST /generate-content</code> with JSON <code>{"topic": "..."}</code></li>
<li><code>POST /generate-quiz</code> with form fields <code>topic</code>, <code>difficulty</code></li>
<li><code>GET /health</code></li>
</ul>
</body>
</html>
"#;

/// GET / — `index.html` from the templates directory, or a built-in page.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let path = state.templates_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Landing template unavailable, using built-in page");
            Html(FALLBACK_PAGE.to_string())
        }
    }
}
