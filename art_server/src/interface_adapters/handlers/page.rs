use axum::response::Html;

// Client page, embedded so the binary serves it without a static dir.
const INDEX_HTML: &str = include_str!("../../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
