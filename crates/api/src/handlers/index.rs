use axum::response::Html;

/// Single-page lookup form posting to `/api/whois`.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
