use axum::response::Html;

/// The single-screen form + map page. The script in it drives the JSON API.
const INDEX_HTML: &str = include_str!("../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
