use crate::html;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, response::Html};

/// GET / handler - Navigation page
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Navigation form", content_type = "text/html", body = String)
    ),
    tag = "pages"
)]
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(html::index::render(&state.campus.locations()))
}
