use axum::extract::State;
use axum::Json;

use bistro_core::content::SiteContent;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /content -- the static site content loaded at startup.
pub async fn get_content(State(state): State<AppState>) -> Json<DataResponse<SiteContent>> {
    Json(DataResponse::new(SiteContent::clone(&state.content)))
}
