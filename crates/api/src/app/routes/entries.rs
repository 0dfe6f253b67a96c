use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/entry", post(add_entry).get(list_entries))
        .route("/entry/:name", get(get_entry))
}

/// Admit an ingredient or recipe.
///
/// POST /entry, 200 with an empty body on success.
pub async fn add_entry(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::AddEntryRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let entry = match body.into_entry() {
        Ok(e) => e,
        Err(e) => return errors::cookbook_error_to_response(e),
    };

    match services.add_entry(entry) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::cookbook_error_to_response(e),
    }
}

/// List every entry in admission order.
///
/// GET /entry
pub async fn list_entries(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services.entries();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

/// Fetch a stored entry in its admission shape.
///
/// GET /entry/{name}
pub async fn get_entry(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    match services.entry(&name) {
        Some(entry) => (StatusCode::OK, Json(entry)).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "entry not found"),
    }
}
