use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/parse", post(parse_name))
}

/// Normalize a handwritten recipe name.
///
/// POST /parse `{ "input": "riz-kHaLiFa" }` -> `{ "msg": "Riz Khalifa" }`
pub async fn parse_name(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ParseRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match services.normalize_name(&body.input) {
        Ok(msg) => (StatusCode::OK, Json(dto::ParseResponse { msg })).into_response(),
        Err(e) => errors::cookbook_error_to_response(e),
    }
}
