use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use cookbook_core::CookbookError;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/summary", get(get_summary))
}

/// Expand a recipe into total cook time and base ingredients.
///
/// GET /summary?name=Omelette
///
/// A request without `name` names no recipe, so it is answered like any
/// unknown recipe.
pub async fn get_summary(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::SummaryQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(_) => return errors::cookbook_error_to_response(CookbookError::not_found("")),
    };

    match services.summary(&query.name) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => errors::cookbook_error_to_response(e),
    }
}
