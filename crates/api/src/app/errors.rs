use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use cookbook_core::CookbookError;

/// Map a cookbook error to its HTTP response.
///
/// Every cookbook error is the caller's to fix, so all of them are 400s; the
/// `error` code tells them apart.
pub fn cookbook_error_to_response(err: CookbookError) -> axum::response::Response {
    let code = match &err {
        CookbookError::MalformedName => "malformed_name",
        CookbookError::InvalidEntryType(_) => "invalid_entry_type",
        CookbookError::DuplicateEntryName(_) => "duplicate_entry_name",
        CookbookError::DuplicateRequiredItem(_) => "duplicate_required_item",
        CookbookError::NegativeCookTime(_) => "negative_cook_time",
        CookbookError::MissingField(_) => "missing_field",
        CookbookError::EntryNotFound(_) => "recipe_not_found",
        CookbookError::CyclicReference(_) => "cyclic_reference",
    };
    json_error(StatusCode::BAD_REQUEST, code, err.to_string())
}

/// Map a JSON body that failed to parse or deserialize into the error envelope.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
