use axum::{routing::get, Router};

pub mod entries;
pub mod parse;
pub mod summary;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(parse::router())
        .merge(entries::router())
        .merge(summary::router())
}
