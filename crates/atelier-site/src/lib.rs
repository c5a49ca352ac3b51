//! # atelier-site
//!
//! A photographer's portfolio site: public pages, an admin-authored blog,
//! a tagged photo gallery, an email subscriber list, and keyword search,
//! all behind a single-password admin panel.
//!
//! ## Architecture
//!
//! - **HTTP**: Axum router assembled in [`app`], handlers under
//!   [`routes`], shared [`state::AppState`] everywhere.
//! - **Persistence**: SQLite via sqlx; free functions per table under
//!   [`db`].
//! - **Rendering**: Askama templates compiled into the binary; structs in
//!   [`templates`].
//! - **Domain types**: validated newtypes from the `atelier-core` crate.

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod flash;
pub mod routes;
pub mod search;
pub mod session;
pub mod state;
pub mod templates;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the full application router over the given state.
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(state.config.static_root.clone());
    let upload_limit = state.config.upload_limit_bytes;

    Router::new()
        .merge(routes::pages::router())
        .merge(routes::blog::router())
        .merge(routes::gallery::router())
        .merge(routes::search::router())
        .merge(routes::subscribe::router())
        .merge(routes::admin::router())
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("that page does not exist".to_string())
}
