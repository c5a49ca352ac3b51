//! # Gallery Route
//!
//! The public photo wall, newest first. Tag filtering happens client-side
//! off the `data-tag` attribute, so the handler is a plain list-and-render.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::CookieJar;

use crate::db;
use crate::error::AppError;
use crate::flash::take_flashes;
use crate::state::AppState;
use crate::templates::GalleryPage;

pub fn router() -> Router<AppState> {
    Router::new().route("/gallery", get(gallery))
}

async fn gallery(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let photos = db::gallery::list_recent(&state.pool).await?;
    let (jar, flashes) = take_flashes(jar);
    Ok((
        jar,
        GalleryPage {
            site_title: state.config.site_title.clone(),
            flashes,
            photos,
        },
    ))
}
