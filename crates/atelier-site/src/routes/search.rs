//! # Search Route
//!
//! `GET /search?q=` runs the naive keyword scan from [`crate::search`]
//! over posts and photos. An empty query renders the prompt page without
//! touching the database.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::flash::take_flashes;
use crate::search::{matching_photos, matching_posts, normalize_query};
use crate::state::AppState;
use crate::templates::SearchPage;

pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search))
}

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let query = normalize_query(&params.q);
    let (jar, flashes) = take_flashes(jar);

    let (post_results, photo_results) = if query.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        let posts = db::posts::list_recent(&state.pool).await?;
        let photos = db::gallery::list_recent(&state.pool).await?;
        (
            matching_posts(posts, &query),
            matching_photos(photos, &query),
        )
    };

    Ok((
        jar,
        SearchPage {
            site_title: state.config.site_title.clone(),
            flashes,
            query,
            post_results,
            photo_results,
        },
    ))
}
