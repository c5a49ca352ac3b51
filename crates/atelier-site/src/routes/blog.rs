//! # Blog Routes
//!
//! The public blog index and single-post pages. A missing post is not a
//! 404 here: the visitor is sent back to the index with a notice, since
//! stale links are the common case after an admin delete.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::CookieJar;

use crate::db;
use crate::error::AppError;
use crate::flash::{flash_redirect, take_flashes, Flash};
use crate::state::AppState;
use crate::templates::{BlogPage, PostDetailPage};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blog", get(blog_index))
        .route("/post/:id", get(post_detail))
}

async fn blog_index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let posts = db::posts::list_recent(&state.pool).await?;
    let (jar, flashes) = take_flashes(jar);
    Ok((
        jar,
        BlogPage {
            site_title: state.config.site_title.clone(),
            flashes,
            posts,
        },
    ))
}

async fn post_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let Some(post) = db::posts::get_by_id(&state.pool, id).await? else {
        return Ok(flash_redirect(jar, Flash::warning("Post not found."), "/blog").into_response());
    };

    let (jar, flashes) = take_flashes(jar);
    Ok((
        jar,
        PostDetailPage {
            site_title: state.config.site_title.clone(),
            flashes,
            post,
        },
    )
        .into_response())
}
