//! # Admin Routes
//!
//! Login, logout, and the single-page admin panel: publish and delete
//! posts, upload and re-tag gallery photos, review subscribers and
//! contact messages, export the subscriber CSV.
//!
//! Every handler past the login pair gates itself by taking
//! [`AdminSession`] as an argument; a request without a live session is
//! redirected to the login form by the extractor's rejection.

use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::Deserialize;

use atelier_core::{GalleryTag, PostKind};

use crate::db;
use crate::error::AppError;
use crate::export;
use crate::flash::{flash_redirect, take_flashes, Flash};
use crate::session::{verify_admin_password, AdminSession, SESSION_COOKIE};
use crate::state::AppState;
use crate::templates::{AdminLoginPage, AdminPage};
use crate::upload;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(panel))
        .route("/admin/login", get(login_form).post(login))
        .route("/admin/logout", get(logout))
        .route("/admin/posts", post(create_post))
        .route("/admin/posts/:id/delete", post(delete_post))
        .route("/admin/subscribers.csv", get(export_subscribers))
        .route("/admin/gallery", post(upload_photos))
        .route("/admin/gallery/:id/tag", post(retag_photo))
        .route("/admin/gallery/:id/delete", post(delete_photo))
}

// ── Login & Logout ──────────────────────────────────────────────────────────

async fn login_form(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, flashes) = take_flashes(jar);
    (
        jar,
        AdminLoginPage {
            site_title: state.config.site_title.clone(),
            flashes,
        },
    )
}

#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    password: String,
}

async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> (CookieJar, Redirect) {
    if !verify_admin_password(&form.password, &state.config.admin_password) {
        tracing::warn!("failed admin login attempt");
        return flash_redirect(jar, Flash::danger("Incorrect password."), "/admin/login");
    }

    let token = state.sessions.create();
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    tracing::info!("admin logged in");
    (jar.add(cookie), Redirect::to("/admin"))
}

async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.revoke(cookie.value());
    }
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    flash_redirect(jar, Flash::info("Logged out."), "/")
}

// ── Panel ───────────────────────────────────────────────────────────────────

async fn panel(
    State(state): State<AppState>,
    _admin: AdminSession,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let posts = db::posts::list_recent(&state.pool).await?;
    let photos = db::gallery::list_recent(&state.pool).await?;
    let subscribers = db::subscribers::list_recent(&state.pool).await?;
    let messages = db::messages::list_recent(&state.pool).await?;

    let (jar, flashes) = take_flashes(jar);
    Ok((
        jar,
        AdminPage {
            site_title: state.config.site_title.clone(),
            flashes,
            posts,
            subscribers,
            photos,
            messages,
            tags: GalleryTag::ALL.to_vec(),
        },
    ))
}

// ── Posts ───────────────────────────────────────────────────────────────────

async fn create_post(
    State(state): State<AppState>,
    _admin: AdminSession,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Redirect), AppError> {
    let mut title = String::new();
    let mut kind_raw: Option<String> = None;
    let mut body = String::new();
    let mut image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("title") => title = field.text().await?,
            Some("kind") => kind_raw = Some(field.text().await?),
            Some("body") => body = field.text().await?,
            Some("image") => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                if let Some(name) = filename {
                    if !name.is_empty() && !bytes.is_empty() {
                        image = Some((name, bytes));
                    }
                }
            }
            _ => {}
        }
    }

    let title = title.trim().to_string();
    let body = body.trim().to_string();
    if title.is_empty() || body.is_empty() {
        return Ok(flash_redirect(
            jar,
            Flash::warning("Title and body required."),
            "/admin",
        ));
    }
    let kind = match PostKind::from_form(kind_raw.as_deref()) {
        Ok(kind) => kind,
        Err(e) => {
            return Ok(flash_redirect(jar, Flash::warning(e.to_string()), "/admin"));
        }
    };

    // An attachment with a disallowed extension is dropped; the post still
    // publishes without an image.
    let mut image_url = None;
    if let Some((name, bytes)) = image {
        if upload::allowed_file(&name) {
            let unique = upload::unique_name(&name);
            upload::save(&state.config.uploads_dir(), &unique, &bytes)
                .await
                .map_err(|e| AppError::Internal(format!("failed to store upload: {e}")))?;
            image_url = Some(format!("/static/uploads/{unique}"));
        } else {
            tracing::warn!(filename = %name, "post image rejected by extension allowlist");
        }
    }

    let id = db::posts::insert(
        &state.pool,
        &title,
        &kind,
        &body,
        image_url.as_deref(),
        Utc::now(),
    )
    .await?;
    tracing::info!(id, "post published");

    Ok(flash_redirect(jar, Flash::success("Post published."), "/admin"))
}

async fn delete_post(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AppError> {
    if let Some(post) = db::posts::get_by_id(&state.pool, id).await? {
        if let Some(image_url) = &post.image_url {
            upload::remove_quietly(&state.config, image_url).await;
        }
        db::posts::delete(&state.pool, id).await?;
        tracing::info!(id, "post deleted");
        Ok(flash_redirect(
            jar,
            Flash::info("Post and image deleted."),
            "/admin",
        ))
    } else {
        Ok(flash_redirect(jar, Flash::warning("Post not found."), "/admin"))
    }
}

// ── Subscribers ─────────────────────────────────────────────────────────────

async fn export_subscribers(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let subscribers = db::subscribers::list_recent(&state.pool).await?;
    let csv = export::subscribers_csv(&subscribers);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"subscribers.csv\"",
            ),
        ],
        csv,
    ))
}

// ── Gallery ─────────────────────────────────────────────────────────────────

async fn upload_photos(
    State(state): State<AppState>,
    _admin: AdminSession,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Redirect), AppError> {
    let mut files: Vec<(String, Bytes)> = Vec::new();
    let mut tag_raw: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("images") => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;
                if let Some(name) = filename {
                    if !name.is_empty() && !bytes.is_empty() {
                        files.push((name, bytes));
                    }
                }
            }
            Some("tag") => tag_raw = Some(field.text().await?),
            _ => {}
        }
    }

    let tag_raw = tag_raw.unwrap_or_default();
    if files.is_empty() || tag_raw.trim().is_empty() {
        return Ok(flash_redirect(
            jar,
            Flash::warning("Please choose files and a tag."),
            "/admin",
        ));
    }
    let tag = match tag_raw.parse::<GalleryTag>() {
        Ok(tag) => tag,
        Err(_) => {
            return Ok(flash_redirect(jar, Flash::warning("Invalid tag."), "/admin"));
        }
    };

    let mut saved = 0usize;
    for (name, bytes) in files {
        if !upload::allowed_file(&name) {
            tracing::warn!(filename = %name, "gallery upload rejected by extension allowlist");
            continue;
        }
        let unique = upload::unique_name(&name);
        upload::save(&state.config.gallery_dir(), &unique, &bytes)
            .await
            .map_err(|e| AppError::Internal(format!("failed to store upload: {e}")))?;
        db::gallery::insert(
            &state.pool,
            &format!("/static/gallery_uploads/{unique}"),
            tag,
            Utc::now(),
        )
        .await?;
        saved += 1;
    }
    tracing::info!(saved, tag = %tag, "gallery upload complete");

    Ok(flash_redirect(jar, Flash::success("Photos uploaded."), "/admin"))
}

#[derive(Deserialize)]
struct TagForm {
    #[serde(default)]
    tag: String,
}

async fn retag_photo(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<i64>,
    jar: CookieJar,
    Form(form): Form<TagForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let tag = match form.tag.parse::<GalleryTag>() {
        Ok(tag) => tag,
        Err(_) => {
            return Ok(flash_redirect(jar, Flash::warning("Invalid tag."), "/admin"));
        }
    };

    if db::gallery::update_tag(&state.pool, id, tag).await? {
        Ok(flash_redirect(jar, Flash::success("Photo updated."), "/admin"))
    } else {
        Ok(flash_redirect(jar, Flash::warning("Photo not found."), "/admin"))
    }
}

async fn delete_photo(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), AppError> {
    if let Some(photo) = db::gallery::get_by_id(&state.pool, id).await? {
        upload::remove_quietly(&state.config, &photo.filename).await;
        db::gallery::delete(&state.pool, id).await?;
        tracing::info!(id, "photo deleted");
        Ok(flash_redirect(jar, Flash::info("Photo deleted."), "/admin"))
    } else {
        Ok(flash_redirect(jar, Flash::warning("Photo not found."), "/admin"))
    }
}
