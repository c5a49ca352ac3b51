//! # Subscribe Route
//!
//! `POST /subscribe` from the home-page form. Every outcome redirects back
//! to `/` with a flash: invalid input, an already-known address, and a new
//! subscription all land on the same page with a one-line notice.

use axum::extract::State;
use axum::response::Redirect;
use axum::routing::post;
use axum::{Form, Router};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;

use atelier_core::EmailAddress;

use crate::db;
use crate::error::AppError;
use crate::flash::{flash_redirect, Flash};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/subscribe", post(subscribe))
}

#[derive(Deserialize)]
struct SubscribeForm {
    #[serde(default)]
    email: String,
}

async fn subscribe(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SubscribeForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let email = match EmailAddress::new(&form.email) {
        Ok(email) => email,
        Err(_) => {
            return Ok(flash_redirect(
                jar,
                Flash::warning("Enter a valid email."),
                "/",
            ));
        }
    };

    match db::subscribers::insert(&state.pool, &email, Utc::now()).await {
        Ok(()) => {
            tracing::info!("new subscriber");
            Ok(flash_redirect(
                jar,
                Flash::success("You are on the list. The next photo will find you."),
                "/",
            ))
        }
        Err(e) if db::is_unique_violation(&e) => Ok(flash_redirect(
            jar,
            Flash::info("That email is already subscribed."),
            "/",
        )),
        Err(e) => Err(e.into()),
    }
}
