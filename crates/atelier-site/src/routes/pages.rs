//! # Static Pages & Contact Form
//!
//! Home, about, and the contact page with its message form. These are the
//! simplest handlers: drain flashes, render.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::{Form, Router};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;

use atelier_core::EmailAddress;

use crate::db;
use crate::error::AppError;
use crate::flash::{flash_redirect, take_flashes, Flash};
use crate::state::AppState;
use crate::templates::{AboutPage, ContactPage, IndexPage};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/contact", get(contact).post(send_message))
}

async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, flashes) = take_flashes(jar);
    (
        jar,
        IndexPage {
            site_title: state.config.site_title.clone(),
            flashes,
        },
    )
}

async fn about(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, flashes) = take_flashes(jar);
    (
        jar,
        AboutPage {
            site_title: state.config.site_title.clone(),
            flashes,
        },
    )
}

async fn contact(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, flashes) = take_flashes(jar);
    (
        jar,
        ContactPage {
            site_title: state.config.site_title.clone(),
            flashes,
        },
    )
}

#[derive(Deserialize)]
struct ContactForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

async fn send_message(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ContactForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let name = form.name.trim();
    let message = form.message.trim();
    if name.is_empty() || message.is_empty() {
        return Ok(flash_redirect(
            jar,
            Flash::warning("All fields are required."),
            "/contact",
        ));
    }
    let email = match EmailAddress::new(&form.email) {
        Ok(email) => email,
        Err(_) => {
            return Ok(flash_redirect(
                jar,
                Flash::warning("Enter a valid email."),
                "/contact",
            ));
        }
    };

    db::messages::insert(&state.pool, name, email.as_str(), message, Utc::now()).await?;
    tracing::info!("contact message received");

    Ok(flash_redirect(
        jar,
        Flash::success("Message sent. I read every one."),
        "/contact",
    ))
}
