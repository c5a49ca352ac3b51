//! # Flash Messages
//!
//! One-shot notices shown on the next page render ("Post published.",
//! "That email is already subscribed."). Carried in a cookie rather than
//! server state so anonymous visitors — subscribing, sending a contact
//! message — get feedback without a session.
//!
//! The cookie value is the hex-encoded JSON list of pending flashes.
//! Hex keeps the value inside the cookie charset without another
//! dependency. A page render drains the cookie; a redirect appends to it.

use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "atelier_flash";

/// Severity of a flash message. `as_str` doubles as the CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl FlashLevel {
    /// Return the CSS class for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A single pending notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    /// A neutral informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }

    /// A warning about rejected input.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Warning,
            message: message.into(),
        }
    }

    /// A failure notice (wrong password).
    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}

fn encode(flashes: &[Flash]) -> String {
    // Serializing a Vec of plain structs cannot fail.
    let json = serde_json::to_vec(flashes).unwrap_or_default();
    hex_encode(&json)
}

fn decode(value: &str) -> Vec<Flash> {
    let Some(bytes) = hex_decode(value) else {
        tracing::debug!("flash cookie held invalid hex — dropping");
        return Vec::new();
    };
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "flash cookie held invalid JSON — dropping");
        Vec::new()
    })
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Drain pending flashes: returns the jar with the cookie cleared and the
/// messages to render.
pub fn take_flashes(jar: CookieJar) -> (CookieJar, Vec<Flash>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let flashes = decode(cookie.value());
            let removal = Cookie::build((FLASH_COOKIE, "")).path("/").build();
            (jar.remove(removal), flashes)
        }
        None => (jar, Vec::new()),
    }
}

/// Append a flash to the pending list in the jar.
pub fn push_flash(jar: CookieJar, flash: Flash) -> CookieJar {
    let mut pending = jar
        .get(FLASH_COOKIE)
        .map(|c| decode(c.value()))
        .unwrap_or_default();
    pending.push(flash);
    jar.add(flash_cookie(encode(&pending)))
}

/// Flash-and-redirect, the tail of every form handler.
pub fn flash_redirect(jar: CookieJar, flash: Flash, to: &str) -> (CookieJar, Redirect) {
    (push_flash(jar, flash), Redirect::to(to))
}
