//! # Application Configuration
//!
//! Environment-driven configuration assembled once at startup. The only
//! required variable is `ADMIN_PASSWORD` — the site refuses to start
//! without it rather than falling back to a guessable default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Default HTTP port.
const DEFAULT_PORT: u16 = 8080;
/// Default admin session lifetime: 8 hours.
const DEFAULT_SESSION_TTL_SECS: u64 = 28_800;
/// Default multipart body cap: 20 MiB.
const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 20 * 1024 * 1024;

/// Configuration errors surfaced during startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `ADMIN_PASSWORD` is not set. There is no default.
    #[error("ADMIN_PASSWORD must be set")]
    MissingAdminPassword,

    /// An environment variable held a value that failed to parse.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue {
        /// The environment variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Application configuration.
///
/// Custom `Debug` redacts the admin password to prevent credential
/// leakage in logs.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// SQLite connection string (`sqlite:<path>`).
    pub database_url: String,
    /// The shared admin secret checked at `/admin/login`.
    pub admin_password: String,
    /// Directory served at `/static`; upload folders live beneath it.
    pub static_root: PathBuf,
    /// Site title injected into every page template.
    pub site_title: String,
    /// Admin session lifetime.
    pub session_ttl: Duration,
    /// Maximum accepted request body size (multipart uploads).
    pub upload_limit_bytes: usize,
}

impl AppConfig {
    /// Build configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_password =
            std::env::var("ADMIN_PASSWORD").map_err(|_| ConfigError::MissingAdminPassword)?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let session_ttl_secs = match std::env::var("SESSION_TTL_SECS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "SESSION_TTL_SECS",
                value: raw,
            })?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:atelier.db".to_string());
        let static_root = std::env::var("STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));
        let site_title =
            std::env::var("SITE_TITLE").unwrap_or_else(|_| "Alejandro Ines".to_string());

        Ok(Self {
            port,
            database_url,
            admin_password,
            static_root,
            site_title,
            session_ttl: Duration::from_secs(session_ttl_secs),
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
        })
    }

    /// Directory where post images are written.
    pub fn uploads_dir(&self) -> PathBuf {
        self.static_root.join("uploads")
    }

    /// Directory where gallery photos are written.
    pub fn gallery_dir(&self) -> PathBuf {
        self.static_root.join("gallery_uploads")
    }

    /// Resolve a stored public path (`/static/...`) to its on-disk location.
    ///
    /// Returns `None` for paths outside `/static/` or containing parent
    /// traversal — those never came from this application.
    pub fn resolve_static(&self, public_path: &str) -> Option<PathBuf> {
        let rest = public_path.strip_prefix("/static/")?;
        if rest.is_empty() || rest.split('/').any(|seg| seg == ".." || seg.is_empty()) {
            return None;
        }
        Some(rest.split('/').fold(self.static_root.clone(), |p, seg| p.join(seg)))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("admin_password", &"[REDACTED]")
            .field("static_root", &self.static_root)
            .field("site_title", &self.site_title)
            .field("session_ttl", &self.session_ttl)
            .field("upload_limit_bytes", &self.upload_limit_bytes)
            .finish()
    }
}

/// A configuration suitable for tests: temp paths, in-memory-ish defaults.
pub fn test_config(static_root: &Path, database_url: &str) -> AppConfig {
    AppConfig {
        port: 0,
        database_url: database_url.to_string(),
        admin_password: "correct-horse".to_string(),
        static_root: static_root.to_path_buf(),
        site_title: "Test Site".to_string(),
        session_ttl: Duration::from_secs(3600),
        upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_admin_password() {
        let config = test_config(Path::new("/tmp/static"), "sqlite::memory:");
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("correct-horse"));
    }

    #[test]
    fn upload_dirs_live_under_static_root() {
        let config = test_config(Path::new("/srv/site/static"), "sqlite::memory:");
        assert_eq!(
            config.uploads_dir(),
            PathBuf::from("/srv/site/static/uploads")
        );
        assert_eq!(
            config.gallery_dir(),
            PathBuf::from("/srv/site/static/gallery_uploads")
        );
    }

    #[test]
    fn resolve_static_maps_public_paths() {
        let config = test_config(Path::new("/srv/site/static"), "sqlite::memory:");
        assert_eq!(
            config.resolve_static("/static/uploads/abc_photo.jpg"),
            Some(PathBuf::from("/srv/site/static/uploads/abc_photo.jpg"))
        );
    }

    #[test]
    fn resolve_static_rejects_traversal_and_foreign_paths() {
        let config = test_config(Path::new("/srv/site/static"), "sqlite::memory:");
        assert_eq!(config.resolve_static("/static/../etc/passwd"), None);
        assert_eq!(config.resolve_static("/static/uploads/../../x"), None);
        assert_eq!(config.resolve_static("/etc/passwd"), None);
        assert_eq!(config.resolve_static("/static/"), None);
    }
}
