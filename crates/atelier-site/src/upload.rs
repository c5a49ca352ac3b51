//! # Image Uploads
//!
//! Extension allowlisting, filename sanitization, and best-effort file
//! removal for post images and gallery photos. There is no resource
//! lifecycle beyond "save a file, record its path" — deletes tolerate
//! files that are already gone.

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Image extensions the site accepts.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Whether a submitted filename carries an allowed image extension.
/// A name without a dot has no extension and is rejected.
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

/// Sanitize a client-supplied filename for storage on disk.
///
/// Keeps ASCII alphanumerics, `.`, `-`, and `_`; everything else becomes
/// `_`. Leading dots are stripped so the result can never be a dotfile or
/// a traversal component.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

/// Produce a unique on-disk name: uuid hex prefix + sanitized original.
pub fn unique_name(original: &str) -> String {
    format!("{}_{}", Uuid::new_v4().simple(), sanitize_filename(original))
}

/// Write uploaded bytes under `dir`, returning the full path.
pub async fn save(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let path = dir.join(name);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}

/// Best-effort removal of a stored image by its public path.
///
/// A missing file is not an error (the row may outlive the file); other
/// I/O failures are logged and swallowed, matching delete semantics —
/// the database row is the source of truth.
pub async fn remove_quietly(config: &crate::config::AppConfig, public_path: &str) {
    let Some(fs_path) = config.resolve_static(public_path) else {
        tracing::warn!(path = %public_path, "stored image path is not under /static — skipping removal");
        return;
    };
    match tokio::fs::remove_file(&fs_path).await {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %fs_path.display(), error = %e, "failed to remove image file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_the_five_image_extensions() {
        for name in ["a.png", "b.jpg", "c.JPEG", "d.gif", "e.WebP"] {
            assert!(allowed_file(name), "{name} should be allowed");
        }
    }

    #[test]
    fn rejects_other_extensions_and_dotless_names() {
        for name in ["script.exe", "page.html", "noext", ".png", "archive.tar.gz"] {
            assert!(!allowed_file(name), "{name} should be rejected");
        }
    }

    #[test]
    fn sanitize_replaces_hostile_characters() {
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo__1_.jpg");
        assert_eq!(sanitize_filename("../../etc/passwd"), "_.._etc_passwd");
        assert_eq!(sanitize_filename(".hidden.png"), "hidden.png");
    }

    #[test]
    fn sanitize_keeps_safe_names() {
        assert_eq!(sanitize_filename("dune-walk_04.jpeg"), "dune-walk_04.jpeg");
    }

    #[test]
    fn unique_names_differ_and_keep_the_original() {
        let a = unique_name("dune.jpg");
        let b = unique_name("dune.jpg");
        assert_ne!(a, b);
        assert!(a.ends_with("_dune.jpg"));
        // 32 hex chars + separator + original.
        assert_eq!(a.len(), 32 + 1 + "dune.jpg".len());
    }

    #[tokio::test]
    async fn save_writes_the_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = save(dir.path(), "x.png", b"not-really-a-png").await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"not-really-a-png");
    }

    #[tokio::test]
    async fn remove_quietly_tolerates_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = crate::config::test_config(dir.path(), "sqlite::memory:");
        // No panic, no error surfaced.
        remove_quietly(&config, "/static/uploads/never-existed.jpg").await;
        remove_quietly(&config, "/outside/static.jpg").await;
    }

    #[tokio::test]
    async fn remove_quietly_deletes_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        tokio::fs::create_dir_all(&uploads).await.unwrap();
        let path = save(&uploads, "x.png", b"bytes").await.unwrap();

        let config = crate::config::test_config(dir.path(), "sqlite::memory:");
        remove_quietly(&config, "/static/uploads/x.png").await;
        assert!(!path.exists());
    }
}
