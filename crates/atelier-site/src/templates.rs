//! # Page Templates
//!
//! Askama template structs, one per rendered page. All pages extend
//! `base.html`, so every struct carries the configured site title and the
//! flash messages drained from the request's cookie jar.

use askama::Template;
use atelier_core::GalleryTag;

use crate::flash::Flash;
use crate::state::{MessageRecord, PhotoRecord, PostRecord, SubscriberRecord};

/// Home page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
}

/// Contact page with the message form.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
}

/// Blog index, newest first.
#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
    pub posts: Vec<PostRecord>,
}

/// A single post.
#[derive(Template)]
#[template(path = "post_detail.html")]
pub struct PostDetailPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
    pub post: PostRecord,
}

/// The photo gallery, newest first.
#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
    pub photos: Vec<PhotoRecord>,
}

/// Search results across posts and photos.
#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
    pub query: String,
    pub post_results: Vec<PostRecord>,
    pub photo_results: Vec<PhotoRecord>,
}

/// Admin login form.
#[derive(Template)]
#[template(path = "admin_login.html")]
pub struct AdminLoginPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
}

/// The admin panel: everything on one page, like the site it manages.
#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminPage {
    pub site_title: String,
    pub flashes: Vec<Flash>,
    pub posts: Vec<PostRecord>,
    pub subscribers: Vec<SubscriberRecord>,
    pub photos: Vec<PhotoRecord>,
    pub messages: Vec<MessageRecord>,
    /// Tag options for the upload and re-tag selects.
    pub tags: Vec<GalleryTag>,
}
