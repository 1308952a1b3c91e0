//! # emailml — email-safe HTML and plain-text markup generation
//!
//! Renders email bodies from a single template tree: files under
//! `email/html/` get HTML tags with email-client-safe defaults merged in
//! (inline style resets, `target="_blank"`, table reset attributes),
//! files under `email/text/` get plain-text equivalents.
//!
//! ## Features
//! - Per-attribute merge policies: replace, class-token union, style-declaration union
//! - Render-mode detection from the path of the file being rendered
//! - Doctype registry, viewport meta, text fallbacks for link/para/table
//! - YAML-configurable default attributes and templates
//!
//! ## Example
//! ```ignore
//! use emailml::EmailMarkup;
//!
//! let mut email = EmailMarkup::with_base_url("https://example.com");
//! email.on_before_render_file("templates/email/html/welcome.tpl");
//!
//! let link = email.link("Open your order", "/orders/42", &Default::default())?;
//! // <a href="https://example.com/orders/42" target="_blank">Open your order</a>
//! ```

pub mod attrs;
pub mod config;
pub mod doctype;
pub mod error;
pub mod generator;
pub mod mode;
pub mod tag;
pub mod template;
pub mod url;

// --- Core types ---
pub use attrs::{merge, AttrValue, AttributeMap, MergePolicy};
pub use config::{ConfigOverrides, EmailConfig, TagAttributes};
pub use error::{EmailError, EmailResult};
pub use generator::{EmailMarkup, DEFAULT_VIEWPORT};
pub use mode::{ModeFallback, RenderMode, RenderModeDetector};
pub use tag::{HtmlTagBuilder, TagBuilder};
pub use template::Templates;
pub use url::{BaseUrlResolver, UrlResolver};

/// Look up a doctype literal by key (e.g. `"html5"`, `"xhtml-strict"`).
pub fn doc_type(key: &str) -> Option<&'static str> {
    doctype::doc_type(key)
}
