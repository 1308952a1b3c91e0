use regex::Regex;

use crate::error::{EmailError, EmailResult};

/// Whether the current output target is a plain-text or HTML email body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Text,
    Html,
}

/// Policy for paths that carry neither `email/text/` nor `email/html/`.
///
/// The default fails fast; the other two variants pick a fixed mode for
/// pipelines that render files from outside the email tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeFallback {
    #[default]
    Error,
    Html,
    Text,
}

/// Derives the render mode from the path of the file about to render.
///
/// The hosting view pipeline calls [`on_before_render_file`] once per
/// template file; every markup operation then reads [`mode`].
///
/// [`on_before_render_file`]: RenderModeDetector::on_before_render_file
/// [`mode`]: RenderModeDetector::mode
#[derive(Debug)]
pub struct RenderModeDetector {
    pattern: Regex,
    fallback: ModeFallback,
    current: Option<RenderMode>,
    last_path: Option<String>,
}

impl RenderModeDetector {
    pub fn new(fallback: ModeFallback) -> Self {
        RenderModeDetector {
            pattern: Regex::new(r"email/(text|html)/").expect("mode pattern is valid"),
            fallback,
            current: None,
            last_path: None,
        }
    }

    /// Re-derive the mode for `path`. A path without the expected segment
    /// clears the current mode so a previous file's mode never leaks into
    /// the next render.
    pub fn on_before_render_file(&mut self, path: &str) {
        self.current = self
            .pattern
            .captures(path)
            .and_then(|c| c.get(1))
            .map(|m| match m.as_str() {
                "text" => RenderMode::Text,
                _ => RenderMode::Html,
            });
        self.last_path = Some(path.to_string());
    }

    /// The mode for the current render pass, applying the configured
    /// fallback when no path segment matched.
    pub fn mode(&self) -> EmailResult<RenderMode> {
        if let Some(mode) = self.current {
            return Ok(mode);
        }
        match self.fallback {
            ModeFallback::Html => Ok(RenderMode::Html),
            ModeFallback::Text => Ok(RenderMode::Text),
            ModeFallback::Error => Err(EmailError::ModeNotDetermined {
                path: self.last_path.clone().unwrap_or_default(),
            }),
        }
    }
}

impl Default for RenderModeDetector {
    fn default() -> Self {
        Self::new(ModeFallback::default())
    }
}
