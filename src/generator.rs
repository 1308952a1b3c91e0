use crate::attrs::{self, AttrValue, AttributeMap};
use crate::config::EmailConfig;
use crate::doctype;
use crate::error::EmailResult;
use crate::mode::{ModeFallback, RenderMode, RenderModeDetector};
use crate::tag::{HtmlTagBuilder, TagBuilder};
use crate::url::{BaseUrlResolver, UrlResolver};

/// Viewport content used when callers pass nothing.
pub const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1.0";

/// Renders email-safe HTML or plain-text markup depending on whether the
/// file being rendered lives under `email/html/` or `email/text/`.
///
/// One generator serves one render pass; the hosting view pipeline calls
/// [`on_before_render_file`] before each template file and the template
/// then calls the tag operations. Concurrent renders each get their own
/// instance — there is no shared state between generators.
///
/// [`on_before_render_file`]: EmailMarkup::on_before_render_file
pub struct EmailMarkup {
    config: EmailConfig,
    detector: RenderModeDetector,
    tags: Box<dyn TagBuilder>,
    resolver: Box<dyn UrlResolver>,
}

impl EmailMarkup {
    pub fn new(config: EmailConfig, resolver: Box<dyn UrlResolver>) -> Self {
        EmailMarkup {
            config,
            detector: RenderModeDetector::default(),
            tags: Box::new(HtmlTagBuilder),
            resolver,
        }
    }

    /// Default configuration with URLs resolved against `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(EmailConfig::default(), Box::new(BaseUrlResolver::new(base_url)))
    }

    /// Replace the policy applied when a rendered path carries no
    /// `email/text/` or `email/html/` segment.
    pub fn with_mode_fallback(mut self, fallback: ModeFallback) -> Self {
        self.detector = RenderModeDetector::new(fallback);
        self
    }

    /// Swap in a different tag builder.
    pub fn with_tag_builder(mut self, tags: Box<dyn TagBuilder>) -> Self {
        self.tags = tags;
        self
    }

    /// Inbound hook from the view pipeline: `path` is the template file
    /// about to render.
    pub fn on_before_render_file(&mut self, path: &str) {
        self.detector.on_before_render_file(path);
    }

    /// The mode of the current render pass.
    pub fn mode(&self) -> EmailResult<RenderMode> {
        self.detector.mode()
    }

    /// The line-break token for the current mode (`<br>` or a newline,
    /// unless overridden in the templates).
    pub fn eol(&self) -> EmailResult<&str> {
        Ok(match self.mode()? {
            RenderMode::Text => &self.config.templates.eoltext,
            RenderMode::Html => &self.config.templates.eolhtml,
        })
    }

    /// The registered doctype literal for `key`, or `None` when unknown.
    pub fn doc_type(&self, key: &str) -> Option<&'static str> {
        doctype::doc_type(key)
    }

    /// The default doctype (XHTML 1.0 Strict).
    pub fn default_doc_type(&self) -> &'static str {
        // The default key is always registered.
        doctype::doc_type(doctype::DEFAULT_DOC_TYPE).unwrap_or_default()
    }

    /// An `<img>` tag in HTML mode; images are suppressed entirely in
    /// text mode (empty string).
    pub fn image(&self, path: &str, options: &AttributeMap) -> EmailResult<String> {
        if self.mode()? == RenderMode::Text {
            return Ok(String::new());
        }
        let merged = attrs::merge(options, &self.config.attributes.image)?;
        let mut all = AttributeMap::new();
        all.set("src", self.resolver.resolve(path));
        for (name, value) in merged.iter() {
            all.set(name, value.clone());
        }
        if !all.contains("alt") {
            all.set("alt", "");
        }
        Ok(self.tags.build_tag("img", &all, None))
    }

    /// A link. HTML mode renders an `<a>` tag with `target="_blank"`
    /// unless overridden; text mode renders through the `link` template
    /// (default `{{title}}: {{url}}`), or just the title when the URL
    /// resolves empty.
    pub fn link(&self, title: &str, url: &str, options: &AttributeMap) -> EmailResult<String> {
        let url = self.resolver.resolve(url);

        if self.mode()? == RenderMode::Html {
            let merged = attrs::merge(options, &self.config.attributes.link)?;
            let mut all = AttributeMap::new();
            all.set("href", url);
            for (name, value) in merged.iter() {
                all.set(name, value.clone());
            }
            return Ok(self.tags.build_tag("a", &all, Some(title)));
        }

        if url.is_empty() {
            return Ok(title.to_string());
        }
        self.config
            .templates
            .format("link", &[("title", title), ("url", &url)])
    }

    /// An `<audio>`/`<video>` tag in HTML mode, chosen by file extension;
    /// empty string in text mode.
    pub fn media(&self, path: &str, options: &AttributeMap) -> EmailResult<String> {
        if self.mode()? == RenderMode::Text {
            return Ok(String::new());
        }
        let merged = attrs::merge(options, &self.config.attributes.media)?;
        let mut all = AttributeMap::new();
        all.set("src", self.resolver.resolve(path));
        for (name, value) in merged.iter() {
            all.set(name, value.clone());
        }
        Ok(self.tags.build_tag(media_element(path), &all, Some("")))
    }

    /// A paragraph. Text mode separates `text` with a blank line on each
    /// side; HTML mode renders a `<p>` with margin resets merged in.
    pub fn para(
        &self,
        class: Option<&str>,
        text: &str,
        options: &AttributeMap,
    ) -> EmailResult<String> {
        if self.mode()? == RenderMode::Text {
            let eol = &self.config.templates.eoltext;
            return Ok(format!("{eol}{eol}{text}{eol}{eol}"));
        }

        let mut caller = options.clone();
        if let Some(class) = class {
            if !class.is_empty() && !caller.contains("class") {
                caller.set("class", class);
            }
        }
        let merged = attrs::merge(&caller, &self.config.attributes.para)?;
        Ok(self.tags.build_tag("p", &merged, Some(text)))
    }

    /// A table. Text mode passes `content` through unchanged (flattened
    /// upstream). HTML mode renders the full `table` template, or only
    /// the opening tag when `content` is `None` (deferred content); pair
    /// with [`table_end`].
    ///
    /// [`table_end`]: EmailMarkup::table_end
    pub fn table(&self, content: Option<&str>, options: &AttributeMap) -> EmailResult<String> {
        if self.mode()? == RenderMode::Text {
            return Ok(content.unwrap_or("").to_string());
        }

        let merged = attrs::merge(options, &self.config.attributes.table)?;
        let formatted = self.tags.format_attributes(&merged);
        match content {
            None => self
                .config
                .templates
                .format("tablestart", &[("attrs", &formatted)]),
            Some(content) => self
                .config
                .templates
                .format("table", &[("attrs", &formatted), ("content", content)]),
        }
    }

    /// The closing table tag for a table opened with deferred content.
    /// Text mode renders nothing.
    pub fn table_end(&self) -> EmailResult<String> {
        if self.mode()? == RenderMode::Text {
            return Ok(String::new());
        }
        Ok(self.config.templates.tableend.clone())
    }

    /// A `<meta name="viewport">` tag. An empty list falls back to
    /// [`DEFAULT_VIEWPORT`]; multiple entries join with `", "`. Emitted
    /// regardless of mode.
    pub fn viewport<S: AsRef<str>>(&self, content: &[S]) -> String {
        let content = if content.is_empty() {
            DEFAULT_VIEWPORT.to_string()
        } else {
            content
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut attrs = AttributeMap::new();
        attrs.set("name", "viewport");
        attrs.set("content", AttrValue::Text(content));
        self.tags.build_tag("meta", &attrs, None)
    }
}

/// Pick the element name for a media path by extension.
fn media_element(path: &str) -> &'static str {
    let ext = path
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "mp3" | "wav" | "ogg" | "m4a" | "aac" | "flac" => "audio",
        _ => "video",
    }
}
