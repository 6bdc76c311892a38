//! The markup builder: fragment creation and message display
//!
//! Fragments are returned as strings ending in a newline (tables excepted).
//! Attributes given to a call go through [`filter_attributes`] for that
//! call's [`ElementKind`] and are spliced directly after the fixed part of the
//! opening tag. Content is inserted as-is.

use std::fmt::{self, Display};
use std::path::Path;

use crate::attributes::{filter_attributes, Attributes, ElementKind};
use crate::probe::{FileProbe, FsProbe};
use crate::{BuilderConfig, FileList};

const MESSAGE_ID: &str = "msg";
const CLOSE_CLASS: &str = "close_icon";
const CLOSE_TITLE: &str = "Close this message";
const CLOSE_TEXT: &str = "Close";

/// Stateful HTML fragment builder
///
/// Holds page-level configuration and a message. One instance per page or
/// request; nothing is shared between instances.
pub struct MarkupBuilder {
    config: BuilderConfig,
    message: String,
    probe: Box<dyn FileProbe>,
}

impl fmt::Debug for MarkupBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkupBuilder")
            .field("config", &self.config)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Default for MarkupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        MarkupBuilder {
            config,
            message: String::new(),
            probe: Box::new(FsProbe),
        }
    }

    /// Replace the file-existence probe used by [`show_message`](Self::show_message)
    pub fn with_probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BuilderConfig) {
        self.config = config;
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.config.language = language.into();
    }

    pub fn set_charset(&mut self, charset: impl Into<String>) {
        self.config.charset = charset.into();
    }

    /// Keywords are a single comma separated string
    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.config.keywords = keywords.into();
    }

    pub fn set_css(&mut self, files: impl Into<FileList>) {
        self.config.css_files = Some(files.into());
    }

    pub fn clear_css(&mut self) {
        self.config.css_files = None;
    }

    pub fn set_js(&mut self, files: impl Into<FileList>) {
        self.config.js_files = Some(files.into());
    }

    pub fn clear_js(&mut self) {
        self.config.js_files = None;
    }

    pub fn set_close_icon(&mut self, path: impl AsRef<Path>) {
        self.config.close_icon = path.as_ref().to_path_buf();
    }

    pub fn link(&self, url: &str, caption: &str, attrs: Option<&Attributes>) -> String {
        format!(
            "<a href=\"{}\"{}>{}</a>\n",
            url,
            filter_attributes(ElementKind::Anchor, attrs),
            caption
        )
    }

    pub fn image(&self, src: &str, attrs: Option<&Attributes>) -> String {
        format!(
            "<img src=\"{}\"{} />\n",
            src,
            filter_attributes(ElementKind::Image, attrs)
        )
    }

    /// `<h1>` through `<h6>`. The level is not checked; `7` gives `<h7>`.
    pub fn heading(&self, level: u8, text: &str, attrs: Option<&Attributes>) -> String {
        format!(
            "<h{level}{}>{text}</h{level}>\n",
            filter_attributes(ElementKind::Heading, attrs)
        )
    }

    pub fn paragraph(&self, text: &str, attrs: Option<&Attributes>) -> String {
        format!(
            "<p{}>{}</p>\n",
            filter_attributes(ElementKind::Paragraph, attrs),
            text
        )
    }

    pub fn preformatted(&self, text: &str, attrs: Option<&Attributes>) -> String {
        format!(
            "<pre{}>{}</pre>\n",
            filter_attributes(ElementKind::Preformatted, attrs),
            text
        )
    }

    pub fn div(&self, text: &str, attrs: Option<&Attributes>) -> String {
        format!(
            "<div{}>\n{}</div>\n",
            filter_attributes(ElementKind::Div, attrs),
            text
        )
    }

    pub fn span(&self, text: &str, attrs: Option<&Attributes>) -> String {
        format!(
            "<span{}>{}</span>\n",
            filter_attributes(ElementKind::Span, attrs),
            text
        )
    }

    /// Table with rows striped `odd`, `even`, `odd`, ... starting at the first row.
    pub fn table<R, C>(&self, rows: R) -> String
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Display,
    {
        let mut out = String::from("<table>");
        for (i, row) in rows.into_iter().enumerate() {
            let class = if i % 2 == 0 { "odd" } else { "even" };
            out.push_str(&format!("<tr class=\"{class}\">"));
            for cell in row {
                out.push_str(&format!("<td>{cell}</td>"));
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
        out
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the stored message in a dismissable container.
    ///
    /// An `icon` entry in `attrs` is read as a path, not as an attribute. When
    /// that file exists it is shown before the message as an image carrying
    /// `attrs`. Otherwise `attrs` fall through to the close icon image, if the
    /// configured close icon exists. The close control is a link with fixed
    /// attributes that hides the container.
    pub fn show_message(&self, attrs: Option<&Attributes>) -> String {
        if self.message.is_empty() {
            return String::new();
        }

        let mut pending = attrs;
        let mut out = format!("<div id=\"{MESSAGE_ID}\" class=\"message\">\n");

        if let Some(icon) = pending.and_then(|a| a.get("icon")) {
            if self.probe.exists(Path::new(icon)) {
                out.push_str(&self.image(icon, pending.take()));
            }
        }

        out.push_str(&self.message);
        out.push('\n');

        let close = &self.config.close_icon;
        let text = if self.probe.exists(close) {
            self.image(&close.to_string_lossy(), pending.take())
        } else {
            CLOSE_TEXT.to_string()
        };

        let close_attrs = Attributes::class(CLOSE_CLASS)
            .with("title", CLOSE_TITLE)
            .with(
                "onclick",
                format!("document.getElementById('{MESSAGE_ID}').style.display='none'; return false;"),
            );
        out.push_str(&self.link("#", &text, Some(&close_attrs)));
        out.push_str("</div>\n");
        out
    }
}
