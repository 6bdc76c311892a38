//! JSON-described pages
//!
//! A [`Document`] is a title, an optional message and a list of [`Block`]s.
//! Rendering it wraps the blocks in [`site_top`](MarkupBuilder::site_top)
//! and [`site_bottom`](MarkupBuilder::site_bottom).
//!
//! ```
//! use markupkit::{Document, MarkupBuilder};
//!
//! let doc = Document::from_json_str(r#"{
//!     "title": "Report",
//!     "blocks": [
//!         {"kind": "heading", "level": 1, "text": "Report", "attrs": {"id": "top"}},
//!         {"kind": "table", "rows": [["a", "b"], ["c", "d"]]}
//!     ]
//! }"#).unwrap();
//!
//! let html = doc.render(&mut MarkupBuilder::new()).unwrap();
//! assert!(html.contains("<h1 id=\"top\">Report</h1>"));
//! ```

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::attributes::Attributes;
use crate::builder::MarkupBuilder;
use crate::error::{Error, Result};
use crate::BuilderConfigPatch;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    /// Settings layered over the builder's configuration
    #[serde(default)]
    pub config: Option<BuilderConfigPatch>,
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One fragment of a document body
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Link {
        url: String,
        caption: String,
        #[serde(default)]
        attrs: Option<Attributes>,
    },
    Image {
        src: String,
        #[serde(default)]
        attrs: Option<Attributes>,
    },
    Heading {
        level: u8,
        text: String,
        #[serde(default)]
        attrs: Option<Attributes>,
    },
    Paragraph {
        text: String,
        #[serde(default)]
        attrs: Option<Attributes>,
    },
    Preformatted {
        text: String,
        #[serde(default)]
        attrs: Option<Attributes>,
    },
    Div {
        text: String,
        #[serde(default)]
        attrs: Option<Attributes>,
    },
    Span {
        text: String,
        #[serde(default)]
        attrs: Option<Attributes>,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
    /// The document message, if any, via [`MarkupBuilder::show_message`]
    Message {
        #[serde(default)]
        attrs: Option<Attributes>,
    },
}

impl Block {
    pub fn render(&self, b: &MarkupBuilder) -> String {
        match self {
            Block::Link { url, caption, attrs } => b.link(url, caption, attrs.as_ref()),
            Block::Image { src, attrs } => b.image(src, attrs.as_ref()),
            Block::Heading { level, text, attrs } => b.heading(*level, text, attrs.as_ref()),
            Block::Paragraph { text, attrs } => b.paragraph(text, attrs.as_ref()),
            Block::Preformatted { text, attrs } => b.preformatted(text, attrs.as_ref()),
            Block::Div { text, attrs } => b.div(text, attrs.as_ref()),
            Block::Span { text, attrs } => b.span(text, attrs.as_ref()),
            Block::Table { rows } => b.table(rows),
            Block::Message { attrs } => b.show_message(attrs.as_ref()),
        }
    }
}

impl Document {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(s)?;
        if let Some(patch) = &doc.config {
            patch.validate()?;
        }
        Ok(doc)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading document from {}", path.display());
        let data = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Render the whole page.
    ///
    /// `config` is merged into the builder's configuration field by field and
    /// `message` replaces the stored message before anything is written.
    pub fn render(&self, builder: &mut MarkupBuilder) -> Result<String> {
        if let Some(patch) = &self.config {
            let mut cfg = builder.config().clone();
            cfg.apply(patch)?;
            builder.set_config(cfg);
        }
        if let Some(msg) = &self.message {
            builder.set_message(msg.clone());
        }
        debug!("rendering {} blocks for {:?}", self.blocks.len(), self.title);

        let mut out = builder.site_top(&self.title);
        for block in &self.blocks {
            out.push_str(&block.render(builder));
        }
        out.push_str(&builder.site_bottom());
        Ok(out)
    }
}
