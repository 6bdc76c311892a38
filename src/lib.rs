//! markupkit
//!
//! A small HTML fragment builder. It assembles page boilerplate (doctype,
//! head, meta, stylesheet and script includes) and individual fragments
//! (links, images, headings, tables, paragraphs) as plain strings.
//!
//! # Features
//!
//! - **Whitelisted attributes**: every fragment accepts an optional
//!   [`Attributes`] bag, filtered per element kind before it is written
//! - **No hidden state**: attributes are passed to the call they apply to
//! - **Verbatim output**: values and content are not escaped
//!
//! # Example
//!
//! ```
//! use markupkit::{Attributes, MarkupBuilder};
//!
//! let mut html = MarkupBuilder::new();
//! html.set_css(["site.css"]);
//!
//! let mut page = html.site_top("Hello");
//! let attrs = Attributes::class("nav").with("target", "_blank").with("bogus", "x");
//! page.push_str(&html.link("/about", "About", Some(&attrs)));
//! page.push_str(&html.site_bottom());
//!
//! assert!(page.contains(r#"<a href="/about" class="nav" target="_blank">About</a>"#));
//! assert!(!page.contains("bogus"));
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

pub mod error;
pub use error::{Error, Result};

pub mod attributes;
pub use attributes::{filter_attributes, Attributes, ElementKind};

pub mod builder;
pub use builder::MarkupBuilder;

pub mod page;
pub use page::{include_files, IncludeKind};

pub mod probe;
pub use probe::{FileProbe, FsProbe, StaticProbe};

// JSON-described pages rendered through the builder
pub mod document;
pub use document::{Block, Document};

/// Default location of the image used for the message close control
pub const DEFAULT_CLOSE_ICON: &str = "icons/close_message.png";

/// Configuration for a [`MarkupBuilder`]
///
/// Every field has a default, so a JSON config only needs the keys it
/// changes:
///
/// ```
/// let cfg = markupkit::BuilderConfig::from_json_str(r#"{"language": "fi"}"#).unwrap();
/// assert_eq!(cfg.language, "fi");
/// assert_eq!(cfg.charset, "utf-8");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Value of `<html lang="...">`
    pub language: String,
    /// Value of `<meta charset="...">`
    pub charset: String,
    /// Comma separated keywords for the keywords meta tag
    pub keywords: String,
    /// Stylesheets linked from the head
    pub css_files: Option<FileList>,
    /// Scripts included in the head
    pub js_files: Option<FileList>,
    /// Image used for the message close control when it exists
    pub close_icon: PathBuf,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            charset: "utf-8".to_string(),
            keywords: String::new(),
            css_files: None,
            js_files: None,
            close_icon: PathBuf::from(DEFAULT_CLOSE_ICON),
        }
    }
}

impl BuilderConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a config from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading builder config from {}", path.display());
        let data = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data).map_err(|err| match err {
            Error::ConfigError(msg) => Error::ConfigError(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Defaults, then the file at `path` if any, then `overrides`.
    pub fn layered(path: Option<&Path>, overrides: &BuilderConfigPatch) -> Result<Self> {
        let mut cfg = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        cfg.apply(overrides)?;
        Ok(cfg)
    }

    /// Overwrite the fields `patch` sets, leaving the rest alone
    pub fn apply(&mut self, patch: &BuilderConfigPatch) -> Result<()> {
        patch.validate()?;
        if let Some(language) = &patch.language {
            self.language = language.clone();
        }
        if let Some(charset) = &patch.charset {
            self.charset = charset.clone();
        }
        if let Some(keywords) = &patch.keywords {
            self.keywords = keywords.clone();
        }
        if let Some(css) = &patch.css_files {
            self.css_files = Some(css.clone());
        }
        if let Some(js) = &patch.js_files {
            self.js_files = Some(js.clone());
        }
        if let Some(icon) = &patch.close_icon {
            self.close_icon = icon.clone();
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        check_charset(&self.charset)
    }
}

fn check_charset(charset: &str) -> Result<()> {
    if charset.trim().is_empty() {
        return Err(Error::ConfigError("charset must not be empty".to_string()));
    }
    Ok(())
}

/// Partial configuration layered over a [`BuilderConfig`]
///
/// Used for settings embedded in a [`Document`] and for command-line flags.
/// Unset fields keep whatever the base config holds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuilderConfigPatch {
    pub language: Option<String>,
    pub charset: Option<String>,
    pub keywords: Option<String>,
    pub css_files: Option<FileList>,
    pub js_files: Option<FileList>,
    pub close_icon: Option<PathBuf>,
}

impl BuilderConfigPatch {
    pub fn validate(&self) -> Result<()> {
        match &self.charset {
            Some(charset) => check_charset(charset),
            None => Ok(()),
        }
    }
}

/// One file or a list of files to include
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FileList {
    One(String),
    Many(Vec<String>),
}

impl FileList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let files: &[String] = match self {
            FileList::One(f) => std::slice::from_ref(f),
            FileList::Many(fs) => fs,
        };
        files.iter().map(String::as_str)
    }
}

impl From<&str> for FileList {
    fn from(s: &str) -> Self {
        FileList::One(s.to_string())
    }
}

impl From<String> for FileList {
    fn from(s: String) -> Self {
        FileList::One(s)
    }
}

impl From<Vec<String>> for FileList {
    fn from(v: Vec<String>) -> Self {
        FileList::Many(v)
    }
}

impl From<&[&str]> for FileList {
    fn from(v: &[&str]) -> Self {
        FileList::Many(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FileList {
    fn from(v: [&str; N]) -> Self {
        FileList::Many(v.iter().map(|s| s.to_string()).collect())
    }
}
