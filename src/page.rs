//! Page boilerplate: document head and tail, stylesheet and script includes

use crate::builder::MarkupBuilder;
use crate::FileList;

/// What kind of file an include tag references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncludeKind {
    Css,
    Js,
}

impl IncludeKind {
    fn tag(self, file: &str) -> String {
        match self {
            IncludeKind::Css => format!("<link rel=\"stylesheet\" href=\"{file}\" />\n"),
            IncludeKind::Js => {
                format!("<script type=\"text/javascript\" src=\"{file}\"></script>\n")
            }
        }
    }
}

/// One include tag per file, in list order. `None` yields an empty string.
///
/// Files are neither de-duplicated nor checked for existence.
pub fn include_files(kind: IncludeKind, files: Option<&FileList>) -> String {
    files
        .map(|list| list.iter().map(|f| kind.tag(f)).collect())
        .unwrap_or_default()
}

impl MarkupBuilder {
    /// Doctype, `<html>`, the complete `<head>` and the opening `<body>` tag.
    pub fn site_top(&self, title: &str) -> String {
        let cfg = self.config();
        let mut out = String::from("<!DOCTYPE html>\n");
        out.push_str(&format!("<html lang=\"{}\">\n", cfg.language));
        out.push_str("<head>\n");
        out.push_str(&format!("<meta charset=\"{}\" />\n", cfg.charset));
        out.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\" />\n",
            cfg.keywords
        ));
        out.push_str(&include_files(IncludeKind::Css, cfg.css_files.as_ref()));
        out.push_str(&format!("<title>{title}</title>\n"));
        out.push_str(&include_files(IncludeKind::Js, cfg.js_files.as_ref()));
        out.push_str("</head>\n\n");
        out.push_str("<body>\n");
        out
    }

    /// Closes what [`site_top`](Self::site_top) opened.
    pub fn site_bottom(&self) -> String {
        "</body>\n</html>\n".to_string()
    }
}
