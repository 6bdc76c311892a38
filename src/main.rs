use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use markupkit::{BuilderConfig, BuilderConfigPatch, Document, FileList, MarkupBuilder};

#[derive(Debug, Parser)]
#[command(name = "markupkit", version, about = "Build HTML pages from fragments")]
struct Cli {
    /// JSON builder configuration
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a page skeleton, optionally wrapping a body file
    Page {
        #[arg(long)]
        title: String,
        #[arg(long)]
        lang: Option<String>,
        #[arg(long)]
        charset: Option<String>,
        #[arg(long)]
        keywords: Option<String>,
        /// Stylesheet to link (repeatable)
        #[arg(long = "css", value_name = "FILE")]
        css: Vec<String>,
        /// Script to include (repeatable)
        #[arg(long = "js", value_name = "FILE")]
        js: Vec<String>,
        /// File whose contents are placed inside <body>
        #[arg(long, value_name = "PATH")]
        body: Option<PathBuf>,
    },
    /// Render a JSON document
    Render {
        #[arg(value_name = "DOCUMENT")]
        document: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let html = match cli.command {
        Command::Page {
            title,
            lang,
            charset,
            keywords,
            css,
            js,
            body,
        } => {
            let flags = BuilderConfigPatch {
                language: lang,
                charset,
                keywords,
                css_files: (!css.is_empty()).then(|| FileList::from(css)),
                js_files: (!js.is_empty()).then(|| FileList::from(js)),
                close_icon: None,
            };
            let builder = load_builder(cli.config.as_deref(), &flags)?;
            let body = match body {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading body {}", path.display()))?,
                None => String::new(),
            };
            debug!("page {:?} with {} bytes of body", title, body.len());

            let mut out = builder.site_top(&title);
            out.push_str(&body);
            out.push_str(&builder.site_bottom());
            out
        }
        Command::Render { document } => {
            let mut builder = load_builder(cli.config.as_deref(), &BuilderConfigPatch::default())?;
            let doc = Document::from_json_file(&document)
                .with_context(|| format!("loading document {}", document.display()))?;
            doc.render(&mut builder)
                .with_context(|| format!("rendering {}", document.display()))?
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(html.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn load_builder(config: Option<&Path>, flags: &BuilderConfigPatch) -> Result<MarkupBuilder> {
    let cfg = BuilderConfig::layered(config, flags).with_context(|| match config {
        Some(path) => format!("loading config {}", path.display()),
        None => "applying command-line settings".to_string(),
    })?;
    Ok(MarkupBuilder::with_config(cfg))
}
