//! Glaze Site - Main Entry Point
//!
//! Usage:
//!   glaze-site [page.html] [--script steps.json] [--config site.json] [--dump]
//!
//! Loads a page (the bundled demo when none is given), mounts the
//! controller, replays an optional script and prints a JSON summary of the
//! resulting page state. `--dump` prints the final markup instead.

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use glaze_dom::{Document, ViewTree};
use glaze_html::{HtmlParser, HtmlSerializer};
use glaze_site::{LocalStorage, Script, Site, SiteConfig, StepOutcome, StorageManager};

const DEMO_PAGE: &str = include_str!("../assets/demo.html");

#[derive(Debug, Default)]
struct Args {
    page: Option<PathBuf>,
    script: Option<PathBuf>,
    config: Option<PathBuf>,
    dump: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--script" => parsed.script = Some(args.next().context("--script needs a path")?.into()),
                "--config" => parsed.config = Some(args.next().context("--config needs a path")?.into()),
                "--dump" => parsed.dump = true,
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                _ if parsed.page.is_none() => parsed.page = Some(PathBuf::from(&arg)),
                _ => bail!("unexpected argument {arg}"),
            }
        }
        Ok(parsed)
    }
}

/// Page state printed after a session
#[derive(Debug, Serialize)]
struct Report<'a> {
    url: &'a str,
    title: String,
    body_classes: Option<&'a str>,
    nav_expanded: Option<bool>,
    open_modals: usize,
    focused: Option<String>,
    local_storage: &'a LocalStorage,
    steps: Vec<StepOutcome>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SiteConfig::from_json(&json).context("Failed to load config")?
        }
        None => SiteConfig::default(),
    };

    let document = match &args.page {
        Some(path) => glaze_site::load_page(path, &config.origin)
            .with_context(|| format!("Failed to load page {}", path.display()))?,
        None => HtmlParser::new()
            .parse_with_url(DEMO_PAGE, &config.origin)
            .context("Failed to parse demo page")?,
    };
    tracing::info!(url = document.url(), title = %document.title(), "page loaded");

    let script = match &args.script {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            Script::from_json(&json).context("Failed to parse script")?
        }
        None => Script::default(),
    };

    let mut storage = StorageManager::new();
    let origin = config.origin_key();
    let year = chrono::Local::now().year();

    let mut site = Site::mount(document, storage.local_storage(&origin), config, year);
    let steps = script.run(&mut site).context("Failed to replay script")?;
    tracing::info!(steps = steps.len(), open_modals = site.modals().open_count(), "session finished");

    let stdout = if args.dump {
        let doc = site.view();
        HtmlSerializer::pretty().serialize_outer(doc.tree(), doc.tree().root())
    } else {
        let report = build_report(&site, steps);
        serde_json::to_string_pretty(&report)?
    };
    println!("{stdout}");

    Ok(())
}

fn build_report<'a>(site: &'a Site<Document, &mut LocalStorage>, steps: Vec<StepOutcome>) -> Report<'a> {
    let doc = site.view();
    let body = ViewTree::body(doc);
    let focused = ViewTree::active_element(doc)
        .filter(|&node| Some(node) != body)
        .map(|node| describe(doc, node));

    Report {
        url: doc.url(),
        title: doc.title(),
        body_classes: body.and_then(|body| doc.attribute(body, "class")),
        nav_expanded: site.nav().map(|nav| nav.is_expanded(doc)),
        open_modals: site.modals().open_count(),
        focused,
        local_storage: &**site.storage(),
        steps,
    }
}

/// `tag#id` for the report
fn describe(doc: &Document, node: glaze_dom::NodeId) -> String {
    let tag = doc.tag_name(node).unwrap_or("?");
    match doc.attribute(node, "id") {
        Some(id) => format!("{tag}#{id}"),
        None => tag.to_string(),
    }
}
