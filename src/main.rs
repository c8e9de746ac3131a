use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use greenhouse::catalog::{InMemoryCatalog, InMemoryGallery, InMemoryGarden, Plant};
use greenhouse::config::Config;
use greenhouse::logging::init_tracing;
use greenhouse::platform::LoggingPlatform;
use greenhouse::screens::{AppScreen, HomeChrome};
use greenhouse::ui::app::{App, Collaborators};
use greenhouse::ui::events::AppEvent;

/// Replay deep links against the navigation graph and print where they land.
#[derive(Debug, Parser)]
#[command(name = "greenhouse", version)]
struct Cli {
    /// Config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of catalog plants.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Paths to open in order, e.g. `detail/malus-pumila`.
    paths: Vec<String>,
}

#[derive(Serialize)]
struct Report {
    stack: Vec<String>,
    screen: AppScreen,
    home: HomeChrome,
}

fn load_catalog(path: &Path) -> anyhow::Result<Vec<Plant>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing catalog {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let plants = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Vec::new(),
    };

    let collaborators = Collaborators {
        catalog: Arc::new(InMemoryCatalog::new(plants)),
        garden: Arc::new(InMemoryGarden::new(Vec::new())),
        gallery: Arc::new(InMemoryGallery::new(HashMap::new())),
        platform: Arc::new(LoggingPlatform),
    };
    let mut app = App::new(config, collaborators)?;

    for path in cli.paths {
        app.handle(AppEvent::DeepLink(path.clone()))
            .with_context(|| format!("opening {path}"))?;
    }
    app.settle().await;

    let report = Report {
        stack: app
            .router()
            .back_stack()
            .paths()
            .into_iter()
            .map(str::to_string)
            .collect(),
        screen: app.current_screen()?,
        home: app.home().chrome(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
