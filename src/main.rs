//! actorlist - load an actor/film dataset into an ordered linked list and
//! edit it from the terminal.

use std::fs::File;
use std::io::{self, BufReader};

use actorlist::{load_dataset, ActorFilmIndex, JsonVisualizer, NoopVisualizer, Session};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;

use config::Config;

fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(io::stderr))
            .init();
    }

    info!(dataset = %config.dataset.display(), max_actors = config.max_actors, "starting");

    let file = File::open(&config.dataset)
        .with_context(|| format!("opening dataset {}", config.dataset.display()))?;
    let mut index = ActorFilmIndex::new();
    load_dataset(BufReader::new(file), &mut index, config.max_actors)
        .context("loading dataset")?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    if config.no_visualize {
        Session::new(&mut index, stdin, stdout, NoopVisualizer).run()?;
    } else {
        Session::new(&mut index, stdin, stdout, JsonVisualizer::new(io::stdout())).run()?;
    }

    info!(actors = index.len(), "session ended");
    Ok(())
}
