//! Runtime configuration for the `actorlist` binary.

use actorlist::DEFAULT_MAX_ACTORS;
use clap::Parser;
use std::path::PathBuf;

/// Browse an actor/film dataset as an ordered linked list.
#[derive(Debug, Clone, Parser)]
#[command(name = "actorlist", version, about)]
pub struct Config {
    /// Dataset of `actor film` lines.
    #[arg(long, env = "ACTORLIST_DATASET", default_value = "./dataset/large_imdb.txt")]
    pub dataset: PathBuf,

    /// Stop loading once the list holds more than this many actors.
    #[arg(long, env = "ACTORLIST_MAX_ACTORS", default_value_t = DEFAULT_MAX_ACTORS)]
    pub max_actors: usize,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[arg(long, env = "ACTORLIST_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON.
    #[arg(long, env = "ACTORLIST_LOG_JSON")]
    pub log_json: bool,

    /// Do not print list snapshots after each change.
    #[arg(long)]
    pub no_visualize: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["actorlist"]).unwrap();
        assert_eq!(config.max_actors, 95);
        assert!(!config.no_visualize);
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "actorlist",
            "--dataset",
            "/tmp/small.txt",
            "--max-actors",
            "3",
            "--no-visualize",
        ])
        .unwrap();
        assert_eq!(config.dataset, PathBuf::from("/tmp/small.txt"));
        assert_eq!(config.max_actors, 3);
        assert!(config.no_visualize);
    }
}
