//! Loading `actor film` pairs from a dataset.
//!
//! Each line holds two underscore-delimited tokens separated by a single
//! space, e.g. `Kevin_Bacon_(I) Animal_House_(1978)`.

use crate::{errors::DriverError, index::ActorFilmIndex};
use std::io::BufRead;
use tracing::{info, warn};

/// Actor cap used by the bundled dataset loader.
pub const DEFAULT_MAX_ACTORS: usize = 95;

/// Splits one dataset line into `(actor, film)`. Blank lines yield `None`.
/// Tokens past the second are ignored. The separator is exactly one space:
/// `actor  film` has an empty second token and is rejected as malformed
/// rather than ingested with an empty film.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<(String, String)>, DriverError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut tokens = line.split(' ');
    match (tokens.next(), tokens.next()) {
        (Some(actor), Some(film)) if !actor.is_empty() && !film.trim().is_empty() => {
            Ok(Some((actor.to_owned(), film.trim().to_owned())))
        }
        _ => Err(DriverError::MalformedLine {
            line: line_no,
            content: line.to_owned(),
        }),
    }
}

/// Feeds pairs into `index` while it holds at most `max_actors` actors.
///
/// Malformed lines are skipped with a warning; I/O errors abort the load.
/// Returns the number of pairs ingested.
pub fn load_dataset<R: BufRead>(
    reader: R,
    index: &mut ActorFilmIndex,
    max_actors: usize,
) -> Result<usize, DriverError> {
    let mut ingested = 0;
    for (i, line) in reader.lines().enumerate() {
        if index.len() > max_actors {
            break;
        }
        let line = line?;
        match parse_line(i + 1, &line) {
            Ok(Some((actor, film))) => {
                index.insert_film(&actor, &film);
                ingested += 1;
            }
            Ok(None) => {}
            Err(err) => warn!(%err, "skipping dataset line"),
        }
    }
    info!(pairs = ingested, actors = index.len(), "dataset loaded");
    Ok(ingested)
}
