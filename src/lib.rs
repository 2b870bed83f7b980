//! An ordered singly linked list of actors and the films they appeared in.
//!
//! [`OrderedActorList`] owns the chain and the head/tail/current/highlighted
//! roles used to color nodes for rendering. [`ActorFilmIndex`] layers actor
//! lookup, film append and removal on top of it.

mod command;
mod errors;
mod handle;
mod index;
mod ingest;
mod list;
mod node;
mod roles;
mod session;
mod snapshot;

pub use command::{normalize_name, Command};
pub use errors::{DriverError, ListError};
pub use handle::Handle;
pub use index::ActorFilmIndex;
pub use ingest::{load_dataset, parse_line, DEFAULT_MAX_ACTORS};
pub use list::{Iter, IterHandles, OrderedActorList};
pub use node::{Color, Entry};
pub use session::Session;
pub use snapshot::{JsonVisualizer, NodeView, NoopVisualizer, Snapshot, Visualizer};
