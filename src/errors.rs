use crate::handle::Handle;
use thiserror::Error;

/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// `pop_front`, `pop_back` or `get_prev` called on a list with no nodes.
    #[error("list empty")]
    EmptyList,

    /// The handle does not name a node reachable from head.
    #[error("node {} is not in the list", .0.as_raw())]
    NotFound(Handle),
}

/// Errors raised by the collaborators that drive the list: dataset loading,
/// the command session and the visualization sink.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `actor film`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("snapshot encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    List(#[from] ListError),
}
