//! Read-only view of the chain handed to a renderer.

use crate::{errors::DriverError, list::OrderedActorList, node::Color};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub id: usize,
    pub value: String,
    pub label: String,
    pub color: Color,
    /// Palette name of `color`, e.g. `"orange"` for the head.
    pub paint: &'static str,
    pub next: Option<usize>,
}

/// Every node from head to tail, with its successor link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub head: Option<usize>,
    pub nodes: Vec<NodeView>,
}

impl Snapshot {
    pub fn of(list: &OrderedActorList) -> Self {
        let nodes = list
            .iter_handles()
            .map(|(h, entry)| {
                let color = list.color(h).unwrap_or_default();
                NodeView {
                    id: h.as_raw(),
                    value: entry.to_string(),
                    label: entry.label(),
                    color,
                    paint: color.palette_name(),
                    next: list.next(h).map(|n| n.as_raw()),
                }
            })
            .collect();
        Self {
            head: list.head().map(|h| h.as_raw()),
            nodes,
        }
    }
}

/// Consumer of snapshots. Nothing flows back into the list.
pub trait Visualizer {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), DriverError>;
}

/// Writes each snapshot as a pretty-printed JSON document.
pub struct JsonVisualizer<W: Write> {
    out: W,
}

impl<W: Write> JsonVisualizer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visualizer for JsonVisualizer<W> {
    fn publish(&mut self, snapshot: &Snapshot) -> Result<(), DriverError> {
        serde_json::to_writer_pretty(&mut self.out, snapshot)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Drops every snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVisualizer;

impl Visualizer for NoopVisualizer {
    fn publish(&mut self, _snapshot: &Snapshot) -> Result<(), DriverError> {
        Ok(())
    }
}
