use serde::Serialize;
use std::fmt;

/// Presentation tag of a node. Orthogonal to list structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Default,
    Head,
    Tail,
    Current,
    Highlight,
}

impl Color {
    /// Name of the color the renderer paints this tag with.
    pub fn palette_name(&self) -> &'static str {
        match self {
            Color::Default => "blue",
            Color::Head => "orange",
            Color::Tail => "yellow",
            Color::Current => "red",
            Color::Highlight => "green",
        }
    }
}

/// Value carried by a node: a key line followed by an ordered list of items.
///
/// For actor nodes the key is the actor name and the items are film titles.
/// Field order matters: the derived ordering compares `key` first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Entry {
    pub(crate) key: String,
    pub(crate) items: Vec<String>,
}

impl Entry {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub(crate) fn push_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Display label: line breaks become `<br>`, underscores become spaces.
    pub fn label(&self) -> String {
        self.to_string().replace('\n', "<br>").replace('_', " ")
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)?;
        for item in &self.items {
            write!(f, "\n{item}")?;
        }
        Ok(())
    }
}

impl From<&str> for Entry {
    fn from(key: &str) -> Self {
        Entry::new(key)
    }
}

impl From<String> for Entry {
    fn from(key: String) -> Self {
        Entry::new(key)
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) id: usize,
    pub(crate) value: Entry,
    pub(crate) color: Color,
    pub(crate) next: Option<usize>,
}

impl Node {
    pub(crate) fn new(id: usize, value: Entry) -> Self {
        Self {
            id,
            value,
            color: Color::Default,
            next: None,
        }
    }
}
