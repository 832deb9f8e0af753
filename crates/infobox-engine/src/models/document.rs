use serde::{Deserialize, Serialize};

/// The result of parsing one markup block.
///
/// Built in a single parse call and never mutated afterwards; each render pass
/// parses the source again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub thumbnails: Vec<Thumbnail>,
    pub groups: Vec<Group>,
}

impl Document {
    /// True when the markup contained no thumbnails and no group headers.
    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty() && self.groups.is_empty()
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// An image declaration with an optional caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Resolved image reference (raw text when the resolver had no mapping).
    pub url: String,
    /// `None` when the line had no unescaped `|`; an empty caption is `Some("")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named section of key/value entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Header text after `#`, verbatim. May be empty.
    pub name: String,
    #[serde(default)]
    pub entries: Vec<TableEntry>,
}

impl Group {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            entries: vec![],
        }
    }
}

/// One `-key:value` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub key: String,
    pub value: Value,
}

impl TableEntry {
    pub fn new<K: Into<String>>(key: K, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An entry value: a single string or a list of at least two strings.
///
/// Link-shaped strings (`[[target|label]]`) are kept as plain text here and
/// recognised by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "RawValue")]
pub enum Value {
    Plain(String),
    List(Vec<String>),
}

/// Wire shape of a [`Value`] before list collapsing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Plain(String),
    List(Vec<String>),
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Plain(s) => Value::Plain(s),
            RawValue::List(items) => Value::from_segments(items),
        }
    }
}

impl Value {
    /// Builds a value from decoded segments, collapsing a single segment
    /// into [`Value::Plain`]. No segments at all yields an empty plain value.
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut items: Vec<String> = segments.into_iter().collect();
        match items.len() {
            0 => Value::Plain(String::new()),
            1 => Value::Plain(items.remove(0)),
            _ => Value::List(items),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Plain(s.to_string())
    }
}
