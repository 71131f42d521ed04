//! Core type definitions for the entity graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a node within one graph snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl std::borrow::Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Entity category used for filtering, display color and navigation.
///
/// Unrecognized wire values land in [`Category::Unknown`] instead of failing
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    Person,
    Work,
    ScholarlyWork,
    Place,
    Subject,
    Language,
    #[default]
    Unknown,
}

impl Category {
    /// The six dataset categories, in legend order.
    pub const KNOWN: [Category; 6] = [
        Category::Person,
        Category::Work,
        Category::ScholarlyWork,
        Category::Place,
        Category::Subject,
        Category::Language,
    ];

    /// Number of variants including the unknown bucket.
    pub const COUNT: usize = 7;

    /// Every variant including the unknown bucket.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Person,
        Category::Work,
        Category::ScholarlyWork,
        Category::Place,
        Category::Subject,
        Category::Language,
        Category::Unknown,
    ];

    /// Parse a wire category name.
    ///
    /// Accepts the short names as well as the ontology class names the
    /// backend emits (`HistoricalPerson`, `HistoricalLanguage`, ...).
    /// Matching ignores ASCII case.
    pub fn parse(raw: &str) -> Category {
        let name = raw.trim();
        let name = name.rsplit(|c: char| c == '#' || c == '/').next().unwrap_or(name);
        match name.to_ascii_lowercase().as_str() {
            "person" | "historicalperson" => Category::Person,
            "work" | "historicalwork" => Category::Work,
            "scholarlywork" | "scholarly" => Category::ScholarlyWork,
            "place" => Category::Place,
            "subject" => Category::Subject,
            "language" | "historicallanguage" => Category::Language,
            _ => Category::Unknown,
        }
    }

    /// Category of an arbitrary JSON value; anything but a recognized
    /// string is [`Category::Unknown`].
    pub fn from_wire(value: &serde_json::Value) -> Category {
        value.as_str().map(Category::parse).unwrap_or_default()
    }

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Person => "Person",
            Category::Work => "Work",
            Category::ScholarlyWork => "ScholarlyWork",
            Category::Place => "Place",
            Category::Subject => "Subject",
            Category::Language => "Language",
            Category::Unknown => "Unknown",
        }
    }

    /// Legend label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Person => "Person",
            Category::Work => "Work",
            Category::ScholarlyWork => "Scholarly",
            Category::Place => "Place",
            Category::Subject => "Subject",
            Category::Language => "Language",
            Category::Unknown => "Unknown",
        }
    }

    /// Display color as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Person => "#e74c3c",
            Category::Work => "#3498db",
            Category::ScholarlyWork => "#9b59b6",
            Category::Place => "#2ecc71",
            Category::Subject => "#f1c40f",
            Category::Language => "#95a5a6",
            Category::Unknown => "#cccccc",
        }
    }

    /// REST collection backing the detail page of this category
    pub fn collection(&self) -> Option<&'static str> {
        match self {
            Category::Person => Some("persons"),
            Category::Work => Some("works"),
            Category::ScholarlyWork => Some("scholarly"),
            Category::Place => Some("places"),
            Category::Subject => Some("subjects"),
            Category::Language => Some("languages"),
            Category::Unknown => None,
        }
    }

    /// Navigation target for a node of this category.
    pub fn route(&self, id: &NodeId) -> Option<String> {
        self.collection()
            .map(|collection| format!("/{}/{}", collection, id.as_str()))
    }

    /// Position in [`Category::ALL`], used as a dense index.
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Person => 0,
            Category::Work => 1,
            Category::ScholarlyWork => 2,
            Category::Place => 3,
            Category::Subject => 4,
            Category::Language => 5,
            Category::Unknown => 6,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::parse(s))
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Category::from_wire(&raw))
    }
}
