//! Response models shared by every data source

use crate::error::{ExplorerError, ExplorerResult};
use crate::graph::Category;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Entity collections served under the API prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Persons,
    Works,
    Places,
    Subjects,
    Languages,
    Scholarly,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Persons,
        Collection::Works,
        Collection::Places,
        Collection::Subjects,
        Collection::Languages,
        Collection::Scholarly,
    ];

    /// Path segment of the collection endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Persons => "persons",
            Collection::Works => "works",
            Collection::Places => "places",
            Collection::Subjects => "subjects",
            Collection::Languages => "languages",
            Collection::Scholarly => "scholarly",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Collection::Persons => Category::Person,
            Collection::Works => Category::Work,
            Collection::Places => Category::Place,
            Collection::Subjects => Category::Subject,
            Collection::Languages => Category::Language,
            Collection::Scholarly => Category::ScholarlyWork,
        }
    }

    /// Collection holding entities of `category`, if any
    pub fn for_category(category: Category) -> Option<Collection> {
        Collection::ALL.into_iter().find(|c| c.category() == category)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Collection {
    type Err = ExplorerError;

    fn from_str(s: &str) -> ExplorerResult<Self> {
        let name = s.trim().trim_matches('/').to_ascii_lowercase();
        Collection::ALL
            .into_iter()
            .find(|c| c.path() == name)
            .ok_or_else(|| ExplorerError::UnknownCollection(s.to_string()))
    }
}

/// A dataset partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub count: u64,
}

/// Global counters keyed by collection name (`persons`, `works`, ...)
pub type GlobalStats = IndexMap<String, u64>;

/// Detail payload of one entity; the shape varies per collection
pub type EntityDetail = serde_json::Value;

/// One row of a collection listing.
///
/// Listing shapes differ per collection, so the row keeps every field in
/// arrival order. `id` and `label` are present on all of them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord(IndexMap<String, serde_json::Value>);

impl EntityRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn id(&self) -> &str {
        self.get("id").and_then(|v| v.as_str()).unwrap_or_default()
    }

    pub fn label(&self) -> &str {
        self.get("label").and_then(|v| v.as_str()).unwrap_or_default()
    }

    /// Partition the record came from, when it says
    pub fn source(&self) -> Option<&str> {
        self.get("source").and_then(|v| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Field rendered as plain text; missing and null fields are empty
    pub fn text(&self, key: &str) -> String {
        match self.get(key) {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
