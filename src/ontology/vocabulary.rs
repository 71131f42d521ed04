//! Declared and observed vocabularies
//!
//! A [`Vocabulary`] is two URI sets, one per [`TermKind`]. Sets are ordered
//! so every enumeration (audit lists, CLI output) is stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of vocabulary term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TermKind {
    Class,
    Property,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermKind::Class => write!(f, "Class"),
            TermKind::Property => write!(f, "Property"),
        }
    }
}

/// A single term: URI plus kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VocabularyTerm {
    pub uri: String,
    pub kind: TermKind,
}

impl VocabularyTerm {
    pub fn class(uri: impl Into<String>) -> Self {
        VocabularyTerm {
            uri: uri.into(),
            kind: TermKind::Class,
        }
    }

    pub fn property(uri: impl Into<String>) -> Self {
        VocabularyTerm {
            uri: uri.into(),
            kind: TermKind::Property,
        }
    }
}

/// Class and property URI sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub classes: BTreeSet<String>,
    #[serde(default)]
    pub properties: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_terms<I: IntoIterator<Item = VocabularyTerm>>(terms: I) -> Self {
        let mut vocabulary = Self::new();
        for term in terms {
            vocabulary.insert(term);
        }
        vocabulary
    }

    /// Add a term; returns false if it was already present
    pub fn insert(&mut self, term: VocabularyTerm) -> bool {
        self.terms_mut(term.kind).insert(term.uri)
    }

    pub fn contains(&self, kind: TermKind, uri: &str) -> bool {
        self.terms(kind).contains(uri)
    }

    pub fn terms(&self, kind: TermKind) -> &BTreeSet<String> {
        match kind {
            TermKind::Class => &self.classes,
            TermKind::Property => &self.properties,
        }
    }

    fn terms_mut(&mut self, kind: TermKind) -> &mut BTreeSet<String> {
        match kind {
            TermKind::Class => &mut self.classes,
            TermKind::Property => &mut self.properties,
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len() + self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_partitions_by_kind() {
        let mut vocabulary = Vocabulary::new();
        assert!(vocabulary.insert(VocabularyTerm::class("jp:Place")));
        assert!(vocabulary.insert(VocabularyTerm::property("jp:livedIn")));
        assert!(!vocabulary.insert(VocabularyTerm::class("jp:Place")));

        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.contains(TermKind::Class, "jp:Place"));
        assert!(!vocabulary.contains(TermKind::Property, "jp:Place"));
    }

    #[test]
    fn test_same_uri_in_both_kinds() {
        let vocabulary = Vocabulary::from_terms([
            VocabularyTerm::class("x:Thing"),
            VocabularyTerm::property("x:Thing"),
        ]);
        assert_eq!(vocabulary.classes.len(), 1);
        assert_eq!(vocabulary.properties.len(), 1);
    }
}
