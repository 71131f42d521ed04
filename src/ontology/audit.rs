//! Ontology audit: declared vocabulary versus observed usage
//!
//! Per term kind:
//! - `defined_count`  = |declared|
//! - `actual_count`   = |declared ∩ observed|
//! - `unused`         = declared − observed
//! - `undefined`      = observed − declared
//!
//! `unused` and `undefined` are disjoint, and `unused` together with the
//! used set reconstructs `declared` exactly.

use super::vocabulary::{TermKind, Vocabulary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Audit outcome for one term kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub defined_count: usize,
    pub actual_count: usize,
    pub unused: BTreeSet<String>,
    pub undefined: BTreeSet<String>,
}

impl AuditResult {
    /// Declared terms that also occur in the data
    pub fn used<'a>(&self, declared: &'a BTreeSet<String>) -> BTreeSet<&'a String> {
        declared.iter().filter(|uri| !self.unused.contains(*uri)).collect()
    }

    /// Declared terms all used and nothing undeclared observed
    pub fn is_clean(&self) -> bool {
        self.unused.is_empty() && self.undefined.is_empty()
    }
}

/// Audit of both term kinds; the `/ontology/audit` response shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyAudit {
    pub classes: AuditResult,
    pub properties: AuditResult,
}

impl OntologyAudit {
    pub fn get(&self, kind: TermKind) -> &AuditResult {
        match kind {
            TermKind::Class => &self.classes,
            TermKind::Property => &self.properties,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.classes.is_clean() && self.properties.is_clean()
    }
}

/// Audit one term set against its observations
pub fn audit_terms(declared: &BTreeSet<String>, observed: &BTreeSet<String>) -> AuditResult {
    AuditResult {
        defined_count: declared.len(),
        actual_count: declared.intersection(observed).count(),
        unused: declared.difference(observed).cloned().collect(),
        undefined: observed.difference(declared).cloned().collect(),
    }
}

/// Compares a declared vocabulary with observed usage
pub struct OntologyAuditor;

impl OntologyAuditor {
    pub fn audit(declared: &Vocabulary, observed: &Vocabulary) -> OntologyAudit {
        OntologyAudit {
            classes: audit_terms(&declared.classes, &observed.classes),
            properties: audit_terms(&declared.properties, &observed.properties),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::vocabulary::VocabularyTerm;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_audit_terms() {
        let declared = set(&["Person", "Place", "Work"]);
        let observed = set(&["Person", "Work", "Manuscript"]);

        let result = audit_terms(&declared, &observed);
        assert_eq!(result.defined_count, 3);
        assert_eq!(result.actual_count, 2);
        assert_eq!(result.unused, set(&["Place"]));
        assert_eq!(result.undefined, set(&["Manuscript"]));
        assert!(!result.is_clean());
    }

    #[test]
    fn test_used_reconstructs_declared() {
        let declared = set(&["a", "b", "c"]);
        let observed = set(&["b", "d"]);
        let result = audit_terms(&declared, &observed);

        let used = result.used(&declared);
        assert_eq!(used.len(), result.actual_count);
        let mut rebuilt: BTreeSet<String> = used.into_iter().cloned().collect();
        rebuilt.extend(result.unused.iter().cloned());
        assert_eq!(rebuilt, declared);
    }

    #[test]
    fn test_empty_inputs() {
        let result = audit_terms(&BTreeSet::new(), &BTreeSet::new());
        assert_eq!(result, AuditResult::default());
        assert!(result.is_clean());
    }

    #[test]
    fn test_kinds_audited_independently() {
        let declared = Vocabulary::from_terms([
            VocabularyTerm::class("jp:Place"),
            VocabularyTerm::property("jp:livedIn"),
        ]);
        let observed = Vocabulary::from_terms([
            VocabularyTerm::class("jp:livedIn"),
            VocabularyTerm::property("jp:livedIn"),
        ]);

        let audit = OntologyAuditor::audit(&declared, &observed);
        assert_eq!(audit.classes.unused, set(&["jp:Place"]));
        assert_eq!(audit.classes.undefined, set(&["jp:livedIn"]));
        assert!(audit.properties.is_clean());
        assert_eq!(audit.get(TermKind::Property).actual_count, 1);
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "classes": {"defined_count": 2, "actual_count": 1, "unused": ["x"], "undefined": []},
            "properties": {"defined_count": 0, "actual_count": 0, "unused": [], "undefined": ["y"]}
        }"#;
        let audit: OntologyAudit = serde_json::from_str(json).unwrap();
        assert_eq!(audit.classes.unused, set(&["x"]));
        assert_eq!(audit.properties.undefined, set(&["y"]));
    }
}
