//! Observed vocabulary from dataset statements

use super::namespace::{DATASET_NAMESPACE, RDF_TYPE};
use super::vocabulary::{Vocabulary, VocabularyTerm};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A `(subject, predicate, object)` statement with all terms as strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Statement {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Statement {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    pub fn is_type_assertion(&self) -> bool {
        self.predicate == RDF_TYPE
    }
}

/// Collects the terms a dataset actually uses.
///
/// - the object of an `rdf:type` statement, if it lies in the namespace, is
///   an observed class
/// - a predicate in the namespace is an observed property
#[derive(Debug, Clone)]
pub struct UsageScanner {
    namespace: String,
    observed: Vocabulary,
    scanned: usize,
}

impl UsageScanner {
    /// Scanner for the dataset namespace
    pub fn new() -> Self {
        Self::with_namespace(DATASET_NAMESPACE)
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        UsageScanner {
            namespace: namespace.into(),
            observed: Vocabulary::new(),
            scanned: 0,
        }
    }

    pub fn observe(&mut self, statement: &Statement) {
        self.scanned += 1;
        if statement.is_type_assertion() && statement.object.starts_with(&self.namespace) {
            self.observed.insert(VocabularyTerm::class(statement.object.as_str()));
        }
        if statement.predicate.starts_with(&self.namespace) {
            self.observed.insert(VocabularyTerm::property(statement.predicate.as_str()));
        }
    }

    pub fn observe_all<'a, I>(&mut self, statements: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Statement>,
    {
        for statement in statements {
            self.observe(statement);
        }
        self
    }

    pub fn finish(self) -> Vocabulary {
        debug!(
            "Scanned {} statements: {} classes, {} properties observed",
            self.scanned,
            self.observed.classes.len(),
            self.observed.properties.len()
        );
        self.observed
    }

    /// Scan a statement set in one call
    pub fn scan<'a, I>(statements: I) -> Vocabulary
    where
        I: IntoIterator<Item = &'a Statement>,
    {
        let mut scanner = Self::new();
        scanner.observe_all(statements);
        scanner.finish()
    }
}

impl Default for UsageScanner {
    fn default() -> Self {
        Self::new()
    }
}
