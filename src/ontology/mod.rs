//! Ontology vocabulary, schema graph and usage audit
//!
//! The audit compares what a schema declares with what a dataset uses:
//!
//! ```text
//! Schema ──declared_vocabulary()──┐
//!                                 ├── OntologyAuditor::audit ──> OntologyAudit
//! Statements ──UsageScanner───────┘
//! ```

pub mod audit;
pub mod namespace;
pub mod schema;
pub mod usage;
pub mod vocabulary;

pub use audit::{audit_terms, AuditResult, OntologyAudit, OntologyAuditor};
pub use namespace::{compact, local_name, DATASET_NAMESPACE};
pub use schema::{ClassDecl, PropertyDecl, Schema};
pub use usage::{Statement, UsageScanner};
pub use vocabulary::{TermKind, Vocabulary, VocabularyTerm};

/// Audit a schema against dataset statements
pub fn audit_dataset<'a, I>(schema: &Schema, statements: I) -> OntologyAudit
where
    I: IntoIterator<Item = &'a Statement>,
{
    let mut scanner = UsageScanner::with_namespace(schema.namespace.as_str());
    scanner.observe_all(statements);
    OntologyAuditor::audit(&schema.declared_vocabulary(), &scanner.finish())
}
