//! Declared schema: class and property declarations
//!
//! A [`Schema`] can be built directly or read back from statements
//! (`owl:Class`, `owl:ObjectProperty`, `rdfs:label`, `rdfs:comment`,
//! `rdfs:domain`, `rdfs:range`). It yields the declared [`Vocabulary`] for
//! the audit and the ontology graph for visualization.

use super::namespace::{
    local_name, DATASET_NAMESPACE, OWL_CLASS, OWL_OBJECT_PROPERTY, RDFS_COMMENT, RDFS_DOMAIN,
    RDFS_LABEL, RDFS_RANGE, RDF_TYPE,
};
use super::usage::Statement;
use super::vocabulary::{Vocabulary, VocabularyTerm};
use crate::graph::{Category, GraphPayload, RawEdge, RawNode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A declared class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub uri: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ClassDecl {
    pub fn new(uri: impl Into<String>) -> Self {
        ClassDecl {
            uri: uri.into(),
            label: None,
            comment: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Label, or the local name of the URI when none is declared
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| local_name(&self.uri))
    }
}

/// A declared property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub uri: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
}

impl PropertyDecl {
    pub fn new(uri: impl Into<String>) -> Self {
        PropertyDecl {
            uri: uri.into(),
            label: None,
            domain: None,
            range: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn between(mut self, domain: impl Into<String>, range: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self.range = Some(range.into());
        self
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| local_name(&self.uri))
    }
}

/// Schema restricted to one namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub namespace: String,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
}

impl Schema {
    /// Empty schema over the dataset namespace
    pub fn new() -> Self {
        Self::with_namespace(DATASET_NAMESPACE)
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Schema {
            namespace: namespace.into(),
            classes: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn class(mut self, decl: ClassDecl) -> Self {
        self.classes.push(decl);
        self
    }

    pub fn property(mut self, decl: PropertyDecl) -> Self {
        self.properties.push(decl);
        self
    }

    /// Read declarations from schema statements.
    ///
    /// Declarations outside the namespace are ignored. Annotation statements
    /// may appear before or after the type statement they annotate.
    pub fn from_statements<'a, I>(namespace: &str, statements: I) -> Self
    where
        I: IntoIterator<Item = &'a Statement>,
    {
        let mut classes: IndexMap<&str, ClassDecl> = IndexMap::new();
        let mut properties: IndexMap<&str, PropertyDecl> = IndexMap::new();
        let mut annotations: Vec<&Statement> = Vec::new();

        for statement in statements {
            if !statement.subject.starts_with(namespace) {
                continue;
            }
            if statement.predicate == RDF_TYPE {
                let subject = statement.subject.as_str();
                match statement.object.as_str() {
                    OWL_CLASS => {
                        classes
                            .entry(subject)
                            .or_insert_with(|| ClassDecl::new(subject));
                    }
                    OWL_OBJECT_PROPERTY => {
                        properties
                            .entry(subject)
                            .or_insert_with(|| PropertyDecl::new(subject));
                    }
                    _ => {}
                }
            } else {
                annotations.push(statement);
            }
        }

        for statement in annotations {
            let subject = statement.subject.as_str();
            let value = Some(statement.object.clone());
            if let Some(class) = classes.get_mut(subject) {
                match statement.predicate.as_str() {
                    RDFS_LABEL => class.label = value,
                    RDFS_COMMENT => class.comment = value,
                    _ => {}
                }
            } else if let Some(property) = properties.get_mut(subject) {
                match statement.predicate.as_str() {
                    RDFS_LABEL => property.label = value,
                    RDFS_DOMAIN => property.domain = value,
                    RDFS_RANGE => property.range = value,
                    _ => {}
                }
            }
        }

        Schema {
            namespace: namespace.to_string(),
            classes: classes.into_values().collect(),
            properties: properties.into_values().collect(),
        }
    }

    fn in_namespace(&self, uri: &str) -> bool {
        uri.starts_with(&self.namespace)
    }

    /// Declared vocabulary, restricted to the namespace
    pub fn declared_vocabulary(&self) -> Vocabulary {
        let classes = self
            .classes
            .iter()
            .filter(|c| self.in_namespace(&c.uri))
            .map(|c| VocabularyTerm::class(c.uri.as_str()));
        let properties = self
            .properties
            .iter()
            .filter(|p| self.in_namespace(&p.uri))
            .map(|p| VocabularyTerm::property(p.uri.as_str()));
        Vocabulary::from_terms(classes.chain(properties))
    }

    /// Graph view of the schema.
    ///
    /// Classes become nodes. A property becomes a labelled edge only when
    /// both its domain and its range are declared classes of the namespace.
    pub fn ontology_graph(&self) -> GraphPayload {
        let mut nodes = Vec::new();
        let mut known: HashSet<&str> = HashSet::new();

        for class in self.classes.iter().filter(|c| self.in_namespace(&c.uri)) {
            if !known.insert(class.uri.as_str()) {
                continue;
            }
            nodes.push(RawNode {
                id: Some(class.uri.clone()),
                label: Some(class.display_label().to_string()),
                category: Category::Unknown,
                source: None,
            });
        }

        let edges = self
            .properties
            .iter()
            .filter(|p| self.in_namespace(&p.uri))
            .filter_map(|p| match (p.domain.as_deref(), p.range.as_deref()) {
                (Some(domain), Some(range)) if known.contains(domain) && known.contains(range) => {
                    Some(RawEdge::labelled(domain, range, p.display_label()))
                }
                _ => None,
            })
            .collect();

        GraphPayload::new(nodes, edges)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
