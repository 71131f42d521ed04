//! Namespace and prefix handling for vocabulary URIs

/// Namespace of the dataset's own vocabulary
pub const DATASET_NAMESPACE: &str = "http://jewish_philosophy.org/ontology#";

pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// Prefixes used when printing vocabulary URIs
pub const PREFIXES: [(&str, &str); 5] = [
    ("jp", DATASET_NAMESPACE),
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("owl", OWL),
    ("xsd", XSD),
];

/// Compact `uri` to `prefix:local` with the longest matching namespace in
/// [`PREFIXES`]; URIs outside every namespace are returned unchanged.
pub fn compact(uri: &str) -> String {
    PREFIXES
        .iter()
        .filter(|(_, namespace)| uri.starts_with(*namespace))
        .max_by_key(|(_, namespace)| namespace.len())
        .map(|(prefix, namespace)| format!("{}:{}", prefix, &uri[namespace.len()..]))
        .unwrap_or_else(|| uri.to_string())
}

/// Local part of a URI: the text after the last `#`, or after the last `/`
/// when there is no fragment.
pub fn local_name(uri: &str) -> &str {
    let trimmed = uri.trim_end_matches('/');
    match trimmed.rfind('#') {
        Some(pos) if pos + 1 < trimmed.len() => &trimmed[pos + 1..],
        Some(_) => trimmed,
        None => trimmed.rsplit('/').next().unwrap_or(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact() {
        assert_eq!(compact(OWL_CLASS), "owl:Class");
        assert_eq!(compact(RDF_TYPE), "rdf:type");
        assert_eq!(
            compact("http://jewish_philosophy.org/ontology#writtenBy"),
            "jp:writtenBy"
        );
        assert_eq!(compact("http://example.org/x"), "http://example.org/x");
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("http://jewish_philosophy.org/ontology#Place"), "Place");
        assert_eq!(local_name("http://www.wikidata.org/entity/Q127398"), "Q127398");
        assert_eq!(local_name("http://example.org/things/"), "things");
        assert_eq!(local_name("plain"), "plain");
    }
}
