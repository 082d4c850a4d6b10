/// Relationship-related objects for OPC packages.
///
/// A part's relationships are written to a sibling `_rels/<name>.rels` part
/// and referenced from the part's XML by relationship ID.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;

/// A single internal relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: &'static str,

    /// Target reference relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source, in insertion order.
///
/// IDs are allocated sequentially as `rId1`, `rId2`, ... so output is stable.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its newly allocated ID.
    pub fn add(&mut self, reltype: &'static str, target_ref: impl Into<String>) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target_ref: target_ref.into(),
        });
        r_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Generate the XML for the `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");

        xml
    }
}
