//! Package writer for OPC packages.
//!
//! This module serializes a set of parts into a ZIP container, writing the
//! `[Content_Types].xml` manifest, the package relationships, every part and
//! every part's relationships.

use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::Result;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// A part to be written into the package.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a part with no relationships.
    pub fn new(partname: PackURI, content_type: &'static str, blob: impl Into<Vec<u8>>) -> Self {
        Self {
            partname,
            content_type,
            blob: blob.into(),
            rels: Relationships::new(),
        }
    }

    /// Attach the part's outgoing relationships.
    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}

/// Package writer that serializes parts to an in-memory ZIP archive.
///
/// Every entry is stamped with the DOS epoch (1980-01-01 00:00) so that the
/// same parts always produce the same bytes.
///
/// # Example
///
/// ```
/// use strategy_deck::ooxml::opc::{PackageWriter, PackURI, Part};
/// use strategy_deck::ooxml::opc::constants::{content_type, relationship_type};
///
/// let mut writer = PackageWriter::new();
/// writer.add_package_rel(relationship_type::OFFICE_DOCUMENT, "ppt/presentation.xml");
/// writer.add_part(Part::new(
///     PackURI::new("/ppt/presentation.xml")?,
///     content_type::PML_PRESENTATION_MAIN,
///     "<p:presentation/>",
/// ));
/// let bytes = writer.to_bytes()?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    pkg_rels: Relationships,
    parts: Vec<Part>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package-level relationship (written to `_rels/.rels`).
    pub fn add_package_rel(&mut self, reltype: &'static str, target: &str) -> String {
        self.pkg_rels.add(reltype, target)
    }

    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        // [Content_Types].xml goes first by convention
        let cti = ContentTypesItem::from_parts(&self.parts);
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI)?;
        zip.start_file(content_types_uri.membername(), options)?;
        zip.write_all(cti.to_xml().as_bytes())?;

        // Package-level relationships
        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        zip.start_file(rels_uri.membername(), options)?;
        zip.write_all(self.pkg_rels.to_xml().as_bytes())?;

        for part in &self.parts {
            zip.start_file(part.partname().membername(), options)?;
            zip.write_all(part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                zip.start_file(rels_uri.membername(), options)?;
                zip.write_all(part.rels().to_xml().as_bytes())?;
            }
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_parts(parts: &[Part]) -> Self {
        let mut cti = Self::new();
        for part in parts {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Use a Default when the extension already maps to this type, else an Override.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();
        if self.defaults.get(ext).is_some_and(|ct| ct == content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}
