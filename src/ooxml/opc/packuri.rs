/// Provides the PackURI value type for naming parts within a package.
///
/// A PackURI is a part name following the Open Packaging Conventions: it
/// always starts with a forward slash and uses forward slashes as separators.
use crate::ooxml::opc::error::{OpcError, Result};

/// The URI of the content types manifest.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// The pseudo-partname of the package itself.
pub const PACKAGE_URI: &str = "/";

/// Represents a package URI, which is a partname within an OPC package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackURI {
    /// The full pack URI string (e.g., "/ppt/slides/slide1.xml")
    uri: String,
}

impl PackURI {
    /// Create a new PackURI from a string.
    ///
    /// # Returns
    /// * `Ok(PackURI)` if the URI is valid
    /// * `Err` if the URI doesn't start with a forward slash
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPartName(format!(
                "PackURI must begin with slash, got '{}'",
                uri
            )));
        }
        Ok(PackURI { uri })
    }

    /// Get the base URI (directory portion) of this PackURI.
    ///
    /// For example, "/ppt/slides" for "/ppt/slides/slide1.xml".
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Get the filename portion, e.g. "slide1.xml".
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => &self.uri,
        }
    }

    /// Get the extension without the leading dot, e.g. "xml".
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        match filename.rfind('.') {
            Some(pos) => &filename[pos + 1..],
            None => "",
        }
    }

    /// The ZIP member name: the URI without its leading slash.
    #[inline]
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// The URI of the relationships part that belongs to this part.
    ///
    /// "/ppt/presentation.xml" maps to "/ppt/_rels/presentation.xml.rels" and
    /// the package pseudo-partname "/" maps to "/_rels/.rels".
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base = self.base_uri();
        let filename = self.filename();
        let rels = if base == "/" {
            format!("/_rels/{}.rels", filename)
        } else {
            format!("{}/_rels/{}.rels", base, filename)
        };
        PackURI::new(rels)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}
