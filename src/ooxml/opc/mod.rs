/// Open Packaging Conventions (OPC) writer.
///
/// An OOXML document is a ZIP container of XML parts tied together by
/// relationship parts and a `[Content_Types].xml` manifest. This module
/// provides the minimum needed to emit such a container:
///
/// - Part names ([`PackURI`])
/// - Relationship collections ([`Relationships`])
/// - Content type management and ZIP serialization ([`PackageWriter`])
pub mod constants;
pub mod error;
pub mod packuri;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use packuri::PackURI;
pub use pkgwriter::{PackageWriter, Part};
pub use rel::{Relationship, Relationships};
