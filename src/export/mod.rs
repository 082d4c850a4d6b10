//! Export targets: deck filenames and the JSON export.

pub mod filename;
pub mod json;

pub use filename::{ExportFormat, export_filename};
pub use json::{ExportMetadata, JsonExport, export_json};
