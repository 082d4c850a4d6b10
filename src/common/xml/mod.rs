//! XML helpers used by the package and slide writers.

mod escape;

pub use escape::escape_xml;
