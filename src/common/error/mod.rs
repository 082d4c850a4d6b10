//! Unified error types for the strategy-deck library.
//!
//! Subsystems keep their own error enums (package writing, the wizard, the
//! generation collaborators); this module folds them into one [`Error`] for
//! callers that only want a single type.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
