//! Common types and utilities shared by the model, the package writer and the deck engine.

// Submodule declarations
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use unit::{EMUS_PER_INCH, EMUS_PER_PT, Rect, inches};
