//! Presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;

// Re-export main types
pub use pres::Presentation;
pub use shape::{Shape, ShapeKind};
pub use slide::Slide;
