//! Office Open XML (OOXML) writing.
//!
//! The implementation follows the Open Packaging Conventions (OPC) and is
//! organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): Low-level package handling (ZIP, parts, relationships)
//! 2. **PresentationML** (`pptx`): Presentations, slides, shapes and the fixed
//!    template parts a deck needs

pub mod opc;
pub mod pptx;

pub use pptx::{Presentation, Slide};
