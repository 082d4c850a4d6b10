//! PowerPoint (.pptx) presentation writing.
//!
//! A [`Presentation`] owns a list of [`Slide`]s; each slide owns its shapes.
//! [`Presentation::to_bytes`] assembles the complete Open Packaging container
//! (master, layout, theme, properties and one part per slide).
//!
//! # Example
//!
//! ```rust
//! use strategy_deck::common::Rect;
//! use strategy_deck::ooxml::pptx::{Presentation, TextFormat};
//!
//! let mut pres = Presentation::widescreen();
//! let slide = pres.add_slide("Agenda");
//! slide.add_text_box(
//!     Rect::from_inches(0.6, 0.6, 12.0, 0.6),
//!     vec!["Agenda".to_string()],
//!     TextFormat::new().size(28.0).bold(true),
//! );
//! let bytes = pres.to_bytes(&Default::default())?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok::<(), strategy_deck::Error>(())
//! ```

pub mod format;
pub mod template;
pub mod writer;

pub use format::{LineFormat, TextFormat};
pub use template::DocumentProperties;
pub use writer::{Presentation, Shape, ShapeKind, Slide};
