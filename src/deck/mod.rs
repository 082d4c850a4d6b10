//! Deck assembly.
//!
//! [`layout`] holds the drawing primitives, [`builders`] maps each report
//! section onto them, and [`DeckBuilder`] runs the builders in a fixed order
//! and produces the `.pptx` bytes plus a filename.
//!
//! # Example
//!
//! ```
//! use strategy_deck::deck::{DeckBuilder, SectionKind};
//! use strategy_deck::model::AnalysisResult;
//! use chrono::NaiveDate;
//!
//! let result = AnalysisResult::new("ACME Robotics", "Industrial IoT Sensors");
//! let deck = DeckBuilder::default()
//!     .generated_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
//!     .build(&result)?;
//!
//! assert_eq!(deck.filename, "ACME_Robotics_Industrial_IoT_Sensors_20240501_strategy.pptx");
//! assert_eq!(deck.sections.last(), Some(&SectionKind::Appendix));
//! # Ok::<(), strategy_deck::Error>(())
//! ```

pub mod builders;
pub mod layout;
mod orchestrator;
pub mod style;

pub use orchestrator::{DeckArtifact, DeckBuilder, SectionKind, build_deck};
pub use style::{Canvas, DeckStyle};
