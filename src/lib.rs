//! Strategy Deck - strategy-analysis results to 16:9 PowerPoint decks
//!
//! This library holds the result of a business-strategy analysis (SWOT,
//! Ansoff matrix, competitor benchmark, prioritized recommendations) and turns
//! it into a self-contained `.pptx` deck or a JSON export.
//!
//! # Features
//!
//! - **Analysis Result Model**: serde types for framework outputs and recommendations
//! - **Deck engine**: layout primitives, one slide builder per report section, and an
//!   orchestrator that skips sections without data
//! - **OOXML writer**: a minimal PresentationML/OPC writer producing deterministic packages
//! - **JSON export**: the same analysis as pretty UTF-8 JSON
//! - **Wizard**: an explicit state machine over inputs, generation, review and export
//!
//! # Example - Building a deck
//!
//! ```
//! use strategy_deck::deck::DeckBuilder;
//! use strategy_deck::model::{AnalysisResult, FrameworkOutput, Recommendation, SwotAnalysis};
//! use chrono::NaiveDate;
//!
//! # fn main() -> strategy_deck::Result<()> {
//! let mut result = AnalysisResult::new("ACME Robotics", "Industrial IoT Sensors");
//! result.results.insert(FrameworkOutput::Swot(SwotAnalysis {
//!     strengths: vec!["Reliable hardware".into(), "OEM partners".into()],
//!     ..Default::default()
//! }));
//! result.recommendations.push(Recommendation::new("OEM bundle program", 5, 3)?);
//!
//! let deck = DeckBuilder::default()
//!     .generated_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
//!     .build(&result)?;
//! assert_eq!(deck.slide_count(), 6);
//! assert!(deck.bytes.starts_with(b"PK"));
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Running the wizard offline
//!
//! ```
//! use strategy_deck::wizard::{OfflineGenerator, StrategyInputs, Wizard, WizardEvent};
//!
//! # fn main() -> Result<(), strategy_deck::wizard::WizardError> {
//! let mut wizard = Wizard::new(OfflineGenerator);
//! wizard.handle(WizardEvent::SubmitInputs(StrategyInputs::new("ACME", "Sensors")))?;
//! wizard.handle(WizardEvent::Generate)?;
//! assert_eq!(wizard.progress_label(), "Step 3 of 5");
//! # Ok(())
//! # }
//! ```

/// Common types and utilities
pub mod common;

/// TOML deck configuration
pub mod config;

/// Deck assembly: layout primitives, slide builders, orchestrator
pub mod deck;

/// JSON export and export filenames
pub mod export;

/// Analysis Result Model
pub mod model;

/// OOXML (Office Open XML) writer
pub mod ooxml;

/// Wizard state machine and analysis generation
pub mod wizard;

pub use common::{Error, Result};
pub use config::DeckConfig;
pub use deck::{DeckArtifact, DeckBuilder, SectionKind, build_deck};
pub use export::{ExportMetadata, JsonExport, export_json};
pub use model::{AnalysisResult, FrameworkName, Recommendation};
