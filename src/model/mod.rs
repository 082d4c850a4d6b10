//! Analysis Result Model.
//!
//! The in-memory shape of one strategy analysis: framework outputs (SWOT,
//! Ansoff, competitor benchmark) and a ranked recommendation list. The model
//! is plain data with serde support; the deck engine and the JSON export
//! consume it read-only.

mod analysis;
mod framework;
mod recommendation;
mod section;

pub use analysis::AnalysisResult;
pub use framework::{
    AnsoffMatrix, Benchmark, BenchmarkRow, FrameworkName, FrameworkOutput, FrameworkResults,
    SwotAnalysis,
};
pub use recommendation::{Quadrant, Recommendation, Score};
pub use section::{Section, SectionContent};
