//! Export filename derivation shared by the deck and JSON exports.

use chrono::NaiveDate;

/// File formats the analysis can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pptx,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pptx => "pptx",
            Self::Json => "json",
        }
    }
}

/// Replace spaces (and path separators) with underscores.
fn filename_component(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect()
}

/// `{company}_{product}_{YYYYMMDD}_strategy.{ext}`
///
/// Callers pass display names, so blank inputs have already become
/// "Company"/"Product".
pub fn export_filename(company: &str, product: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}_{}_{}_strategy.{}",
        filename_component(company),
        filename_component(product),
        date.format("%Y%m%d"),
        format.extension()
    )
}
