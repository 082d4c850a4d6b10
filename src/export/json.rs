//! JSON export of an analysis.

use super::filename::{ExportFormat, export_filename};
use crate::common::Result;
use crate::model::{AnalysisResult, FrameworkName, FrameworkResults, Recommendation};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session details recorded alongside the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMetadata {
    pub analysis_id: Uuid,
    pub geo: Option<String>,
    pub notes: Option<String>,
}

impl ExportMetadata {
    /// Metadata with a fresh random analysis id.
    pub fn new() -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            geo: None,
            notes: None,
        }
    }
}

/// The metadata keys of a previous export; other keys are ignored.
#[derive(Deserialize)]
struct StoredMetadata {
    #[serde(default)]
    analysis_id: Option<String>,
    #[serde(default)]
    geo: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl ExportMetadata {
    /// Recover metadata from a previously exported JSON document.
    ///
    /// A missing or malformed `analysis_id` gets a fresh one, so plain
    /// analysis files (without export metadata) are accepted too.
    pub fn from_json(text: &str) -> Result<Self> {
        let stored: StoredMetadata = serde_json::from_str(text)?;
        let analysis_id = match stored.analysis_id.as_deref().map(Uuid::parse_str) {
            Some(Ok(id)) => id,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Ignoring malformed analysis_id");
                Uuid::new_v4()
            },
            None => Uuid::new_v4(),
        };
        Ok(Self {
            analysis_id,
            geo: stored.geo,
            notes: stored.notes,
        })
    }
}

impl Default for ExportMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonPayload<'a> {
    analysis_id: &'a Uuid,
    company: &'a str,
    product: &'a str,
    geo: Option<&'a str>,
    notes: Option<&'a str>,
    frameworks: &'a [FrameworkName],
    results: &'a FrameworkResults,
    recs: &'a [Recommendation],
    exported_at: String,
}

/// A finished JSON export: UTF-8 bytes plus the suggested filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonExport {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Serialize `result` to pretty JSON.
///
/// The filename date is the UTC date of `exported_at`.
pub fn export_json(
    result: &AnalysisResult,
    metadata: &ExportMetadata,
    exported_at: DateTime<Utc>,
) -> Result<JsonExport> {
    let payload = JsonPayload {
        analysis_id: &metadata.analysis_id,
        company: &result.company,
        product: &result.product,
        geo: metadata.geo.as_deref(),
        notes: metadata.notes.as_deref(),
        frameworks: &result.frameworks,
        results: &result.results,
        recs: &result.recommendations,
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    let bytes = serde_json::to_vec_pretty(&payload)?;
    let filename = export_filename(
        result.display_company(),
        result.display_product(),
        exported_at.date_naive(),
        ExportFormat::Json,
    );
    tracing::info!(filename = %filename, bytes = bytes.len(), "Exported analysis as JSON");
    Ok(JsonExport { bytes, filename })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FrameworkOutput, SwotAnalysis};
    use chrono::TimeZone;

    #[test]
    fn test_export_shape() {
        let mut result = AnalysisResult::new("ACME Robotics", "Sensors");
        result.frameworks.push(FrameworkName::Swot);
        result.results.insert(FrameworkOutput::Swot(SwotAnalysis {
            strengths: vec!["Fiabilité".into()],
            ..Default::default()
        }));
        let metadata = ExportMetadata {
            analysis_id: Uuid::nil(),
            geo: Some("EU".into()),
            notes: None,
        };
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let export = export_json(&result, &metadata, at).unwrap();

        assert_eq!(export.filename, "ACME_Robotics_Sensors_20240501_strategy.json");
        let text = String::from_utf8(export.bytes).unwrap();
        // non-ASCII is written as-is, not escaped
        assert!(text.contains("Fiabilité"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["analysis_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(value["geo"], "EU");
        assert!(value["notes"].is_null());
        assert_eq!(value["exported_at"], "2024-05-01T09:30:00Z");
        assert_eq!(value["results"]["SWOT"]["strengths"][0], "Fiabilité");
        assert!(value["recs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_metadata_survives_re_export() {
        let metadata = ExportMetadata {
            analysis_id: Uuid::new_v4(),
            geo: Some("EU".into()),
            notes: Some("B2B only".into()),
        };
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let first = export_json(&AnalysisResult::new("ACME", "Sensors"), &metadata, at).unwrap();
        let text = String::from_utf8(first.bytes).unwrap();

        let recovered = ExportMetadata::from_json(&text).unwrap();
        assert_eq!(recovered, metadata);

        let result = AnalysisResult::from_json(&text).unwrap();
        let second = export_json(&result, &recovered, at).unwrap();
        assert_eq!(second.bytes, text.into_bytes());
    }

    #[test]
    fn test_metadata_from_plain_analysis() {
        let metadata = ExportMetadata::from_json(r#"{"company": "ACME", "analysis_id": "not-a-uuid"}"#).unwrap();
        assert!(metadata.geo.is_none());
        assert!(metadata.notes.is_none());
        assert_ne!(metadata.analysis_id, Uuid::nil());
    }

    #[test]
    fn test_blank_names_in_filename() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let export = export_json(&AnalysisResult::default(), &ExportMetadata::new(), at).unwrap();
        assert_eq!(export.filename, "Company_Product_20240102_strategy.json");
    }
}
