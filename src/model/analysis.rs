use super::framework::{AnsoffMatrix, Benchmark, FrameworkName, FrameworkResults, SwotAnalysis};
use super::recommendation::Recommendation;
use super::section::Section;
use crate::common::Result;
use serde::{Deserialize, Serialize};

/// One strategy analysis: framework outputs plus ranked recommendations.
///
/// Every field except the names is optional on input; absent data degrades
/// to an omitted section rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub product: String,
    /// Frameworks the user selected, in selection order.
    #[serde(default)]
    pub frameworks: Vec<FrameworkName>,
    #[serde(default)]
    pub results: FrameworkResults,
    #[serde(default, rename = "recs", alias = "recommendations")]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Serialize)]
struct AppendixPayload<'a> {
    frameworks: &'a [FrameworkName],
    results: &'a FrameworkResults,
    recs: &'a [Recommendation],
}

impl AnalysisResult {
    pub fn new(company: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            product: product.into(),
            ..Default::default()
        }
    }

    /// Parse an analysis from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Company name for display; blank becomes "Company".
    pub fn display_company(&self) -> &str {
        non_blank(&self.company, "Company")
    }

    /// Product name for display; blank becomes "Product".
    pub fn display_product(&self) -> &str {
        non_blank(&self.product, "Product")
    }

    pub fn swot(&self) -> Section<'_, SwotAnalysis> {
        Section::of(self.results.swot.as_ref())
    }

    pub fn ansoff(&self) -> Section<'_, AnsoffMatrix> {
        Section::of(self.results.ansoff.as_ref())
    }

    pub fn benchmark(&self) -> Section<'_, Benchmark> {
        Section::of(self.results.benchmark.as_ref())
    }

    pub fn recommendation_section(&self) -> Section<'_, [Recommendation]> {
        Section::of(Some(self.recommendations.as_slice()))
    }

    /// Pretty JSON of the selection, results and recommendations.
    pub fn raw_json(&self) -> Result<String> {
        let payload = AppendixPayload {
            frameworks: &self.frameworks,
            results: &self.results,
            recs: &self.recommendations,
        };
        Ok(serde_json::to_string_pretty(&payload)?)
    }
}

fn non_blank<'a>(value: &'a str, fallback: &'static str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "company": "ACME Robotics",
        "product": "Industrial IoT Sensors",
        "frameworks": ["SWOT", "Benchmark"],
        "results": {
            "SWOT": {"S": ["Reliable hardware", "OEM partners"], "W": ["Brand"], "O": ["Analytics"], "T": ["Price rivals"]},
            "Benchmark": {"peers": ["Rival A"], "table": []}
        },
        "recs": [{"title": "OEM Bundle Program", "impact": 5, "effort": 3}]
    }"#;

    #[test]
    fn test_parse_sample() {
        let result = AnalysisResult::from_json(SAMPLE).unwrap();
        assert_eq!(result.frameworks, vec![FrameworkName::Swot, FrameworkName::Benchmark]);
        assert!(result.swot().is_present());
        assert!(!result.ansoff().is_present());
        // An empty table counts as absent.
        assert!(!result.benchmark().is_present());
        assert_eq!(result.recommendations[0].impact.get(), 5);
    }

    #[test]
    fn test_display_names_fall_back() {
        let result = AnalysisResult::new("  ", "");
        assert_eq!(result.display_company(), "Company");
        assert_eq!(result.display_product(), "Product");
        assert_eq!(AnalysisResult::new(" ACME ", "X").display_company(), "ACME");
    }

    #[test]
    fn test_raw_json_keys() {
        let result = AnalysisResult::from_json(SAMPLE).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result.raw_json().unwrap()).unwrap();
        assert!(value.get("company").is_none());
        assert_eq!(value["frameworks"][0], "SWOT");
        assert_eq!(value["recs"][0]["title"], "OEM Bundle Program");
        assert_eq!(value["results"]["SWOT"]["strengths"][1], "OEM partners");
    }

    #[test]
    fn test_empty_input_is_valid() {
        let result = AnalysisResult::from_json("{}").unwrap();
        assert!(!result.recommendation_section().is_present());
        assert!(result.results.is_empty());
    }
}
