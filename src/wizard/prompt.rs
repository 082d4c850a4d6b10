//! Prompt templates for the analysis-generation backend.

use super::generate::GenerationRequest;
use crate::model::FrameworkName;
use std::fmt::Write;

const PREAMBLE: &str = "You are a senior strategy consultant. Respond with a single JSON object and no other text.";

fn context_block(request: &GenerationRequest) -> String {
    let mut out = String::with_capacity(256);
    let _ = writeln!(out, "Company: {}", request.company);
    let _ = writeln!(out, "Product/line: {}", request.product);
    if let Some(geo) = request.geo.as_deref().filter(|g| !g.trim().is_empty()) {
        let _ = writeln!(out, "Geography: {}", geo);
    }
    if !request.peers.is_empty() {
        let _ = writeln!(out, "Competitors: {}", request.peers.join(", "));
    }
    if let Some(notes) = request.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        let _ = writeln!(out, "Notes: {}", notes.trim());
    }
    out
}

fn schema_for(framework: FrameworkName, request: &GenerationRequest) -> String {
    match framework {
        FrameworkName::Swot => concat!(
            r#"{"S": ["..."], "W": ["..."], "O": ["..."], "T": ["..."]}"#,
            "\nGive 2-4 short items per list."
        )
        .to_string(),
        FrameworkName::Ansoff => concat!(
            r#"{"market_penetration": ["..."], "market_development": ["..."], "#,
            r#""product_development": ["..."], "diversification": ["..."]}"#,
            "\nGive 1-3 short growth plays per quadrant."
        )
        .to_string(),
        FrameworkName::Benchmark => {
            let mut columns = format!(r#""capability": "...", "{}": "High|Medium|Low""#, request.company);
            for peer in &request.peers {
                let _ = write!(columns, r#", "{}": "High|Medium|Low""#, peer);
            }
            format!(
                "{{\"peers\": {}, \"table\": [{{{}}}]}}\nRate 4-6 capabilities. Ratings are strings.",
                serde_json::to_string(&request.peers).unwrap_or_else(|_| "[]".to_string()),
                columns
            )
        },
    }
}

/// Prompt asking for one framework's output as JSON.
pub fn framework_prompt(request: &GenerationRequest, framework: FrameworkName) -> String {
    format!(
        "{}\n\n{}\nProduce a {} analysis for {} ({}) using exactly this JSON shape:\n{}\n",
        PREAMBLE,
        context_block(request),
        framework,
        request.company,
        request.product,
        schema_for(framework, request)
    )
}

/// Prompt asking for a ranked recommendation list derived from `results_json`.
pub fn recommendations_prompt(results_json: &str) -> String {
    format!(
        concat!(
            "{}\n\nFramework results:\n{}\n\n",
            "Derive up to 5 prioritized recommendations, most important first, as:\n",
            r#"{{"recs": [{{"title": "...", "impact": 1-5, "effort": 1-5, "rationale": "..."}}]}}"#,
            "\nImpact and effort are integers from 1 to 5.\n"
        ),
        PREAMBLE, results_json
    )
}

/// Remove a surrounding Markdown code fence (```` ```json ... ``` ````) if present.
pub fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // skip the info string ("json") on the opening line
    let body = match body.find('\n') {
        Some(pos) => &body[pos + 1..],
        None => body,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::new("ACME", "Sensors", vec![FrameworkName::Benchmark]).with_geo("EU")
    }

    #[test]
    fn test_framework_prompt_mentions_context() {
        let prompt = framework_prompt(&request(), FrameworkName::Benchmark);
        assert!(prompt.contains("Company: ACME"));
        assert!(prompt.contains("Geography: EU"));
        assert!(prompt.contains("Competitors: Rival A, Rival B"));
        assert!(prompt.contains(r#""Rival B": "High|Medium|Low""#));
        assert!(!prompt.contains("Notes:"));

        let prompt = framework_prompt(&request().with_notes("  B2B only "), FrameworkName::Swot);
        assert!(prompt.contains("Notes: B2B only\n"));
    }

    #[test]
    fn test_recommendations_prompt_embeds_results() {
        let prompt = recommendations_prompt(r#"{"SWOT":{}}"#);
        assert!(prompt.contains(r#"{"SWOT":{}}"#));
        assert!(prompt.contains(r#"{"recs": [{"title""#));
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n[]\n```\n"), "[]");
        assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
    }
}
