//! Analysis generation collaborator.
//!
//! The wizard talks to an [`AnalysisGenerator`]; this module ships an offline
//! generator with canned content and a prompt-driven one that delegates the
//! model call to a caller-supplied [`CompletionBackend`].

use super::prompt::{framework_prompt, recommendations_prompt, strip_code_fences};
use crate::model::{
    AnsoffMatrix, Benchmark, BenchmarkRow, FrameworkName, FrameworkOutput, FrameworkResults,
    Recommendation, SwotAnalysis,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Peers used when the caller names none.
pub const DEFAULT_PEERS: [&str; 2] = ["Rival A", "Rival B"];

/// Failures of the generation collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The completion backend itself failed (network, quota, ...)
    #[error("backend error: {0}")]
    Backend(String),

    /// The backend answered with something that is not the expected JSON
    #[error("could not parse {what} from model output: {reason}")]
    Unparseable { what: String, reason: String },
}

/// Everything a generator needs to analyze one company/product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub company: String,
    pub product: String,
    pub frameworks: Vec<FrameworkName>,
    pub notes: Option<String>,
    pub geo: Option<String>,
    pub peers: Vec<String>,
}

impl GenerationRequest {
    pub fn new(company: impl Into<String>, product: impl Into<String>, frameworks: Vec<FrameworkName>) -> Self {
        Self {
            company: company.into(),
            product: product.into(),
            frameworks,
            notes: None,
            geo: None,
            peers: DEFAULT_PEERS.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_geo(mut self, geo: impl Into<String>) -> Self {
        self.geo = Some(geo.into());
        self
    }

    pub fn with_peers(mut self, peers: Vec<String>) -> Self {
        self.peers = peers;
        self
    }
}

/// Produces framework outputs and recommendations for the wizard.
pub trait AnalysisGenerator {
    /// One output per selected framework.
    fn generate_frameworks(&self, request: &GenerationRequest) -> Result<FrameworkResults, GenerationError>;

    /// A ranked recommendation list derived from `results`.
    fn generate_recommendations(&self, results: &FrameworkResults) -> Result<Vec<Recommendation>, GenerationError>;
}

impl<G: AnalysisGenerator + ?Sized> AnalysisGenerator for Box<G> {
    fn generate_frameworks(&self, request: &GenerationRequest) -> Result<FrameworkResults, GenerationError> {
        (**self).generate_frameworks(request)
    }

    fn generate_recommendations(&self, results: &FrameworkResults) -> Result<Vec<Recommendation>, GenerationError> {
        (**self).generate_recommendations(results)
    }
}

/// Deterministic canned analysis for demos and tests. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl OfflineGenerator {
    fn swot() -> SwotAnalysis {
        SwotAnalysis {
            strengths: strings(&["Clear value proposition", "Growing customer base"]),
            weaknesses: strings(&["Limited brand awareness"]),
            opportunities: strings(&["Upsell existing accounts"]),
            threats: strings(&["Price pressure from rivals"]),
        }
    }

    fn ansoff() -> AnsoffMatrix {
        AnsoffMatrix {
            market_penetration: strings(&["Bundle add-ons"]),
            market_development: strings(&["Enter 1–2 adjacent regions"]),
            product_development: strings(&["Launch analytics-lite"]),
            diversification: strings(&["Vertical solution pack"]),
        }
    }

    fn benchmark(request: &GenerationRequest) -> Benchmark {
        let ratings = [
            ("Product breadth", ["High", "Medium", "Medium"]),
            ("Pricing", ["Medium", "High", "Low"]),
            ("Customer support", ["High", "Medium", "Low"]),
        ];
        let table = ratings
            .iter()
            .map(|(capability, levels)| {
                let mut row = BenchmarkRow::new(*capability).rating(&request.company, levels[0]);
                for (peer, level) in request.peers.iter().zip(levels[1..].iter().cycle()) {
                    row = row.rating(peer, *level);
                }
                row
            })
            .collect();
        Benchmark {
            peers: request.peers.clone(),
            table,
        }
    }
}

impl AnalysisGenerator for OfflineGenerator {
    fn generate_frameworks(&self, request: &GenerationRequest) -> Result<FrameworkResults, GenerationError> {
        let mut results = FrameworkResults::new();
        for framework in &request.frameworks {
            let output = match framework {
                FrameworkName::Swot => FrameworkOutput::Swot(Self::swot()),
                FrameworkName::Ansoff => FrameworkOutput::Ansoff(Self::ansoff()),
                FrameworkName::Benchmark => FrameworkOutput::Benchmark(Self::benchmark(request)),
            };
            results.insert(output);
        }
        Ok(results)
    }

    fn generate_recommendations(&self, _results: &FrameworkResults) -> Result<Vec<Recommendation>, GenerationError> {
        let canned = [
            ("OEM bundle program", 5, 3),
            ("Managed calibration add-on", 4, 3),
            ("Self-serve onboarding refresh", 1, 2),
        ];
        canned
            .into_iter()
            .map(|(title, impact, effort)| {
                Recommendation::new(title, impact, effort)
                    .map(|r| r.with_rationale("Derived from analysis."))
                    .map_err(|e| GenerationError::Unparseable {
                        what: "recommendation".to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }
}

/// Sends a prompt to a language model and returns its raw text reply.
pub trait CompletionBackend {
    fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<F> CompletionBackend for F
where
    F: Fn(&str) -> Result<String, GenerationError>,
{
    fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self(prompt)
    }
}

/// Accepts a bare list or a `{"recs": [...]}` / `{"recommendations": [...]}` wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationReply {
    List(Vec<Recommendation>),
    Wrapped {
        #[serde(alias = "recommendations")]
        recs: Vec<Recommendation>,
    },
}

/// Builds prompts per framework and parses the backend's JSON replies.
#[derive(Debug, Clone)]
pub struct PromptedGenerator<B> {
    backend: B,
}

impl<B: CompletionBackend> PromptedGenerator<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn ask<T: DeserializeOwned>(&self, prompt: &str, what: &str) -> Result<T, GenerationError> {
        let reply = self.backend.complete(prompt)?;
        serde_json::from_str(strip_code_fences(&reply)).map_err(|e| GenerationError::Unparseable {
            what: what.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<B: CompletionBackend> AnalysisGenerator for PromptedGenerator<B> {
    fn generate_frameworks(&self, request: &GenerationRequest) -> Result<FrameworkResults, GenerationError> {
        let mut results = FrameworkResults::new();
        for &framework in &request.frameworks {
            let prompt = framework_prompt(request, framework);
            let output = match framework {
                FrameworkName::Swot => FrameworkOutput::Swot(self.ask(&prompt, "SWOT")?),
                FrameworkName::Ansoff => FrameworkOutput::Ansoff(self.ask(&prompt, "Ansoff")?),
                FrameworkName::Benchmark => {
                    let mut bench: Benchmark = self.ask(&prompt, "Benchmark")?;
                    if bench.peers.is_empty() {
                        bench.peers = request.peers.clone();
                    }
                    FrameworkOutput::Benchmark(bench)
                },
            };
            tracing::debug!(framework = %framework, "Generated framework output");
            results.insert(output);
        }
        Ok(results)
    }

    fn generate_recommendations(&self, results: &FrameworkResults) -> Result<Vec<Recommendation>, GenerationError> {
        let results_json = serde_json::to_string_pretty(results).map_err(|e| GenerationError::Unparseable {
            what: "framework results".to_string(),
            reason: e.to_string(),
        })?;
        let reply: RecommendationReply = self.ask(&recommendations_prompt(&results_json), "recommendations")?;
        Ok(match reply {
            RecommendationReply::List(recs) | RecommendationReply::Wrapped { recs } => recs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[test]
    fn test_offline_respects_selection() {
        let request = GenerationRequest::new("ACME", "Sensors", vec![FrameworkName::Benchmark]);
        let results = OfflineGenerator.generate_frameworks(&request).unwrap();
        assert_eq!(results.names(), vec![FrameworkName::Benchmark]);

        let bench = results.benchmark.unwrap();
        assert_eq!(bench.peers, vec!["Rival A", "Rival B"]);
        assert_eq!(bench.table[0].rating_for("ACME"), "High");
        assert_eq!(bench.table[0].rating_for("Rival B"), "Medium");
    }

    #[test]
    fn test_offline_recommendations_are_valid() {
        let recs = OfflineGenerator
            .generate_recommendations(&FrameworkResults::new())
            .unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].title, "OEM bundle program");
    }

    #[test]
    fn test_prompted_parses_fenced_reply() {
        let prompts = RefCell::new(Vec::new());
        let backend = |prompt: &str| -> Result<String, GenerationError> {
            prompts.borrow_mut().push(prompt.to_string());
            Ok("```json\n{\"S\":[\"Reliable hardware\"],\"W\":[],\"O\":[],\"T\":[]}\n```".to_string())
        };
        let generator = PromptedGenerator::new(backend);
        let request = GenerationRequest::new("ACME", "Sensors", vec![FrameworkName::Swot]);
        let results = generator.generate_frameworks(&request).unwrap();

        assert_eq!(results.swot.unwrap().strengths, vec!["Reliable hardware"]);
        assert_eq!(prompts.borrow().len(), 1);
        assert!(prompts.borrow()[0].contains("SWOT"));
    }

    #[test]
    fn test_prompted_recommendation_shapes() {
        let wrapped = PromptedGenerator::new(|_: &str| -> Result<String, GenerationError> {
            Ok(r#"{"recs":[{"title":"OEM","impact":5,"effort":2}]}"#.to_string())
        });
        let recs = wrapped.generate_recommendations(&FrameworkResults::new()).unwrap();
        assert_eq!(recs[0].impact.get(), 5);

        let bare = PromptedGenerator::new(|_: &str| -> Result<String, GenerationError> {
            Ok(r#"[{"title":"Loyalty pricing"}]"#.to_string())
        });
        let recs = bare.generate_recommendations(&FrameworkResults::new()).unwrap();
        assert_eq!(recs[0].effort.get(), 3);
    }

    #[test]
    fn test_prompted_reports_garbage() {
        let generator = PromptedGenerator::new(|_: &str| -> Result<String, GenerationError> {
            Ok("Here is your SWOT: strong brand".to_string())
        });
        let request = GenerationRequest::new("ACME", "Sensors", vec![FrameworkName::Swot]);
        assert!(matches!(
            generator.generate_frameworks(&request),
            Err(GenerationError::Unparseable { .. })
        ));
    }

    #[test]
    fn test_backend_error_propagates() {
        let generator = PromptedGenerator::new(|_: &str| -> Result<String, GenerationError> {
            Err(GenerationError::Backend("quota exceeded".to_string()))
        });
        assert_eq!(
            generator.generate_recommendations(&FrameworkResults::new()),
            Err(GenerationError::Backend("quota exceeded".to_string()))
        );
    }
}
