//! The wizard as an explicit state machine.
//!
//! Five steps: Inputs → FrameworkSelection → Review → Recommendations →
//! Export. Each state owns its typed payload; events move between states or
//! edit the payload in place. A rejected event leaves the state untouched.

use super::generate::{AnalysisGenerator, DEFAULT_PEERS, GenerationRequest};
use crate::common::Result;
use crate::deck::{DeckArtifact, DeckBuilder};
use crate::export::{ExportMetadata, JsonExport, export_json};
use crate::model::{AnalysisResult, AnsoffMatrix, FrameworkName, Recommendation, SwotAnalysis};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Number of wizard steps.
pub const STEP_COUNT: usize = 5;

/// Rejected wizard input or transition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("{0} is required")]
    MissingInput(&'static str),

    #[error("select at least one framework")]
    NoFrameworks,

    #[error("'{event}' is not allowed in the {state} step")]
    InvalidTransition { state: &'static str, event: &'static str },
}

/// What the user typed on the first step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyInputs {
    pub company: String,
    pub product: String,
    pub geo: Option<String>,
    pub notes: Option<String>,
}

impl StrategyInputs {
    pub fn new(company: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            product: product.into(),
            geo: None,
            notes: None,
        }
    }

    pub fn with_geo(mut self, geo: impl Into<String>) -> Self {
        self.geo = Some(geo.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Company and product must be non-blank.
    pub fn validate(&self) -> std::result::Result<(), WizardError> {
        if self.company.trim().is_empty() {
            return Err(WizardError::MissingInput("company"));
        }
        if self.product.trim().is_empty() {
            return Err(WizardError::MissingInput("product"));
        }
        Ok(())
    }

    fn normalized(mut self) -> Self {
        self.company = self.company.trim().to_string();
        self.product = self.product.trim().to_string();
        self.geo = self.geo.filter(|g| !g.trim().is_empty());
        self.notes = self.notes.filter(|n| !n.trim().is_empty());
        self
    }
}

/// Payload of the first two steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub inputs: StrategyInputs,
    pub frameworks: Vec<FrameworkName>,
    /// Analysis from an earlier run, kept when the user steps back.
    pub previous: Option<AnalysisResult>,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            inputs: StrategyInputs::default(),
            frameworks: vec![FrameworkName::Swot, FrameworkName::Ansoff],
            previous: None,
        }
    }
}

/// Payload once an analysis exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analyzed {
    pub inputs: StrategyInputs,
    pub analysis: AnalysisResult,
    /// Message of the generation failure, when generation fell back to an empty analysis.
    pub generation_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardState {
    Inputs(Draft),
    FrameworkSelection(Draft),
    Review(Analyzed),
    Recommendations(Analyzed),
    Export(Analyzed),
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inputs(_) => "Inputs",
            Self::FrameworkSelection(_) => "FrameworkSelection",
            Self::Review(_) => "Review",
            Self::Recommendations(_) => "Recommendations",
            Self::Export(_) => "Export",
        }
    }

    /// 1-based step number.
    pub fn step(&self) -> usize {
        match self {
            Self::Inputs(_) => 1,
            Self::FrameworkSelection(_) => 2,
            Self::Review(_) => 3,
            Self::Recommendations(_) => 4,
            Self::Export(_) => 5,
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Review(a) | Self::Recommendations(a) | Self::Export(a) => Some(&a.analysis),
            Self::Inputs(_) | Self::FrameworkSelection(_) => None,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::Inputs(Draft::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    SubmitInputs(StrategyInputs),
    SelectFrameworks(Vec<FrameworkName>),
    Generate,
    EditSwot(SwotAnalysis),
    EditAnsoff(AnsoffMatrix),
    ProceedToRecommendations,
    AddRecommendation(Recommendation),
    ProceedToExport,
    Back,
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitInputs(_) => "SubmitInputs",
            Self::SelectFrameworks(_) => "SelectFrameworks",
            Self::Generate => "Generate",
            Self::EditSwot(_) => "EditSwot",
            Self::EditAnsoff(_) => "EditAnsoff",
            Self::ProceedToRecommendations => "ProceedToRecommendations",
            Self::AddRecommendation(_) => "AddRecommendation",
            Self::ProceedToExport => "ProceedToExport",
            Self::Back => "Back",
        }
    }
}

type Transition = std::result::Result<WizardState, (WizardState, WizardError)>;

/// Drives the wizard states, calling the generator on `Generate`.
#[derive(Debug)]
pub struct Wizard<G> {
    state: WizardState,
    generator: G,
    peers: Vec<String>,
    metadata: ExportMetadata,
}

impl<G: AnalysisGenerator> Wizard<G> {
    pub fn new(generator: G) -> Self {
        Self {
            state: WizardState::default(),
            generator,
            peers: DEFAULT_PEERS.iter().map(|p| p.to_string()).collect(),
            metadata: ExportMetadata::new(),
        }
    }

    /// Builder method: competitors passed to the generator.
    pub fn with_peers(mut self, peers: Vec<String>) -> Self {
        self.peers = peers;
        self
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn metadata(&self) -> &ExportMetadata {
        &self.metadata
    }

    /// `"Step n of 5"`.
    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.state.step(), STEP_COUNT)
    }

    /// Fraction of the wizard reached, in (0, 1].
    pub fn progress(&self) -> f32 {
        self.state.step() as f32 / STEP_COUNT as f32
    }

    /// Apply an event. On error the current state is kept.
    pub fn handle(&mut self, event: WizardEvent) -> std::result::Result<&WizardState, WizardError> {
        let current = std::mem::take(&mut self.state);
        match self.transition(current, event) {
            Ok(next) => {
                tracing::debug!(state = next.name(), "Wizard transition");
                self.state = next;
                Ok(&self.state)
            },
            Err((kept, err)) => {
                self.state = kept;
                Err(err)
            },
        }
    }

    fn transition(&self, state: WizardState, event: WizardEvent) -> Transition {
        use WizardEvent as E;
        use WizardState as S;

        match (state, event) {
            (S::Inputs(mut draft), E::SubmitInputs(inputs)) => {
                if let Err(err) = inputs.validate() {
                    draft.inputs = inputs;
                    return Err((S::Inputs(draft), err));
                }
                draft.inputs = inputs.normalized();
                Ok(S::FrameworkSelection(draft))
            },
            (S::FrameworkSelection(mut draft), E::SelectFrameworks(mut frameworks)) => {
                let mut seen = Vec::with_capacity(frameworks.len());
                frameworks.retain(|f| {
                    let fresh = !seen.contains(f);
                    seen.push(*f);
                    fresh
                });
                draft.frameworks = frameworks;
                Ok(S::FrameworkSelection(draft))
            },
            (S::FrameworkSelection(draft), E::Generate) => {
                if draft.frameworks.is_empty() {
                    return Err((S::FrameworkSelection(draft), WizardError::NoFrameworks));
                }
                Ok(S::Review(self.generate(draft)))
            },
            (S::Review(mut analyzed), E::EditSwot(swot)) => {
                analyzed.analysis.results.swot = Some(swot);
                Ok(S::Review(analyzed))
            },
            (S::Review(mut analyzed), E::EditAnsoff(ansoff)) => {
                analyzed.analysis.results.ansoff = Some(ansoff);
                Ok(S::Review(analyzed))
            },
            (S::Review(analyzed), E::ProceedToRecommendations) => Ok(S::Recommendations(analyzed)),
            (S::Recommendations(mut analyzed), E::AddRecommendation(mut rec)) => {
                rec.title = rec.title.trim().to_string();
                if rec.title.is_empty() {
                    return Err((S::Recommendations(analyzed), WizardError::MissingInput("title")));
                }
                rec.rationale = rec
                    .rationale
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty());
                analyzed.analysis.recommendations.push(rec);
                Ok(S::Recommendations(analyzed))
            },
            (S::Recommendations(analyzed), E::ProceedToExport) => Ok(S::Export(analyzed)),

            (S::FrameworkSelection(draft), E::Back) => Ok(S::Inputs(draft)),
            (S::Review(analyzed), E::Back) => Ok(S::FrameworkSelection(Draft {
                inputs: analyzed.inputs,
                frameworks: analyzed.analysis.frameworks.clone(),
                previous: Some(analyzed.analysis),
            })),
            (S::Recommendations(analyzed), E::Back) => Ok(S::Review(analyzed)),
            (S::Export(analyzed), E::Back) => Ok(S::Recommendations(analyzed)),

            (state, event) => {
                let err = WizardError::InvalidTransition {
                    state: state.name(),
                    event: event.name(),
                };
                Err((state, err))
            },
        }
    }

    /// Run the generator. Failures fall back to an empty analysis with the
    /// error recorded, so the remaining steps still work.
    fn generate(&self, draft: Draft) -> Analyzed {
        let inputs = draft.inputs;
        let mut request = GenerationRequest::new(&inputs.company, &inputs.product, draft.frameworks.clone())
            .with_peers(self.peers.clone());
        request.geo = inputs.geo.clone();
        request.notes = inputs.notes.clone();

        let mut analysis = draft
            .previous
            .unwrap_or_else(|| AnalysisResult::new(&inputs.company, &inputs.product));
        analysis.company = inputs.company.clone();
        analysis.product = inputs.product.clone();
        analysis.frameworks = draft.frameworks;

        let outcome = self.generator.generate_frameworks(&request).and_then(|results| {
            analysis.results.merge(results);
            self.generator.generate_recommendations(&analysis.results)
        });

        match outcome {
            Ok(recs) => {
                tracing::info!(
                    frameworks = analysis.frameworks.len(),
                    recommendations = recs.len(),
                    "Analysis generated"
                );
                analysis.recommendations = recs;
                Analyzed {
                    inputs,
                    analysis,
                    generation_error: None,
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "Generation failed; continuing with an empty analysis");
                let mut empty = AnalysisResult::new(&inputs.company, &inputs.product);
                empty.frameworks = analysis.frameworks;
                Analyzed {
                    inputs,
                    analysis: empty,
                    generation_error: Some(err.to_string()),
                }
            },
        }
    }

    fn export_analysis(&self, action: &'static str) -> std::result::Result<&Analyzed, WizardError> {
        match &self.state {
            WizardState::Export(analyzed) => Ok(analyzed),
            other => Err(WizardError::InvalidTransition {
                state: other.name(),
                event: action,
            }),
        }
    }

    /// Build the deck. Only allowed in the Export step.
    pub fn export_deck(&self, builder: &DeckBuilder) -> Result<DeckArtifact> {
        let analyzed = self.export_analysis("ExportDeck")?;
        builder.build(&analyzed.analysis)
    }

    /// Build the JSON export. Only allowed in the Export step.
    pub fn export_json(&self, exported_at: DateTime<Utc>) -> Result<JsonExport> {
        let analyzed = self.export_analysis("ExportJson")?;
        let metadata = ExportMetadata {
            geo: analyzed.inputs.geo.clone(),
            notes: analyzed.inputs.notes.clone(),
            ..self.metadata.clone()
        };
        export_json(&analyzed.analysis, &metadata, exported_at)
    }
}

/// Render a list for a free-text editor, one item per line.
pub fn list_to_text(items: &[String]) -> String {
    items.join("\n")
}

/// Parse free text back into a list: one item per line, with surrounding
/// whitespace and `-`/`•` bullets trimmed. Lines left empty are dropped.
pub fn text_to_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '•'))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::generate::{GenerationError, OfflineGenerator};
    use crate::model::FrameworkResults;
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;

    struct FailingGenerator;

    impl AnalysisGenerator for FailingGenerator {
        fn generate_frameworks(
            &self,
            _request: &GenerationRequest,
        ) -> std::result::Result<FrameworkResults, GenerationError> {
            Err(GenerationError::Backend("timeout".to_string()))
        }

        fn generate_recommendations(
            &self,
            _results: &FrameworkResults,
        ) -> std::result::Result<Vec<Recommendation>, GenerationError> {
            Ok(Vec::new())
        }
    }

    fn to_review<G: AnalysisGenerator>(wizard: &mut Wizard<G>) {
        wizard
            .handle(WizardEvent::SubmitInputs(StrategyInputs::new("ACME Robotics", "Sensors")))
            .unwrap();
        wizard.handle(WizardEvent::Generate).unwrap();
    }

    #[test]
    fn test_inputs_required() {
        let mut wizard = Wizard::new(OfflineGenerator);
        let err = wizard
            .handle(WizardEvent::SubmitInputs(StrategyInputs::new("ACME", "  ")))
            .unwrap_err();
        assert_eq!(err, WizardError::MissingInput("product"));
        assert_eq!(wizard.state().step(), 1);
        assert_eq!(wizard.progress_label(), "Step 1 of 5");
    }

    #[test]
    fn test_no_frameworks_rejected() {
        let mut wizard = Wizard::new(OfflineGenerator);
        wizard
            .handle(WizardEvent::SubmitInputs(StrategyInputs::new("ACME", "Sensors")))
            .unwrap();
        wizard.handle(WizardEvent::SelectFrameworks(Vec::new())).unwrap();
        assert_eq!(wizard.handle(WizardEvent::Generate).unwrap_err(), WizardError::NoFrameworks);
        assert_eq!(wizard.state().name(), "FrameworkSelection");
    }

    #[test]
    fn test_invalid_transition_keeps_state() {
        let mut wizard = Wizard::new(OfflineGenerator);
        let err = wizard.handle(WizardEvent::ProceedToExport).unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidTransition {
                state: "Inputs",
                event: "ProceedToExport"
            }
        );
        assert_eq!(wizard.handle(WizardEvent::Back).unwrap_err().to_string(), "'Back' is not allowed in the Inputs step");
    }

    #[test]
    fn test_full_run() {
        let mut wizard = Wizard::new(OfflineGenerator);
        to_review(&mut wizard);
        assert_eq!(wizard.progress_label(), "Step 3 of 5");

        let analysis = wizard.state().analysis().unwrap();
        assert_eq!(analysis.frameworks, vec![FrameworkName::Swot, FrameworkName::Ansoff]);
        assert!(analysis.results.benchmark.is_none());
        assert_eq!(analysis.recommendations.len(), 3);

        wizard
            .handle(WizardEvent::EditSwot(SwotAnalysis {
                strengths: text_to_list("- Reliable hardware\n\n• OEM partners"),
                ..Default::default()
            }))
            .unwrap();
        wizard.handle(WizardEvent::ProceedToRecommendations).unwrap();
        wizard
            .handle(WizardEvent::AddRecommendation(
                Recommendation::new("  Security proof pack ", 3, 2).unwrap().with_rationale(" "),
            ))
            .unwrap();
        wizard.handle(WizardEvent::ProceedToExport).unwrap();
        assert_eq!(wizard.progress(), 1.0);

        let analysis = wizard.state().analysis().unwrap();
        assert_eq!(
            analysis.results.swot.as_ref().unwrap().strengths,
            vec!["Reliable hardware", "OEM partners"]
        );
        assert_eq!(analysis.recommendations[3].title, "Security proof pack");

        let deck = wizard
            .export_deck(&DeckBuilder::default().generated_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()))
            .unwrap();
        assert_eq!(deck.filename, "ACME_Robotics_Sensors_20240501_strategy.pptx");

        let json = wizard
            .export_json(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
            .unwrap();
        assert_eq!(json.filename, "ACME_Robotics_Sensors_20240501_strategy.json");
    }

    #[test]
    fn test_blank_recommendation_title_rejected() {
        let mut wizard = Wizard::new(OfflineGenerator);
        to_review(&mut wizard);
        wizard.handle(WizardEvent::ProceedToRecommendations).unwrap();
        let rec = Recommendation::new("   ", 4, 2).unwrap();
        assert_eq!(
            wizard.handle(WizardEvent::AddRecommendation(rec)).unwrap_err(),
            WizardError::MissingInput("title")
        );
    }

    #[test]
    fn test_generation_failure_falls_back() {
        let mut wizard = Wizard::new(FailingGenerator);
        to_review(&mut wizard);
        match wizard.state() {
            WizardState::Review(analyzed) => {
                assert_eq!(
                    analyzed.generation_error.as_deref(),
                    Some("backend error: timeout")
                );
                assert!(analyzed.analysis.results.is_empty());
                assert!(analyzed.analysis.recommendations.is_empty());
            },
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_back_keeps_analysis() {
        let mut wizard = Wizard::new(OfflineGenerator);
        to_review(&mut wizard);
        wizard.handle(WizardEvent::Back).unwrap();
        match wizard.state() {
            WizardState::FrameworkSelection(draft) => {
                assert_eq!(draft.inputs.company, "ACME Robotics");
                assert!(draft.previous.as_ref().is_some_and(|a| a.results.swot.is_some()));
            },
            other => panic!("unexpected state {:?}", other),
        }

        // regenerating with Benchmark merges into the earlier results
        wizard
            .handle(WizardEvent::SelectFrameworks(vec![FrameworkName::Benchmark, FrameworkName::Benchmark]))
            .unwrap();
        wizard.handle(WizardEvent::Generate).unwrap();
        let analysis = wizard.state().analysis().unwrap();
        assert_eq!(analysis.frameworks, vec![FrameworkName::Benchmark]);
        assert!(analysis.results.swot.is_some());
        assert!(analysis.results.benchmark.is_some());
    }

    #[test]
    fn test_export_only_in_export_step() {
        let mut wizard = Wizard::new(OfflineGenerator);
        to_review(&mut wizard);
        assert!(wizard.export_deck(&DeckBuilder::default()).is_err());
    }

    #[test]
    fn test_text_to_list() {
        assert_eq!(
            text_to_list("  - Bundle add-ons \n\t\n•Enter Canada\n-\n"),
            vec!["Bundle add-ons", "Enter Canada"]
        );
        assert_eq!(list_to_text(&["a".to_string(), "b".to_string()]), "a\nb");
    }
}
