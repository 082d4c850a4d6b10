//! Analysis wizard.
//!
//! [`Wizard`] walks a user from company/product inputs through framework
//! selection, generation, review and recommendations to export. Generation
//! goes through the [`AnalysisGenerator`] seam; this crate provides an
//! offline generator and a prompt-driven one over any [`CompletionBackend`].

pub mod generate;
pub mod prompt;
pub mod state;

pub use generate::{
    AnalysisGenerator, CompletionBackend, DEFAULT_PEERS, GenerationError, GenerationRequest,
    OfflineGenerator, PromptedGenerator,
};
pub use state::{
    Analyzed, Draft, STEP_COUNT, StrategyInputs, Wizard, WizardError, WizardEvent, WizardState,
    list_to_text, text_to_list,
};
