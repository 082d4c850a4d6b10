use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use strategy_deck::deck::DeckBuilder;
use strategy_deck::export::{ExportMetadata, export_json};
use strategy_deck::model::{AnalysisResult, FrameworkName};
use strategy_deck::wizard::{OfflineGenerator, StrategyInputs, Wizard, WizardEvent};

#[test]
fn test_json_export_feeds_deck_build() {
    let mut wizard = Wizard::new(OfflineGenerator);
    wizard
        .handle(WizardEvent::SubmitInputs(
            StrategyInputs::new("ACME Robotics", "Industrial IoT Sensors").with_geo("EU"),
        ))
        .unwrap();
    wizard
        .handle(WizardEvent::SelectFrameworks(vec![
            FrameworkName::Swot,
            FrameworkName::Ansoff,
            FrameworkName::Benchmark,
        ]))
        .unwrap();
    wizard.handle(WizardEvent::Generate).unwrap();
    wizard.handle(WizardEvent::ProceedToRecommendations).unwrap();
    wizard.handle(WizardEvent::ProceedToExport).unwrap();

    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let export = wizard.export_json(at).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&export.bytes).unwrap();
    assert_eq!(value["geo"], "EU");
    assert_eq!(value["analysis_id"], wizard.metadata().analysis_id.to_string());

    // The export is itself a valid deck input.
    let reread: AnalysisResult = serde_json::from_slice(&export.bytes).unwrap();
    assert_eq!(Some(&reread), wizard.state().analysis());

    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let from_export = DeckBuilder::default().generated_on(date).build(&reread).unwrap();
    let from_wizard = wizard
        .export_deck(&DeckBuilder::default().generated_on(date))
        .unwrap();
    assert_eq!(from_export.sections, from_wizard.sections);
    assert!(from_export.bytes == from_wizard.bytes);
}

#[test]
fn test_export_without_optional_metadata() {
    let result = AnalysisResult::new("ACME", "Sensors");
    let export = export_json(
        &result,
        &ExportMetadata::new(),
        Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
    )
    .unwrap();
    assert_eq!(export.filename, "ACME_Sensors_20241231_strategy.json");

    let value: serde_json::Value = serde_json::from_slice(&export.bytes).unwrap();
    assert!(value["geo"].is_null());
    assert_eq!(value["frameworks"], serde_json::json!([]));
    assert_eq!(value["results"], serde_json::json!({}));
}
