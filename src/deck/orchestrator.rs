//! Deck Orchestrator: runs the slide builders in order and packages the deck.

use super::builders;
use super::style::{Canvas, DeckStyle};
use crate::common::Result;
use crate::config::DeckConfig;
use crate::export::{ExportFormat, export_filename};
use crate::model::AnalysisResult;
use crate::ooxml::pptx::{DocumentProperties, Presentation};
use chrono::{Local, NaiveDate};

/// The report section a slide belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Title,
    Agenda,
    Snapshot,
    Swot,
    Ansoff,
    Benchmark,
    Recommendations,
    Appendix,
}

/// A finished deck: `.pptx` bytes, suggested filename and slide sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    /// One entry per slide, in deck order.
    pub sections: Vec<SectionKind>,
}

impl DeckArtifact {
    pub fn slide_count(&self) -> usize {
        self.sections.len()
    }
}

/// Builds decks with a fixed configuration and generation date.
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    config: DeckConfig,
    date: NaiveDate,
}

impl DeckBuilder {
    /// A builder dated today (local time).
    pub fn new(config: DeckConfig) -> Self {
        Self {
            config,
            date: Local::now().date_naive(),
        }
    }

    /// Builder method: pin the generation date for reproducible output.
    pub fn generated_on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Lay out every slide without serializing.
    ///
    /// Title, Agenda, Snapshot and Appendix are always present; SWOT, Ansoff,
    /// Benchmark and Recommendations follow in that order when they have data.
    pub fn compose(&self, result: &AnalysisResult) -> Result<(Presentation, Vec<SectionKind>)> {
        let mut pres = Presentation::widescreen();
        let style = DeckStyle::new(&self.config, Canvas::of(&pres));
        let company = result.display_company();
        let product = result.display_product();
        let mut sections = Vec::new();

        builders::title_slide(&mut pres, &style, company, product, self.date);
        sections.push(SectionKind::Title);

        builders::agenda_slide(&mut pres, &style, &self.config.agenda);
        sections.push(SectionKind::Agenda);

        builders::snapshot_slide(&mut pres, &style, &builders::snapshot_lines(result));
        sections.push(SectionKind::Snapshot);

        let optional = [
            (
                SectionKind::Swot,
                builders::swot_slide(&mut pres, &style, result.swot()).is_some(),
            ),
            (
                SectionKind::Ansoff,
                builders::ansoff_slide(&mut pres, &style, result.ansoff()).is_some(),
            ),
            (
                SectionKind::Benchmark,
                builders::benchmark_slide(&mut pres, &style, company, result.benchmark()).is_some(),
            ),
            (
                SectionKind::Recommendations,
                builders::recommendations_slide(
                    &mut pres,
                    &style,
                    result.recommendation_section(),
                    self.config.max_recommendations,
                )
                .is_some(),
            ),
        ];
        for (kind, emitted) in optional {
            if emitted {
                tracing::debug!(section = ?kind, "Emitted slide");
                sections.push(kind);
            } else {
                tracing::debug!(section = ?kind, "Skipped slide: no data");
            }
        }

        let raw = result.raw_json()?;
        let appendix = builders::appendix_slides(&mut pres, &style, &raw, self.config.appendix_chunk_chars);
        sections.extend(std::iter::repeat_n(SectionKind::Appendix, appendix));

        Ok((pres, sections))
    }

    /// Build the deck and serialize it.
    pub fn build(&self, result: &AnalysisResult) -> Result<DeckArtifact> {
        let (pres, sections) = self.compose(result)?;
        let company = result.display_company();
        let product = result.display_product();

        let props = DocumentProperties {
            title: format!("{} × {}", company, product),
            created: self.date,
            ..Default::default()
        };
        let bytes = pres.to_bytes(&props)?;
        let filename = export_filename(company, product, self.date, ExportFormat::Pptx);

        tracing::info!(
            slides = sections.len(),
            bytes = bytes.len(),
            filename = %filename,
            "Built strategy deck"
        );
        Ok(DeckArtifact {
            bytes,
            filename,
            sections,
        })
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new(DeckConfig::default())
    }
}

/// Build a deck with the default configuration, dated today.
pub fn build_deck(result: &AnalysisResult) -> Result<DeckArtifact> {
    DeckBuilder::default().build(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AnsoffMatrix, Benchmark, BenchmarkRow, FrameworkOutput, Recommendation, SwotAnalysis,
    };
    use pretty_assertions::assert_eq;

    fn may_first() -> DeckBuilder {
        DeckBuilder::default().generated_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    #[test]
    fn test_empty_result_gives_four_slides() {
        let mut result = AnalysisResult::new("ACME", "Sensors");
        result.results.insert(FrameworkOutput::Swot(SwotAnalysis::default()));
        result.results.insert(FrameworkOutput::Ansoff(AnsoffMatrix::default()));
        result.results.insert(FrameworkOutput::Benchmark(Benchmark::default()));

        let deck = may_first().build(&result).unwrap();
        assert_eq!(
            deck.sections,
            vec![
                SectionKind::Title,
                SectionKind::Agenda,
                SectionKind::Snapshot,
                SectionKind::Appendix
            ]
        );
    }

    #[test]
    fn test_filename() {
        let result = AnalysisResult::new("ACME Robotics", "Industrial IoT Sensors");
        let deck = may_first().build(&result).unwrap();
        assert_eq!(deck.filename, "ACME_Robotics_Industrial_IoT_Sensors_20240501_strategy.pptx");
    }

    #[test]
    fn test_full_order() {
        let mut result = AnalysisResult::new("ACME", "Sensors");
        result.results.insert(FrameworkOutput::Benchmark(Benchmark {
            peers: vec!["Rival A".into()],
            table: vec![BenchmarkRow::new("Speed").rating("ACME", "High")],
        }));
        result.results.insert(FrameworkOutput::Ansoff(AnsoffMatrix {
            market_penetration: vec!["Bundle".into()],
            ..Default::default()
        }));
        result.results.insert(FrameworkOutput::Swot(SwotAnalysis {
            threats: vec!["Price rivals".into()],
            ..Default::default()
        }));
        result.recommendations.push(Recommendation::new("OEM", 5, 2).unwrap());

        let (pres, sections) = may_first().compose(&result).unwrap();
        assert_eq!(
            sections,
            vec![
                SectionKind::Title,
                SectionKind::Agenda,
                SectionKind::Snapshot,
                SectionKind::Swot,
                SectionKind::Ansoff,
                SectionKind::Benchmark,
                SectionKind::Recommendations,
                SectionKind::Appendix,
            ]
        );
        assert_eq!(pres.slide_count(), sections.len());

        let table = pres.slides()[5]
            .shapes()
            .iter()
            .find_map(|s| s.table_rows())
            .unwrap();
        assert_eq!(table[0], vec!["Capability", "ACME", "Rival A"]);
    }

    #[test]
    fn test_reproducible_bytes() {
        let mut result = AnalysisResult::new("ACME", "Sensors");
        result.recommendations.push(Recommendation::new("OEM", 4, 3).unwrap());
        let first = may_first().build(&result).unwrap();
        let second = may_first().build(&result).unwrap();
        assert_eq!(first.sections, second.sections);
        assert!(first.bytes == second.bytes);
    }

    #[test]
    fn test_config_chunk_size_applies() {
        let config = DeckConfig {
            appendix_chunk_chars: 50,
            ..Default::default()
        };
        let result = AnalysisResult::new("A", "B");
        let raw_len = result.raw_json().unwrap().chars().count();
        let (pres, _) = DeckBuilder::new(config).compose(&result).unwrap();
        assert_eq!(pres.slide_count(), 3 + raw_len.div_ceil(50));
    }
}
