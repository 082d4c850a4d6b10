use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};
use strategy_deck::deck::{DeckBuilder, SectionKind};
use strategy_deck::model::AnalysisResult;
use zip::ZipArchive;

const SAMPLE: &str = r#"{
    "company": "ACME Robotics",
    "product": "Industrial IoT Sensors",
    "frameworks": ["SWOT", "Ansoff", "Benchmark"],
    "results": {
        "SWOT": {"S": ["Reliable hardware", "OEM partners"], "W": ["Brand"], "O": ["Analytics"], "T": ["Price rivals"]},
        "Ansoff": {
            "market_penetration": ["Bundle add-ons", "Loyalty pricing"],
            "market_development": ["Enter Canada"],
            "product_development": ["Managed calibration"],
            "diversification": ["Edge-AI module"]
        },
        "Benchmark": {
            "peers": ["Rival A", "Rival B"],
            "table": [
                {"capability": "Sensor accuracy", "ACME Robotics": "High", "Rival A": "High", "Rival B": "Medium"},
                {"capability": "Cloud analytics", "ACME Robotics": "Medium", "Rival A": "High"}
            ]
        }
    },
    "recs": [
        {"title": "OEM Bundle Program", "impact": 5, "effort": 3},
        {"title": "Managed Calibration Add-On", "impact": 4, "effort": 3},
        {"title": "Security Proof Pack", "impact": 3, "effort": 2}
    ]
}"#;

fn builder() -> DeckBuilder {
    DeckBuilder::default().generated_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
}

fn open(bytes: &[u8]) -> ZipArchive<Cursor<&[u8]>> {
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

fn read_member(archive: &mut ZipArchive<Cursor<&[u8]>>, name: &str) -> String {
    let mut text = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut text).unwrap();
    text
}

/// XML 1.0 `Char` production; quick-xml does not enforce it.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

fn assert_well_formed(name: &str, xml: &str) {
    if let Some((offset, c)) = xml.char_indices().find(|(_, c)| !is_xml_char(*c)) {
        panic!("{} has forbidden character U+{:04X} at byte {}", name, c as u32, offset);
    }
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("{} is not well formed: {}", name, e),
        }
    }
}

fn slide_count(archive: &ZipArchive<Cursor<&[u8]>>) -> usize {
    archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count()
}

#[test]
fn test_every_part_is_well_formed_xml() {
    let result = AnalysisResult::from_json(SAMPLE).unwrap();
    let deck = builder().build(&result).unwrap();
    let mut archive = open(&deck.bytes);

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    assert_eq!(names[0], "[Content_Types].xml");
    for required in [
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/_rels/slide1.xml.rels",
    ] {
        assert!(names.iter().any(|n| n == required), "missing {}", required);
    }

    for name in &names {
        let xml = read_member(&mut archive, name);
        assert_well_formed(name, &xml);
    }
}

#[test]
fn test_full_deck_sections_and_content() {
    let result = AnalysisResult::from_json(SAMPLE).unwrap();
    let deck = builder().build(&result).unwrap();
    assert_eq!(
        &deck.sections[..7],
        &[
            SectionKind::Title,
            SectionKind::Agenda,
            SectionKind::Snapshot,
            SectionKind::Swot,
            SectionKind::Ansoff,
            SectionKind::Benchmark,
            SectionKind::Recommendations,
        ]
    );
    assert!(deck.sections[7..].iter().all(|s| *s == SectionKind::Appendix));

    let mut archive = open(&deck.bytes);
    assert_eq!(slide_count(&archive), deck.slide_count());

    let content_types = read_member(&mut archive, "[Content_Types].xml");
    assert_eq!(
        content_types.matches("presentationml.slide+xml").count(),
        deck.slide_count()
    );

    let benchmark = read_member(&mut archive, "ppt/slides/slide6.xml");
    assert!(benchmark.contains("<a:tbl>"));
    assert_eq!(benchmark.matches("<a:tr ").count(), 3);
    assert_eq!(benchmark.matches("<a:gridCol ").count(), 4);

    let recs = read_member(&mut archive, "ppt/slides/slide7.xml");
    assert!(recs.contains("1. OEM Bundle Program"));
    assert!(recs.contains("3. Security Proof Pack"));
    assert!(recs.contains("Q1: Quick Wins"));
}

#[test]
fn test_swot_only_payload() {
    let result = AnalysisResult::from_json(
        r#"{"company": "ACME", "product": "Sensors", "results": {"SWOT":
            {"S": ["Reliable hardware", "OEM partners"], "W": ["Brand"], "O": ["Analytics"], "T": ["Price rivals"]}}}"#,
    )
    .unwrap();
    let (pres, sections) = builder().compose(&result).unwrap();
    assert!(!sections.contains(&SectionKind::Ansoff));
    assert!(!sections.contains(&SectionKind::Benchmark));

    let swot = &pres.slides()[3];
    assert_eq!(swot.name(), "SWOT");
    let cells: Vec<Vec<String>> = swot
        .shapes()
        .iter()
        .filter_map(|s| s.paragraphs())
        .filter(|p| p.len() != 1 || !["SWOT", "Strengths", "Weaknesses", "Opportunities", "Threats"].contains(&p[0].as_str()))
        .map(|p| p.to_vec())
        .collect();
    assert_eq!(
        cells,
        vec![
            vec!["Reliable hardware".to_string(), "OEM partners".to_string()],
            vec!["Brand".to_string()],
            vec!["Analytics".to_string()],
            vec!["Price rivals".to_string()],
        ]
    );
}

#[test]
fn test_empty_analysis_has_four_slides() {
    let result = AnalysisResult::from_json(r#"{"company": "", "product": ""}"#).unwrap();
    let deck = builder().build(&result).unwrap();
    assert_eq!(deck.slide_count(), 4);
    assert_eq!(deck.filename, "Company_Product_20240501_strategy.pptx");
    assert_eq!(slide_count(&open(&deck.bytes)), 4);
}

#[test]
fn test_same_input_same_bytes() {
    let result = AnalysisResult::from_json(SAMPLE).unwrap();
    let a = builder().build(&result).unwrap();
    let b = builder().build(&result).unwrap();
    assert_eq!(a.filename, b.filename);
    assert!(a.bytes == b.bytes, "deck bytes differ between runs");
}

#[test]
fn test_control_characters_never_reach_the_package() {
    let result = AnalysisResult::from_json(
        r#"{
            "company": "ACME\u0001 Robotics",
            "product": "Sensors\u000c",
            "results": {
                "SWOT": {"S": ["Reliable\u000bhardware"], "W": ["Brand\u0000"], "O": [], "T": []},
                "Benchmark": {"peers": ["Rival\u001f A"], "table": [{"capability": "Speed\u0008", "Rival\u001f A": "High\uffff"}]}
            },
            "recs": [{"title": "Bundle\u0007 program", "impact": 5, "effort": 2}]
        }"#,
    )
    .unwrap();
    let deck = builder().build(&result).unwrap();
    let mut archive = open(&deck.bytes);
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    for name in &names {
        let xml = read_member(&mut archive, name);
        assert_well_formed(name, &xml);
    }

    let swot = read_member(&mut archive, "ppt/slides/slide4.xml");
    assert!(swot.contains("<a:t>Reliable</a:t>"));
    assert!(swot.contains("<a:br>"));
    assert!(swot.contains("<a:t>hardware</a:t>"));
    assert!(swot.contains("<a:t>Brand</a:t>"));
}

#[test]
fn test_numeric_benchmark_ratings_render_as_text() {
    let result = AnalysisResult::from_json(
        r#"{"company": "ACME", "product": "Sensors", "results": {"Benchmark":
            {"peers": ["Rival A"], "table": [{"capability": "Speed", "ACME": 4, "Rival A": "High"}]}}}"#,
    )
    .unwrap();
    let (pres, sections) = builder().compose(&result).unwrap();
    assert!(sections.contains(&SectionKind::Benchmark));
    let benchmark = pres.slides().iter().find(|s| s.name() == "Competitor Benchmark").unwrap();
    let texts = benchmark.texts();
    assert!(texts.contains(&"4"));
    assert!(texts.contains(&"High"));
}
