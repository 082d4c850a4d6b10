//! Framework outputs: SWOT, Ansoff matrix and competitor benchmark.

use super::section::SectionContent;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A named strategic-analysis technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FrameworkName {
    #[serde(rename = "SWOT", alias = "swot", alias = "Swot")]
    Swot,
    #[serde(alias = "ansoff")]
    Ansoff,
    #[serde(alias = "benchmark")]
    Benchmark,
}

impl FrameworkName {
    pub const ALL: [FrameworkName; 3] = [Self::Swot, Self::Ansoff, Self::Benchmark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swot => "SWOT",
            Self::Ansoff => "Ansoff",
            Self::Benchmark => "Benchmark",
        }
    }
}

impl fmt::Display for FrameworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown framework '{}' (expected SWOT, Ansoff or Benchmark)", s))
    }
}

/// SWOT analysis. Each list may be empty.
///
/// Accepts both the long field names and the single-letter `S/W/O/T` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    #[serde(default, alias = "S")]
    pub strengths: Vec<String>,
    #[serde(default, alias = "W")]
    pub weaknesses: Vec<String>,
    #[serde(default, alias = "O")]
    pub opportunities: Vec<String>,
    #[serde(default, alias = "T")]
    pub threats: Vec<String>,
}

impl SwotAnalysis {
    /// Categories in display order with their labels.
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Strengths", &self.strengths),
            ("Weaknesses", &self.weaknesses),
            ("Opportunities", &self.opportunities),
            ("Threats", &self.threats),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.categories().iter().all(|(_, items)| items.is_empty())
    }
}

impl SectionContent for SwotAnalysis {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

/// Ansoff growth matrix, one list per quadrant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsoffMatrix {
    #[serde(default)]
    pub market_penetration: Vec<String>,
    #[serde(default)]
    pub market_development: Vec<String>,
    #[serde(default)]
    pub product_development: Vec<String>,
    #[serde(default)]
    pub diversification: Vec<String>,
}

impl AnsoffMatrix {
    /// Quadrants in grid order (top-left, top-right, bottom-left, bottom-right).
    ///
    /// Columns run existing → new products, rows existing → new markets.
    pub fn quadrants(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Market Penetration", &self.market_penetration),
            ("Product Development", &self.product_development),
            ("Market Development", &self.market_development),
            ("Diversification", &self.diversification),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.quadrants().iter().all(|(_, items)| items.is_empty())
    }
}

impl SectionContent for AnsoffMatrix {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

/// One benchmark row: a capability and a rating per competitor.
///
/// Serialized flat, as `{"capability": "...", "<competitor>": "<rating>", ...}`.
/// Non-string cells are accepted and kept as text: numbers and booleans in
/// their JSON spelling, `null` as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    #[serde(default, deserialize_with = "deserialize_cell")]
    pub capability: String,
    #[serde(flatten, deserialize_with = "deserialize_ratings")]
    pub ratings: BTreeMap<String, String>,
}

fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn deserialize_cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(cell_text)
}

fn deserialize_ratings<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(competitor, value)| (competitor, cell_text(value))).collect())
}

impl BenchmarkRow {
    pub fn new(capability: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            ratings: BTreeMap::new(),
        }
    }

    /// Builder method: add a rating for a competitor.
    pub fn rating(mut self, competitor: impl Into<String>, value: impl Into<String>) -> Self {
        self.ratings.insert(competitor.into(), value.into());
        self
    }

    /// Rating for a competitor; a missing cell is an empty string.
    pub fn rating_for(&self, competitor: &str) -> &str {
        self.ratings.get(competitor).map(String::as_str).unwrap_or("")
    }
}

/// Competitor benchmark: peers in display order and one row per capability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benchmark {
    #[serde(default)]
    pub peers: Vec<String>,
    #[serde(default)]
    pub table: Vec<BenchmarkRow>,
}

impl Benchmark {
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl SectionContent for Benchmark {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

/// The output of one framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkOutput {
    Swot(SwotAnalysis),
    Ansoff(AnsoffMatrix),
    Benchmark(Benchmark),
}

impl FrameworkOutput {
    pub fn name(&self) -> FrameworkName {
        match self {
            Self::Swot(_) => FrameworkName::Swot,
            Self::Ansoff(_) => FrameworkName::Ansoff,
            Self::Benchmark(_) => FrameworkName::Benchmark,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Swot(swot) => swot.is_empty(),
            Self::Ansoff(ansoff) => ansoff.is_empty(),
            Self::Benchmark(bench) => bench.is_empty(),
        }
    }
}

/// Framework outputs keyed by framework name, one optional slot per framework.
///
/// Serializes as a map `{"SWOT": {...}, "Ansoff": {...}, "Benchmark": {...}}`
/// with absent frameworks omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkResults {
    #[serde(rename = "SWOT", default, skip_serializing_if = "Option::is_none")]
    pub swot: Option<SwotAnalysis>,
    #[serde(rename = "Ansoff", default, skip_serializing_if = "Option::is_none")]
    pub ansoff: Option<AnsoffMatrix>,
    #[serde(rename = "Benchmark", default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<Benchmark>,
}

impl FrameworkResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an output in its framework's slot, returning the previous one.
    pub fn insert(&mut self, output: FrameworkOutput) -> Option<FrameworkOutput> {
        match output {
            FrameworkOutput::Swot(v) => self.swot.replace(v).map(FrameworkOutput::Swot),
            FrameworkOutput::Ansoff(v) => self.ansoff.replace(v).map(FrameworkOutput::Ansoff),
            FrameworkOutput::Benchmark(v) => {
                self.benchmark.replace(v).map(FrameworkOutput::Benchmark)
            },
        }
    }

    /// Get a copy of a framework's output.
    pub fn get(&self, name: FrameworkName) -> Option<FrameworkOutput> {
        match name {
            FrameworkName::Swot => self.swot.clone().map(FrameworkOutput::Swot),
            FrameworkName::Ansoff => self.ansoff.clone().map(FrameworkOutput::Ansoff),
            FrameworkName::Benchmark => self.benchmark.clone().map(FrameworkOutput::Benchmark),
        }
    }

    pub fn contains(&self, name: FrameworkName) -> bool {
        match name {
            FrameworkName::Swot => self.swot.is_some(),
            FrameworkName::Ansoff => self.ansoff.is_some(),
            FrameworkName::Benchmark => self.benchmark.is_some(),
        }
    }

    /// Names of the frameworks that have an output, in canonical order.
    pub fn names(&self) -> Vec<FrameworkName> {
        FrameworkName::ALL
            .into_iter()
            .filter(|name| self.contains(*name))
            .collect()
    }

    /// Overwrite slots with every output present in `other`.
    pub fn merge(&mut self, other: FrameworkResults) {
        if other.swot.is_some() {
            self.swot = other.swot;
        }
        if other.ansoff.is_some() {
            self.ansoff = other.ansoff;
        }
        if other.benchmark.is_some() {
            self.benchmark = other.benchmark;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.swot.is_none() && self.ansoff.is_none() && self.benchmark.is_none()
    }
}
