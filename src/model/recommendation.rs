//! Recommendations and impact × effort bucketing.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An impact or effort score on the 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ScoreRepr", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw score, naming the field in the error.
    pub fn new(field: &'static str, value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::ScoreOutOfRange { field, value })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Scores default to the middle of the scale.
impl Default for Score {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for Score {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new("score", value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wire forms accepted for a score. Floats and numeric strings are cast to an
/// integer first (truncating), then range-checked.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScoreRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

impl TryFrom<ScoreRepr> for Score {
    type Error = Error;

    fn try_from(repr: ScoreRepr) -> Result<Self> {
        let value = match repr {
            ScoreRepr::Int(v) => v,
            ScoreRepr::Float(v) if v.is_finite() => v.trunc() as i64,
            ScoreRepr::Float(v) => return Err(Error::Other(format!("score {} is not a number", v))),
            ScoreRepr::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| Error::Other(format!("score '{}' is not an integer", s)))?,
        };
        Score::try_from(value)
    }
}

/// A prioritized action item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub impact: Score,
    #[serde(default)]
    pub effort: Score,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

impl Recommendation {
    /// Create a recommendation, validating both scores.
    pub fn new(title: impl Into<String>, impact: i64, effort: i64) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            impact: Score::new("impact", impact)?,
            effort: Score::new("effort", effort)?,
            rationale: None,
        })
    }

    /// Builder method: attach a rationale. Blank text clears it.
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        let rationale = rationale.into();
        self.rationale = if rationale.trim().is_empty() {
            None
        } else {
            Some(rationale)
        };
        self
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.impact, self.effort)
    }
}

/// Impact × effort quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// High impact, low effort (top-left)
    QuickWin,
    /// High impact, high effort (top-right)
    StrategicBet,
    /// Low impact, low effort (bottom-left)
    FillIn,
    /// Low impact, high effort (bottom-right)
    LongShot,
}

impl Quadrant {
    /// Impact at or above this is "high".
    pub const HIGH_IMPACT: u8 = 4;
    /// Effort at or below this is "low".
    pub const LOW_EFFORT: u8 = 3;

    pub fn classify(impact: Score, effort: Score) -> Self {
        let high_impact = impact.get() >= Self::HIGH_IMPACT;
        let low_effort = effort.get() <= Self::LOW_EFFORT;
        match (high_impact, low_effort) {
            (true, true) => Self::QuickWin,
            (true, false) => Self::StrategicBet,
            (false, true) => Self::FillIn,
            (false, false) => Self::LongShot,
        }
    }

    /// Position in the grid's top-left, top-right, bottom-left, bottom-right order.
    pub fn grid_index(self) -> usize {
        match self {
            Self::QuickWin => 0,
            Self::StrategicBet => 1,
            Self::FillIn => 2,
            Self::LongShot => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::QuickWin => "Quick Wins",
            Self::StrategicBet => "Strategic Bets",
            Self::FillIn => "Fill-ins",
            Self::LongShot => "Long Shots",
        }
    }
}
