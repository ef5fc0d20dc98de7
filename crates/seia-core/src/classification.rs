//! Final pathway classification artifact.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::art11::{Trigger, TriggerLetter};

/// Regulatory review pathway under the SEIA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pathway {
    /// Declaración de Impacto Ambiental, the simplified review.
    #[serde(rename = "STANDARD")]
    Standard,
    /// Estudio de Impacto Ambiental, the full review.
    #[serde(rename = "FULL")]
    Full,
}

impl Pathway {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Full => "FULL",
        }
    }

    /// Chilean instrument acronym for human-facing text.
    pub fn instrument(&self) -> &'static str {
        match self {
            Self::Standard => "DIA",
            Self::Full => "EIA",
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative band derived from the numeric confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Banding: `> 0.90` VERY_HIGH, `[0.75, 0.90]` HIGH, `[0.50, 0.75)`
    /// MEDIUM, else LOW.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.90 {
            Self::VeryHigh
        } else if confidence >= 0.75 {
            Self::High
        } else if confidence >= 0.50 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryHigh => "VERY_HIGH",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

/// One project-scale factor that exceeded its threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorDetail {
    pub value: f64,
    pub threshold: f64,
    pub description: String,
}

/// Compact roll-up of the trigger set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub total_triggers: usize,
    /// Distinct letters engaged, lowercase wire form, presentation order.
    pub letters_affected: Vec<String>,
}

impl ClassificationSummary {
    pub fn from_triggers(triggers: &[Trigger]) -> Self {
        let mut letters: Vec<TriggerLetter> = triggers.iter().map(|t| t.letter).collect();
        letters.sort();
        letters.dedup();
        Self {
            total_triggers: triggers.len(),
            letters_affected: letters.iter().map(|l| l.as_str().to_string()).collect(),
        }
    }
}

/// Terminal artifact of one classification run.
///
/// Immutable once constructed; `matrix_score` is recomputed on every call
/// and never cached across runs. `project_factors` is a `BTreeMap` so the
/// serialized form is byte-stable for identical input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "recommended_pathway")]
    pub pathway: Pathway,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub triggers: Vec<Trigger>,
    pub justification: String,
    pub recommendations: Vec<String>,
    pub project_factors: BTreeMap<String, FactorDetail>,
    pub matrix_score: f64,
    pub summary: ClassificationSummary,
}
