//! Art. 11 trigger value types.
//!
//! A trigger records that one of the grounds of Art. 11, Ley 19.300 is
//! engaged by the project. Letters a)–f) follow the statute; `c/d` is the
//! combined ground used for indigenous territory, kept as its own variant
//! so it never collides with standalone c) or d) in matches or on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Legal ground under Art. 11, Ley 19.300.
///
/// Variant order is the canonical presentation order used when listing
/// affected letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TriggerLetter {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "b")]
    B,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "c/d")]
    Cd,
    #[serde(rename = "d")]
    D,
    #[serde(rename = "e")]
    E,
    #[serde(rename = "f")]
    F,
}

impl TriggerLetter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::Cd => "c/d",
            Self::D => "d",
            Self::E => "e",
            Self::F => "f",
        }
    }
}

impl fmt::Display for TriggerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative impact tier driving trigger weighting and alert urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Contribution of one trigger of this severity to the weight bonus.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Critical => 3.0,
            Self::High => 2.0,
            Self::Medium => 1.0,
            Self::Low => 0.5,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One engaged Art. 11 ground, created fresh per evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub letter: TriggerLetter,
    /// Short statement of the ground, e.g. "Proximity to populated centers".
    pub description: String,
    /// Evaluation detail aggregating every qualifying feature.
    pub detail: String,
    pub severity: Severity,
    pub legal_basis: String,
    /// Severity-derived weight consumed by the decision matrix.
    pub weight: f64,
}

impl Trigger {
    pub fn new(
        letter: TriggerLetter,
        description: impl Into<String>,
        detail: impl Into<String>,
        severity: Severity,
        legal_basis: impl Into<String>,
    ) -> Self {
        Self {
            letter,
            description: description.into(),
            detail: detail.into(),
            severity,
            legal_basis: legal_basis.into(),
            weight: severity.weight(),
        }
    }
}
