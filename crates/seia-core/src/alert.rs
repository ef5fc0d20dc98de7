//! Operator-facing alerts.
//!
//! Alerts are operational guidance with their own thresholds, independent
//! of the legal trigger set; they are informational and never feed back
//! into the pathway decision.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertLevel {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Info => "INFO",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One actionable finding for the project team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Deterministic identifier: `<category-code>-<feature id>` for
    /// per-feature alerts, a fixed slug for aggregated ones.
    pub id: String,
    pub level: AlertLevel,
    pub category: String,
    pub title: String,
    pub description: String,
    pub required_actions: Vec<String>,
    /// Fixed statutory citations for the category.
    pub related_regulations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_wire_form() {
        assert_eq!(serde_json::to_string(&AlertLevel::Info).unwrap(), "\"INFO\"");
        let parsed: AlertLevel = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(parsed, AlertLevel::Critical);
    }
}
