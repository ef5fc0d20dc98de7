//! Trigger/Alert/Decision engine for Art. 11 pathway screening.
//!
//! The three components are pure functions over immutable inputs: the
//! trigger evaluator and alert generator are independent of each other,
//! and the decision engine consumes only the trigger set plus the raw
//! inputs. One invocation per request, no shared state, no I/O.

pub mod alerts;
pub mod decision;
mod legal;
pub mod triggers;

use seia_core::{Alert, ClassificationResult, ProjectAttributes, SpatialReport};
use serde::Serialize;

/// Both terminal artifacts of one screening run.
///
/// The classification routes the proposal; the alerts are operator
/// guidance. Downstream consumers treat them independently.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    pub classification: ClassificationResult,
    pub alerts: Vec<Alert>,
}

/// Run the full pipeline: evaluate triggers, generate alerts, classify.
pub fn screen(report: &SpatialReport, attrs: &ProjectAttributes) -> ScreeningOutcome {
    let triggers = triggers::evaluate(report, attrs);
    let alerts = alerts::generate(report, attrs);
    let classification = decision::classify(triggers, report, attrs);
    ScreeningOutcome {
        classification,
        alerts,
    }
}
