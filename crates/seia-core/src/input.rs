//! Input boundary for one screening run.
//!
//! Shape validation happens here, before any engine code runs: a missing
//! collection or a wrong-typed field fails fast with a descriptive error.
//! Once an input deserializes, the engine is total over it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::project::ProjectAttributes;
use crate::report::SpatialReport;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed screening input: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Everything one classification run consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningInput {
    pub report: SpatialReport,
    /// Optional on the wire; every field inside it already defaults.
    #[serde(default)]
    pub attributes: ProjectAttributes,
}

impl ScreeningInput {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }
}
