//! Project attribute record as declared by the proponent.

use serde::{Deserialize, Serialize};

/// Scalar description of a mining proposal.
///
/// Every numeric field is optional on the wire; an absent value is treated
/// as 0 by the engine, and absent booleans as false. `Default` is the
/// all-absent record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectAttributes {
    #[serde(default)]
    pub surface_ha: Option<f64>,
    /// Declared water abstraction, litres per second.
    #[serde(default)]
    pub water_use_lps: Option<f64>,
    #[serde(default)]
    pub construction_workforce: Option<u64>,
    #[serde(default)]
    pub operation_workforce: Option<u64>,
    /// Declared investment, millions of USD.
    #[serde(default)]
    pub investment_musd: Option<f64>,
    #[serde(default)]
    pub lifespan_years: Option<f64>,
    /// Free text, e.g. "open pit", "rajo abierto", "underground".
    #[serde(default)]
    pub mining_type: Option<String>,
    #[serde(default)]
    pub requires_resettlement: bool,
    #[serde(default)]
    pub affects_heritage: bool,
}

impl ProjectAttributes {
    /// Case-insensitive substring match against the declared mining type.
    ///
    /// Absent mining type matches nothing.
    pub fn mining_type_matches(&self, needles: &[&str]) -> bool {
        let Some(kind) = &self.mining_type else {
            return false;
        };
        let kind = kind.to_lowercase();
        needles.iter().any(|n| kind.contains(&n.to_lowercase()))
    }
}
