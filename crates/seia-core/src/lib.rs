pub mod alert;
pub mod art11;
pub mod classification;
pub mod input;
pub mod project;
pub mod report;

pub use alert::{Alert, AlertLevel};
pub use art11::{Severity, Trigger, TriggerLetter};
pub use classification::{
    ClassificationResult, ClassificationSummary, ConfidenceLevel, FactorDetail, Pathway,
};
pub use input::{InputError, ScreeningInput};
pub use project::ProjectAttributes;
pub use report::{
    Glacier, HeritageSite, IndigenousCommunity, PopulatedCenter, ProtectedArea, SpatialFeature,
    SpatialReport, WaterBody,
};
