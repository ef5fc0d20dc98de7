//! Spatial proximity report consumed from the upstream GIS collaborator.
//!
//! The report is produced outside this workspace (buffer radii, distance
//! queries against geographic layers) and arrives as an opaque input. Each
//! collection is ordered nearest-first; an empty collection means "none
//! detected within the search radius" and is valid.

use serde::{Deserialize, Serialize};

/// Common read surface over every spatial feature record.
///
/// `distance_m` is `None` when the upstream query could not attribute a
/// distance; such a feature is treated as infinitely far and never
/// qualifies a proximity threshold.
pub trait SpatialFeature {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn intersects(&self) -> bool;
    fn distance_m(&self) -> Option<f64>;

    /// Distance in metres, with absent distances pushed beyond any radius.
    fn distance(&self) -> f64 {
        self.distance_m().unwrap_or(f64::INFINITY)
    }
}

macro_rules! impl_spatial_feature {
    ($ty:ty) => {
        impl SpatialFeature for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn name(&self) -> &str {
                &self.name
            }
            fn intersects(&self) -> bool {
                self.intersects
            }
            fn distance_m(&self) -> Option<f64> {
                self.distance_m
            }
        }
    };
}

/// SNASPE unit, nature sanctuary, or other officially protected area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtectedArea {
    pub id: String,
    pub name: String,
    /// Protection category, e.g. "Parque Nacional" or "Reserva Nacional".
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub intersects: bool,
    #[serde(default)]
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glacier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub intersects: bool,
    #[serde(default)]
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterBody {
    pub id: String,
    pub name: String,
    /// Hydrological class, e.g. "río", "laguna", "humedal".
    #[serde(default)]
    pub category: String,
    /// Wetland designated under the Ramsar convention.
    #[serde(default)]
    pub is_ramsar_site: bool,
    #[serde(default)]
    pub intersects: bool,
    #[serde(default)]
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndigenousCommunity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Recognised people group, e.g. "Aymara" or "Diaguita".
    #[serde(default)]
    pub people_group: Option<String>,
    #[serde(default)]
    pub intersects: bool,
    #[serde(default)]
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedCenter {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub intersects: bool,
    #[serde(default)]
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeritageSite {
    pub id: String,
    pub name: String,
    /// Monument class under Ley 17.288, e.g. "Monumento Histórico".
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub intersects: bool,
    #[serde(default)]
    pub distance_m: Option<f64>,
}

impl_spatial_feature!(ProtectedArea);
impl_spatial_feature!(Glacier);
impl_spatial_feature!(WaterBody);
impl_spatial_feature!(IndigenousCommunity);
impl_spatial_feature!(PopulatedCenter);
impl_spatial_feature!(HeritageSite);

/// Proximity report for one project geometry.
///
/// All six collections are required keys on the wire; a missing collection
/// is a structural error at the boundary, while an empty one is a normal
/// "nothing detected" result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialReport {
    pub protected_areas: Vec<ProtectedArea>,
    pub glaciers: Vec<Glacier>,
    pub water_bodies: Vec<WaterBody>,
    pub indigenous_communities: Vec<IndigenousCommunity>,
    pub populated_centers: Vec<PopulatedCenter>,
    pub heritage_sites: Vec<HeritageSite>,
}

impl SpatialReport {
    /// A report with nothing detected in any layer.
    pub fn empty() -> Self {
        Self {
            protected_areas: Vec::new(),
            glaciers: Vec::new(),
            water_bodies: Vec::new(),
            indigenous_communities: Vec::new(),
            populated_centers: Vec::new(),
            heritage_sites: Vec::new(),
        }
    }

    /// Total features across all collections.
    pub fn feature_count(&self) -> usize {
        self.protected_areas.len()
            + self.glaciers.len()
            + self.water_bodies.len()
            + self.indigenous_communities.len()
            + self.populated_centers.len()
            + self.heritage_sites.len()
    }
}

/// Features within a strict radius, preserving the nearest-first order.
pub fn within<T: SpatialFeature>(features: &[T], radius_m: f64) -> Vec<&T> {
    features.iter().filter(|f| f.distance() < radius_m).collect()
}

/// Features whose geometry intersects the project footprint.
pub fn intersecting<T: SpatialFeature>(features: &[T]) -> Vec<&T> {
    features.iter().filter(|f| f.intersects()).collect()
}

/// Distance of the nearest feature, or `None` for an empty collection.
///
/// Collections arrive nearest-first, but this does not assume the order.
pub fn nearest_distance<T: SpatialFeature>(features: &[T]) -> Option<f64> {
    features
        .iter()
        .map(SpatialFeature::distance)
        .min_by(|a, b| a.total_cmp(b))
}
