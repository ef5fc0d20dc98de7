//! Art. 11 trigger evaluation.
//!
//! Maps a spatial proximity report plus project attributes to the set of
//! engaged legal grounds. Rules are independent: a run emits zero or more
//! triggers, at most one per table row, and a category with no qualifying
//! feature contributes nothing. All distance comparisons are strict.

use seia_core::report::{intersecting, within, SpatialFeature};
use seia_core::{ProjectAttributes, Severity, SpatialReport, Trigger, TriggerLetter};
use tracing::debug;

use crate::legal;

/// Populated centers closer than this engage letra a).
pub const POPULATED_CENTER_RADIUS_M: f64 = 2_000.0;
/// Indigenous communities closer than this engage the combined c/d ground.
pub const INDIGENOUS_RADIUS_M: f64 = 10_000.0;
/// Heritage sites closer than this engage letra f).
pub const HERITAGE_RADIUS_M: f64 = 1_000.0;

/// Evaluate every Art. 11 rule against one proposal.
///
/// Pure and total: structurally valid input always produces a (possibly
/// empty) trigger list. Emission order is fixed so output is deterministic.
pub fn evaluate(report: &SpatialReport, attrs: &ProjectAttributes) -> Vec<Trigger> {
    let mut triggers = Vec::new();

    // a) health risk from proximity to population
    let centers = within(&report.populated_centers, POPULATED_CENTER_RADIUS_M);
    if !centers.is_empty() {
        triggers.push(Trigger::new(
            TriggerLetter::A,
            "Risk to the health of nearby population",
            format!(
                "{} populated center(s) within {:.0} m of the project footprint",
                centers.len(),
                POPULATED_CENTER_RADIUS_M
            ),
            Severity::Medium,
            legal::LETTER_A,
        ));
    }

    // b) renewable natural resources: glaciers and surface water are
    // assessed separately and may both fire.
    let glaciers = intersecting(&report.glaciers);
    if !glaciers.is_empty() {
        triggers.push(Trigger::new(
            TriggerLetter::B,
            "Significant effect on glaciers",
            format!(
                "{} glacier(s) intersected by the project footprint",
                glaciers.len()
            ),
            Severity::Critical,
            legal::LETTER_B,
        ));
    }

    let water_bodies = intersecting(&report.water_bodies);
    if !water_bodies.is_empty() {
        triggers.push(Trigger::new(
            TriggerLetter::B,
            "Significant effect on surface water bodies",
            format!(
                "{} water body(ies) intersected by the project footprint",
                water_bodies.len()
            ),
            Severity::High,
            legal::LETTER_B,
        ));
    }

    // c) resettlement of human communities, declared by the proponent.
    if attrs.requires_resettlement {
        triggers.push(Trigger::new(
            TriggerLetter::C,
            "Resettlement of human communities",
            "Proponent declares relocation of households within the project area".to_string(),
            Severity::High,
            legal::LETTER_C,
        ));
    }

    // c/d) indigenous territory, a combined ground distinct from both
    // standalone letters.
    let communities = within(&report.indigenous_communities, INDIGENOUS_RADIUS_M);
    if !communities.is_empty() {
        triggers.push(Trigger::new(
            TriggerLetter::Cd,
            "Proximity to indigenous communities",
            format!(
                "{} indigenous community(ies) within {:.0} m of the project footprint",
                communities.len(),
                INDIGENOUS_RADIUS_M
            ),
            Severity::High,
            legal::LETTER_CD,
        ));
    }

    // d) officially protected areas; the detail names every intersected area.
    let areas = intersecting(&report.protected_areas);
    if !areas.is_empty() {
        let names: Vec<&str> = areas.iter().map(|a| a.name.as_str()).collect();
        triggers.push(Trigger::new(
            TriggerLetter::D,
            "Location in or adjacent to officially protected areas",
            format!("Project footprint intersects: {}", names.join(", ")),
            Severity::Critical,
            legal::LETTER_D,
        ));
    }

    // f) cultural heritage, from the declared attribute or site proximity.
    let heritage: Vec<_> = report
        .heritage_sites
        .iter()
        .filter(|s| s.intersects || s.distance() < HERITAGE_RADIUS_M)
        .collect();
    if attrs.affects_heritage || !heritage.is_empty() {
        let detail = if heritage.is_empty() {
            "Proponent declares alteration of cultural heritage".to_string()
        } else {
            format!(
                "{} heritage site(s) intersected or within {:.0} m of the project footprint",
                heritage.len(),
                HERITAGE_RADIUS_M
            )
        };
        triggers.push(Trigger::new(
            TriggerLetter::F,
            "Alteration of cultural heritage",
            detail,
            Severity::High,
            legal::LETTER_F,
        ));
    }

    debug!(count = triggers.len(), "Art. 11 evaluation complete");
    triggers
}

#[cfg(test)]
mod tests {
    use super::*;
    use seia_core::report::{
        Glacier, HeritageSite, IndigenousCommunity, PopulatedCenter, ProtectedArea, WaterBody,
    };

    fn center(distance_m: f64) -> PopulatedCenter {
        PopulatedCenter {
            id: "pc-1".into(),
            name: "San Pedro".into(),
            category: "pueblo".into(),
            population: Some(4_000),
            intersects: false,
            distance_m: Some(distance_m),
        }
    }

    fn glacier(intersects: bool) -> Glacier {
        Glacier {
            id: "gl-1".into(),
            name: "Glaciar Tronquitos".into(),
            category: "glaciar de montaña".into(),
            intersects,
            distance_m: Some(if intersects { 0.0 } else { 12_000.0 }),
        }
    }

    fn water_body(intersects: bool) -> WaterBody {
        WaterBody {
            id: "wb-1".into(),
            name: "Río Huasco".into(),
            category: "río".into(),
            is_ramsar_site: false,
            intersects,
            distance_m: Some(if intersects { 0.0 } else { 3_000.0 }),
        }
    }

    fn community(distance_m: f64) -> IndigenousCommunity {
        IndigenousCommunity {
            id: "ic-1".into(),
            name: "Comunidad Colla".into(),
            category: "comunidad".into(),
            people_group: Some("Colla".into()),
            intersects: false,
            distance_m: Some(distance_m),
        }
    }

    fn protected_area(intersects: bool, name: &str) -> ProtectedArea {
        ProtectedArea {
            id: format!("pa-{name}"),
            name: name.into(),
            category: "Parque Nacional".into(),
            intersects,
            distance_m: Some(if intersects { 0.0 } else { 8_000.0 }),
        }
    }

    fn heritage_site(distance_m: f64) -> HeritageSite {
        HeritageSite {
            id: "hs-1".into(),
            name: "Sitio arqueológico Quebrada Seca".into(),
            category: "Monumento Arqueológico".into(),
            intersects: false,
            distance_m: Some(distance_m),
        }
    }

    fn letters(triggers: &[Trigger]) -> Vec<TriggerLetter> {
        triggers.iter().map(|t| t.letter).collect()
    }

    #[test]
    fn empty_report_default_attrs_no_triggers() {
        let triggers = evaluate(&SpatialReport::empty(), &ProjectAttributes::default());
        assert!(triggers.is_empty());
    }

    #[test]
    fn populated_center_inside_radius_fires_letter_a() {
        let mut report = SpatialReport::empty();
        report.populated_centers = vec![center(1_500.0)];

        let triggers = evaluate(&report, &ProjectAttributes::default());
        assert_eq!(letters(&triggers), vec![TriggerLetter::A]);
        assert_eq!(triggers[0].severity, Severity::Medium);
        assert!(triggers[0].detail.contains("1 populated center"));
    }

    #[test]
    fn populated_center_at_radius_does_not_fire() {
        let mut report = SpatialReport::empty();
        report.populated_centers = vec![center(2_000.0)];
        assert!(evaluate(&report, &ProjectAttributes::default()).is_empty());
    }

    #[test]
    fn letter_a_counts_all_qualifying_centers() {
        let mut report = SpatialReport::empty();
        report.populated_centers = vec![center(300.0), center(1_900.0), center(5_000.0)];

        let triggers = evaluate(&report, &ProjectAttributes::default());
        assert_eq!(triggers.len(), 1);
        assert!(triggers[0].detail.contains("2 populated center"));
    }

    #[test]
    fn glacier_and_water_body_fire_separate_letter_b_triggers() {
        let mut report = SpatialReport::empty();
        report.glaciers = vec![glacier(true)];
        report.water_bodies = vec![water_body(true)];

        let triggers = evaluate(&report, &ProjectAttributes::default());
        assert_eq!(letters(&triggers), vec![TriggerLetter::B, TriggerLetter::B]);
        assert_eq!(triggers[0].severity, Severity::Critical);
        assert_eq!(triggers[1].severity, Severity::High);
    }

    #[test]
    fn non_intersecting_resources_contribute_nothing() {
        let mut report = SpatialReport::empty();
        report.glaciers = vec![glacier(false)];
        report.water_bodies = vec![water_body(false)];
        report.protected_areas = vec![protected_area(false, "Nevado Tres Cruces")];

        assert!(evaluate(&report, &ProjectAttributes::default()).is_empty());
    }

    #[test]
    fn indigenous_community_strict_boundary() {
        let mut report = SpatialReport::empty();
        report.indigenous_communities = vec![community(10_001.0)];
        assert!(evaluate(&report, &ProjectAttributes::default()).is_empty());

        report.indigenous_communities = vec![community(9_999.0)];
        let triggers = evaluate(&report, &ProjectAttributes::default());
        assert_eq!(letters(&triggers), vec![TriggerLetter::Cd]);
        assert_eq!(triggers[0].severity, Severity::High);
    }

    #[test]
    fn protected_area_detail_names_all_intersected_areas() {
        let mut report = SpatialReport::empty();
        report.protected_areas = vec![
            protected_area(true, "Llanos de Challe"),
            protected_area(false, "Pan de Azúcar"),
            protected_area(true, "Nevado Tres Cruces"),
        ];

        let triggers = evaluate(&report, &ProjectAttributes::default());
        assert_eq!(letters(&triggers), vec![TriggerLetter::D]);
        assert_eq!(triggers[0].severity, Severity::Critical);
        assert!(triggers[0].detail.contains("Llanos de Challe"));
        assert!(triggers[0].detail.contains("Nevado Tres Cruces"));
        assert!(!triggers[0].detail.contains("Pan de Azúcar"));
    }

    #[test]
    fn resettlement_attribute_fires_letter_c() {
        let attrs = ProjectAttributes {
            requires_resettlement: true,
            ..Default::default()
        };
        let triggers = evaluate(&SpatialReport::empty(), &attrs);
        assert_eq!(letters(&triggers), vec![TriggerLetter::C]);
    }

    #[test]
    fn heritage_fires_from_attribute_or_site_proximity() {
        let attrs = ProjectAttributes {
            affects_heritage: true,
            ..Default::default()
        };
        let triggers = evaluate(&SpatialReport::empty(), &attrs);
        assert_eq!(letters(&triggers), vec![TriggerLetter::F]);
        assert!(triggers[0].detail.contains("declares"));

        let mut report = SpatialReport::empty();
        report.heritage_sites = vec![heritage_site(999.0)];
        let triggers = evaluate(&report, &ProjectAttributes::default());
        assert_eq!(letters(&triggers), vec![TriggerLetter::F]);
        assert!(triggers[0].detail.contains("1 heritage site"));

        report.heritage_sites = vec![heritage_site(1_000.0)];
        assert!(evaluate(&report, &ProjectAttributes::default()).is_empty());
    }

    #[test]
    fn combined_ground_is_distinct_from_standalone_letters() {
        let mut report = SpatialReport::empty();
        report.indigenous_communities = vec![community(4_000.0)];
        let attrs = ProjectAttributes {
            requires_resettlement: true,
            ..Default::default()
        };

        let triggers = evaluate(&report, &attrs);
        assert_eq!(letters(&triggers), vec![TriggerLetter::C, TriggerLetter::Cd]);
    }
}
