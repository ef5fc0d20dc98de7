//! Operator alert generation.
//!
//! Alerts share the engine's inputs but use their own, tighter thresholds:
//! they are operational guidance for the project team, not legal
//! classification, and the decision engine never reads them.

use seia_core::report::{within, SpatialFeature};
use seia_core::{Alert, AlertLevel, ProjectAttributes, SpatialReport};
use tracing::debug;

use crate::legal;

/// Water bodies closer than this are flagged even without intersection.
pub const WATER_BODY_RADIUS_M: f64 = 500.0;
/// Indigenous communities closer than this require consultation planning.
pub const INDIGENOUS_RADIUS_M: f64 = 5_000.0;
/// Populated centers closer than this are flagged for emission studies.
pub const POPULATED_CENTER_RADIUS_M: f64 = 2_000.0;
/// Heritage sites closer than this are flagged for CMN involvement.
pub const HERITAGE_RADIUS_M: f64 = 1_000.0;
/// Declared abstraction above this prompts the water-rights reminder.
pub const WATER_RIGHTS_LPS: f64 = 100.0;

const PROTECTED_AREA_ACTIONS: &[&str] = &[
    "Obtain a compatibility pronouncement from the area administrator",
    "Redesign the affected works or prepare an EIA covering the intrusion",
];

const GLACIER_ACTIONS: &[&str] = &[
    "Commission a glaciological baseline before any earthworks",
    "Exclude glacier surfaces and their drainage from the work area",
];

const WATER_BODY_ACTIONS: &[&str] = &[
    "Delimit the protection buffer of the water body on the ground",
    "Prepare a surface-water monitoring plan",
];

const INDIGENOUS_ACTIONS: &[&str] = &[
    "Start the indigenous consultation procedure early",
    "Document customary uses of land and water in the area of influence",
];

const POPULATED_CENTER_ACTIONS: &[&str] = &[
    "Model air, noise, and vibration emissions toward the nearest centers",
    "Plan a community information program before construction",
];

const HERITAGE_ACTIONS: &[&str] = &[
    "Request a Consejo de Monumentos Nacionales inspection of the sites",
    "Keep a certified archaeologist on call during earthworks",
];

const RESETTLEMENT_ACTIONS: &[&str] = &[
    "Prepare a resettlement plan agreed with every affected household",
];

const WATER_RIGHTS_ACTIONS: &[&str] = &[
    "Verify that granted water rights cover the declared abstraction",
];

/// Generate the operator alert list for one proposal.
///
/// Pure and total, like the trigger evaluator; the two run independently
/// and may execute in either order or concurrently.
pub fn generate(report: &SpatialReport, attrs: &ProjectAttributes) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for area in report.protected_areas.iter().filter(|a| a.intersects) {
        alerts.push(Alert {
            id: format!("pa-{}", area.id),
            level: AlertLevel::Critical,
            category: "protected_area".into(),
            title: "Project intersects a protected area".into(),
            description: format!(
                "Project footprint intersects {} ({})",
                area.name, area.category
            ),
            required_actions: to_owned(PROTECTED_AREA_ACTIONS),
            related_regulations: to_owned(legal::PROTECTED_AREA_REGS),
        });
    }

    for glacier in report.glaciers.iter().filter(|g| g.intersects) {
        alerts.push(Alert {
            id: format!("gl-{}", glacier.id),
            level: AlertLevel::Critical,
            category: "glacier".into(),
            title: "Project intersects a glacier".into(),
            description: format!("Project footprint intersects {}", glacier.name),
            required_actions: to_owned(GLACIER_ACTIONS),
            related_regulations: to_owned(legal::GLACIER_REGS),
        });
    }

    for body in report
        .water_bodies
        .iter()
        .filter(|w| w.intersects || w.distance() < WATER_BODY_RADIUS_M)
    {
        let description = if body.intersects {
            format!("{} is intersected by the project footprint", body.name)
        } else {
            format!("{} lies at {:.0} m from the project footprint", body.name, body.distance())
        };
        alerts.push(Alert {
            id: format!("wb-{}", body.id),
            level: AlertLevel::High,
            category: "water_body".into(),
            title: "Water body within the direct influence area".into(),
            description,
            required_actions: to_owned(WATER_BODY_ACTIONS),
            related_regulations: to_owned(legal::WATER_BODY_REGS),
        });
    }

    let communities = within(&report.indigenous_communities, INDIGENOUS_RADIUS_M);
    if !communities.is_empty() {
        let mut groups: Vec<&str> = communities
            .iter()
            .filter_map(|c| c.people_group.as_deref())
            .collect();
        groups.sort_unstable();
        groups.dedup();
        let description = if groups.is_empty() {
            format!(
                "{} indigenous community(ies) within {:.0} m",
                communities.len(),
                INDIGENOUS_RADIUS_M
            )
        } else {
            format!(
                "{} indigenous community(ies) within {:.0} m (peoples: {})",
                communities.len(),
                INDIGENOUS_RADIUS_M,
                groups.join(", ")
            )
        };
        alerts.push(Alert {
            id: "indigenous-consultation".into(),
            level: AlertLevel::High,
            category: "indigenous_community".into(),
            title: "Indigenous consultation procedures required".into(),
            description,
            required_actions: to_owned(INDIGENOUS_ACTIONS),
            related_regulations: to_owned(legal::INDIGENOUS_REGS),
        });
    }

    let centers = within(&report.populated_centers, POPULATED_CENTER_RADIUS_M);
    if !centers.is_empty() {
        let known_population: u64 = centers.iter().filter_map(|c| c.population).sum();
        let description = if known_population > 0 {
            format!(
                "{} populated center(s) within {:.0} m, approx. {} inhabitants",
                centers.len(),
                POPULATED_CENTER_RADIUS_M,
                known_population
            )
        } else {
            format!(
                "{} populated center(s) within {:.0} m",
                centers.len(),
                POPULATED_CENTER_RADIUS_M
            )
        };
        alerts.push(Alert {
            id: "populated-centers".into(),
            level: AlertLevel::Medium,
            category: "populated_center".into(),
            title: "Populated centers near the project".into(),
            description,
            required_actions: to_owned(POPULATED_CENTER_ACTIONS),
            related_regulations: to_owned(legal::POPULATED_CENTER_REGS),
        });
    }

    let sites: Vec<_> = report
        .heritage_sites
        .iter()
        .filter(|s| s.intersects || s.distance() < HERITAGE_RADIUS_M)
        .collect();
    if !sites.is_empty() || attrs.affects_heritage {
        let description = if sites.is_empty() {
            "Proponent declares alteration of cultural heritage".to_string()
        } else {
            format!(
                "{} heritage site(s) intersected or within {:.0} m",
                sites.len(),
                HERITAGE_RADIUS_M
            )
        };
        alerts.push(Alert {
            id: "heritage-sites".into(),
            level: AlertLevel::High,
            category: "heritage_site".into(),
            title: "Cultural heritage within the influence area".into(),
            description,
            required_actions: to_owned(HERITAGE_ACTIONS),
            related_regulations: to_owned(legal::HERITAGE_REGS),
        });
    }

    if attrs.requires_resettlement {
        alerts.push(Alert {
            id: "resettlement".into(),
            level: AlertLevel::High,
            category: "resettlement".into(),
            title: "Resettlement of households declared".into(),
            description: "Project declares relocation of human communities".into(),
            required_actions: to_owned(RESETTLEMENT_ACTIONS),
            related_regulations: to_owned(legal::RESETTLEMENT_REGS),
        });
    }

    let water_use = attrs.water_use_lps.unwrap_or(0.0);
    if water_use > WATER_RIGHTS_LPS {
        alerts.push(Alert {
            id: "water-rights".into(),
            level: AlertLevel::Info,
            category: "water_rights".into(),
            title: "Large water abstraction declared".into(),
            description: format!(
                "Declared abstraction of {water_use:.0} l/s exceeds {WATER_RIGHTS_LPS:.0} l/s"
            ),
            required_actions: to_owned(WATER_RIGHTS_ACTIONS),
            related_regulations: to_owned(legal::WATER_RIGHTS_REGS),
        });
    }

    debug!(count = alerts.len(), "alert generation complete");
    alerts
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
