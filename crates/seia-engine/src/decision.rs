//! Weighted decision matrix and classification cascade.
//!
//! Consumes the trigger set (primary signal) plus the raw attributes and
//! spatial report (secondary signals), combines them into a single matrix
//! score, and routes the proposal through a priority-ordered rule cascade.
//! Stateless and clock-free: identical input yields byte-identical output.

use std::collections::BTreeMap;

use seia_core::report::{intersecting, nearest_distance};
use seia_core::{
    ClassificationResult, ClassificationSummary, ConfidenceLevel, FactorDetail, Pathway,
    ProjectAttributes, Severity, SpatialReport, Trigger, TriggerLetter,
};
use tracing::debug;

use crate::legal;

// ── Matrix component weights ──

const TRIGGER_COMPONENT: f64 = 0.70;
const PROJECT_COMPONENT: f64 = 0.20;
const TERRITORIAL_COMPONENT: f64 = 0.10;

// ── Trigger score ──

const CRITICAL_POINTS: f64 = 0.35;
const HIGH_POINTS: f64 = 0.20;
const MEDIUM_POINTS: f64 = 0.10;
const LOW_POINTS: f64 = 0.05;
const WEIGHT_BONUS_RATE: f64 = 0.05;
const WEIGHT_BONUS_CAP: f64 = 0.20;
const DIVERSITY_BONUS_RATE: f64 = 0.03;
const DIVERSITY_BONUS_CAP: f64 = 0.15;

// ── Cascade score thresholds ──

const EIA_SCORE: f64 = 0.75;
const EIA_BORDERLINE_SCORE: f64 = 0.50;
const DIA_OBSERVED_SCORE: f64 = 0.30;

/// Classify one proposal from its trigger set and secondary signals.
///
/// Total over structurally valid input, including the all-empty case; the
/// matrix score is recomputed on every call.
pub fn classify(
    triggers: Vec<Trigger>,
    report: &SpatialReport,
    attrs: &ProjectAttributes,
) -> ClassificationResult {
    let trigger_score = trigger_score(&triggers);
    let (project_score, project_factors) = project_score(attrs);
    let territorial_score = territorial_score(report);

    let matrix_score = TRIGGER_COMPONENT * trigger_score
        + PROJECT_COMPONENT * project_score
        + TERRITORIAL_COMPONENT * territorial_score;

    let (pathway, confidence, justification) = cascade(&triggers, matrix_score);
    let recommendations = recommendations(pathway, &triggers, attrs);
    let summary = ClassificationSummary::from_triggers(&triggers);

    debug!(
        pathway = pathway.as_str(),
        confidence,
        matrix_score,
        triggers = triggers.len(),
        "classification complete"
    );

    ClassificationResult {
        pathway,
        confidence,
        confidence_level: ConfidenceLevel::from_confidence(confidence),
        triggers,
        justification,
        recommendations,
        project_factors,
        matrix_score,
        summary,
    }
}

// ── Component scores ──

/// Severity-count score with weight and letter-diversity bonuses, in [0, 1].
fn trigger_score(triggers: &[Trigger]) -> f64 {
    if triggers.is_empty() {
        return 0.0;
    }

    let count = |severity: Severity| {
        triggers.iter().filter(|t| t.severity == severity).count() as f64
    };
    let base = CRITICAL_POINTS * count(Severity::Critical)
        + HIGH_POINTS * count(Severity::High)
        + MEDIUM_POINTS * count(Severity::Medium)
        + LOW_POINTS * count(Severity::Low);

    let total_weight: f64 = triggers.iter().map(|t| t.weight).sum();
    let weight_bonus = (WEIGHT_BONUS_RATE * total_weight).min(WEIGHT_BONUS_CAP);

    let mut letters: Vec<TriggerLetter> = triggers.iter().map(|t| t.letter).collect();
    letters.sort();
    letters.dedup();
    let diversity_bonus = (DIVERSITY_BONUS_RATE * letters.len() as f64).min(DIVERSITY_BONUS_CAP);

    (base + weight_bonus + diversity_bonus).min(1.0)
}

/// Project-scale score from fixed attribute thresholds, in [0, 1].
///
/// Every exceeded threshold is recorded with its raw value so the caller
/// can show why the project weighed in.
fn project_score(attrs: &ProjectAttributes) -> (f64, BTreeMap<String, FactorDetail>) {
    let mut factors = BTreeMap::new();
    let mut score = 0.0;

    let mut factor = |name: &str, value: f64, threshold: f64, points: f64, description: &str| {
        if value > threshold {
            score += points;
            factors.insert(
                name.to_string(),
                FactorDetail {
                    value,
                    threshold,
                    description: description.to_string(),
                },
            );
        }
    };

    factor(
        "surface_ha",
        attrs.surface_ha.unwrap_or(0.0),
        500.0,
        0.30,
        "Disturbed surface above 500 ha",
    );
    factor(
        "water_use_lps",
        attrs.water_use_lps.unwrap_or(0.0),
        100.0,
        0.25,
        "Water abstraction above 100 l/s",
    );
    factor(
        "construction_workforce",
        attrs.construction_workforce.unwrap_or(0) as f64,
        500.0,
        0.15,
        "Construction workforce above 500 people",
    );
    factor(
        "investment_musd",
        attrs.investment_musd.unwrap_or(0.0),
        100.0,
        0.15,
        "Investment above USD 100 million",
    );
    factor(
        "lifespan_years",
        attrs.lifespan_years.unwrap_or(0.0),
        20.0,
        0.15,
        "Operating life above 20 years",
    );
    if attrs.mining_type_matches(&["open pit", "open cast"]) {
        factor("mining_type", 1.0, 0.0, 0.15, "Open-pit extraction method");
    }

    (score.min(1.0), factors)
}

/// Territorial sensitivity score from the spatial report, in [0, 1].
fn territorial_score(report: &SpatialReport) -> f64 {
    let mut score: f64 = 0.0;

    if !intersecting(&report.protected_areas).is_empty() {
        score += 0.4;
    } else if !report.protected_areas.is_empty() {
        score += 0.15;
    }

    if !intersecting(&report.glaciers).is_empty() {
        score += 0.4;
    } else if !report.glaciers.is_empty() {
        score += 0.2;
    }

    let crossed = intersecting(&report.water_bodies);
    if !crossed.is_empty() {
        score += if crossed.iter().any(|w| w.is_ramsar_site) {
            0.3
        } else {
            0.2
        };
    } else if !report.water_bodies.is_empty() {
        score += 0.1;
    }

    match nearest_distance(&report.indigenous_communities) {
        Some(d) if d < 5_000.0 => score += 0.3,
        Some(d) if d < 10_000.0 => score += 0.15,
        _ => {}
    }

    score.min(1.0)
}

// ── Cascade ──

/// First matching rule wins, evaluated strictly in order.
fn cascade(triggers: &[Trigger], score: f64) -> (Pathway, f64, String) {
    let critical_letters = distinct_letters(triggers, Severity::Critical);
    if !critical_letters.is_empty() {
        return (
            Pathway::Full,
            0.95,
            format!(
                "Critical Art. 11 ground(s) engaged under letra(s) {}; the project must be \
                 assessed through a full EIA.",
                critical_letters.join(", ")
            ),
        );
    }

    let high_count = triggers
        .iter()
        .filter(|t| t.severity == Severity::High)
        .count();
    if high_count >= 2 {
        return (
            Pathway::Full,
            0.85,
            format!(
                "{high_count} HIGH-severity Art. 11 grounds engaged; their combination \
                 requires a full EIA."
            ),
        );
    }

    if score >= EIA_SCORE {
        return (
            Pathway::Full,
            0.80,
            format!(
                "Weighted screening matrix scored {score:.2}, at or above the {EIA_SCORE:.2} \
                 threshold for a full EIA."
            ),
        );
    }

    if score >= EIA_BORDERLINE_SCORE {
        return (
            Pathway::Full,
            0.65,
            format!(
                "Weighted screening matrix scored {score:.2}; the combined signals indicate \
                 likely significant impacts, so an EIA is recommended."
            ),
        );
    }

    if score >= DIA_OBSERVED_SCORE && !triggers.is_empty() {
        return (
            Pathway::Standard,
            0.60,
            format!(
                "Moderate screening score ({score:.2}) with {} Art. 11 observation(s); a DIA \
                 with reinforced environmental commitments is recommended.",
                triggers.len()
            ),
        );
    }

    if triggers.is_empty() {
        return (
            Pathway::Standard,
            0.85,
            "No Art. 11 grounds are engaged; the project can be assessed through a DIA."
                .to_string(),
        );
    }

    (
        Pathway::Standard,
        0.70,
        format!(
            "Engaged grounds remain below every EIA threshold (score {score:.2}); a DIA is \
             recommended."
        ),
    )
}

fn distinct_letters(triggers: &[Trigger], severity: Severity) -> Vec<&'static str> {
    let mut letters: Vec<TriggerLetter> = triggers
        .iter()
        .filter(|t| t.severity == severity)
        .map(|t| t.letter)
        .collect();
    letters.sort();
    letters.dedup();
    letters.iter().map(|l| l.as_str()).collect()
}

// ── Recommendations ──

/// Pathway boilerplate, then up to two static lines per trigger, then
/// mining-type boilerplate; duplicates dropped keeping first-seen order.
fn recommendations(
    pathway: Pathway,
    triggers: &[Trigger],
    attrs: &ProjectAttributes,
) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |line: &str| {
        if !out.iter().any(|existing| existing == line) {
            out.push(line.to_string());
        }
    };

    for line in legal::pathway_recommendations(pathway) {
        push(line);
    }
    for trigger in triggers {
        for line in legal::letter_recommendations(trigger.letter).iter().take(2) {
            push(line);
        }
    }
    if attrs.mining_type_matches(&["underground"]) {
        push(legal::UNDERGROUND_RECOMMENDATION);
    }
    if attrs.mining_type_matches(&["open pit", "open cast"]) {
        push(legal::OPEN_PIT_RECOMMENDATION);
    }

    out
}
