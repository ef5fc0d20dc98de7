//! Vertical card display for a screening outcome.
//!
//! Renders the classification and alert list as grouped, human-readable
//! sections with an aligned key column and capped list lengths.

use seia_core::{Alert, ClassificationResult};
use seia_engine::ScreeningOutcome;

const MAX_LIST_ITEMS: usize = 10;

/// Print the full screening card: decision, triggers, factors, alerts,
/// recommendations.
pub fn print_screening(outcome: &ScreeningOutcome) {
    print_classification(&outcome.classification);
    print_alerts(&outcome.alerts);
}

fn print_classification(result: &ClassificationResult) {
    println!("=== SEIA screening ===");
    println!(
        "Recommended pathway: {} ({})",
        result.pathway,
        result.pathway.instrument()
    );
    println!();

    println!("Decision");
    println!(
        "  {:<26} {:.2} ({})",
        "confidence",
        result.confidence,
        result.confidence_level.as_str()
    );
    println!("  {:<26} {:.3}", "matrix score", result.matrix_score);
    println!("  {:<26} {}", "justification", result.justification);
    println!();

    if !result.triggers.is_empty() {
        println!("Art. 11 triggers ({})", result.triggers.len());
        for trigger in &result.triggers {
            println!(
                "  letra {:<4} [{}]  {}",
                format!("{})", trigger.letter),
                trigger.severity,
                trigger.description
            );
            println!("      {}", trigger.detail);
            println!("      {}", trigger.legal_basis);
        }
        println!();
    }

    if !result.project_factors.is_empty() {
        println!("Project factors");
        for (name, factor) in &result.project_factors {
            println!(
                "  {:<26} {} (threshold {}): {}",
                name, factor.value, factor.threshold, factor.description
            );
        }
        println!();
    }

    if !result.recommendations.is_empty() {
        println!("Recommendations");
        let show = result.recommendations.len().min(MAX_LIST_ITEMS);
        for recommendation in &result.recommendations[..show] {
            println!("  - {recommendation}");
        }
        if result.recommendations.len() > MAX_LIST_ITEMS {
            println!(
                "  ... and {} more",
                result.recommendations.len() - MAX_LIST_ITEMS
            );
        }
        println!();
    }
}

fn print_alerts(alerts: &[Alert]) {
    if alerts.is_empty() {
        return;
    }

    println!("Alerts ({})", alerts.len());
    let show = alerts.len().min(MAX_LIST_ITEMS);
    for alert in &alerts[..show] {
        println!("  [{}] {}", alert.level, alert.title);
        println!("      {}", alert.description);
        for action in &alert.required_actions {
            println!("      action: {action}");
        }
        if !alert.related_regulations.is_empty() {
            println!("      basis:  {}", alert.related_regulations.join("; "));
        }
    }
    if alerts.len() > MAX_LIST_ITEMS {
        println!("  ... and {} more", alerts.len() - MAX_LIST_ITEMS);
    }
    println!();
}
