//! Terminal rendering of analysis reports and hotspot listings.

use escalens_core::{AnalysisReport, Hotspot};

/// Render an analysis report: explanation, identified causal factors, and
/// up to `limit` evidence bundles.
pub fn report(report: &AnalysisReport, limit: usize) {
    println!("Causal Explanation");
    println!("------------------");
    println!("{}", report.explanation);

    if !report.lenses.is_empty() {
        let titles: Vec<&str> = report.lenses.iter().map(|l| l.title()).collect();
        println!();
        println!("Identified causal factors: {}", titles.join(", "));
    }

    println!();
    println!("Supporting Evidence");
    println!("-------------------");

    if report.evidence.is_empty() {
        println!("No strong evidence found for this query.");
        return;
    }

    for bundle in report.evidence.iter().take(limit) {
        println!("Transcript {}", bundle.transcript_id);
        for factor in &bundle.factors {
            println!("  - {}", factor);
        }
        println!();
    }
}

/// Render a hotspot listing: one line per transcript, hottest first.
pub fn hotspots(hotspots: &[Hotspot]) {
    if hotspots.is_empty() {
        println!("No escalated transcripts with measurable intensity.");
        return;
    }

    println!("Hottest escalated transcripts");
    println!("-----------------------------");
    for hotspot in hotspots {
        println!(
            "{:<12} score {:>3}  {}",
            hotspot.transcript_id, hotspot.score, hotspot.turn_text
        );
    }
}
