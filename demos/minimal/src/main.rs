// demos/minimal/src/main.rs
// ============================================================================
// Module: Trigger Gate Minimal Demo
// Description: Minimal end-to-end trigger gate run over in-memory sources.
// Purpose: Demonstrate filter compilation and per-event evaluation.
// Dependencies: trigger-gate-core, trigger-gate-sources
// ============================================================================

//! ## Overview
//! Compiles a small three-category filter and evaluates a handful of events
//! against in-memory decision sources: a healthy event, an event whose L1
//! seed did not fire, and an event whose DCS status record is missing.

use std::io::Write;

use trigger_gate_core::CategoryConfig;
use trigger_gate_core::Combine;
use trigger_gate_core::EventDecisions;
use trigger_gate_core::EventId;
use trigger_gate_core::FilterConfig;
use trigger_gate_core::TriggerGate;
use trigger_gate_core::Verdict;
use trigger_gate_sources::DcsStatusSource;
use trigger_gate_sources::HltPathSource;
use trigger_gate_sources::L1MenuSource;

/// Builds the filter used by the demo: an L1 seed, one of two muon paths,
/// and a ready pixel detector, all required.
fn build_filter() -> FilterConfig {
    FilterConfig {
        combine: Some(Combine::And),
        l1: Some(CategoryConfig {
            combine: Combine::Or,
            error_reply: false,
            expressions: vec!["L1_SingleMu22".to_string()],
        }),
        hlt: Some(CategoryConfig {
            combine: Combine::Or,
            error_reply: false,
            expressions: vec!["HLT_IsoMu24 OR HLT_Mu50".to_string()],
        }),
        dcs: Some(CategoryConfig {
            combine: Combine::And,
            error_reply: true,
            expressions: vec!["BPIX AND FPIX".to_string()],
        }),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gate = TriggerGate::new(build_filter())?;
    write_line("Filter hash", gate.spec_hash().value.as_str())?;

    let menu_fired = L1MenuSource::from_decisions([("L1_SingleMu22", true)]);
    let menu_quiet = L1MenuSource::from_decisions([("L1_SingleMu22", false)]);
    let paths = HltPathSource::from_decisions([("HLT_IsoMu24", true), ("HLT_Mu50", false)]);
    let detector_ready = DcsStatusSource::from_ready(["BPIX", "FPIX"]);
    let detector_unknown = DcsStatusSource::absent();

    let healthy = gate.accepts(
        EventId::new(380_100, 42, 1_001),
        &EventDecisions {
            l1: Some(&menu_fired),
            hlt: Some(&paths),
            dcs: Some(&detector_ready),
        },
    );
    write_line("Healthy event", &verdict_summary(&healthy))?;

    let unseeded = gate.accepts(
        EventId::new(380_100, 42, 1_002),
        &EventDecisions {
            l1: Some(&menu_quiet),
            hlt: Some(&paths),
            dcs: Some(&detector_ready),
        },
    );
    write_line("Unseeded event", &verdict_summary(&unseeded))?;

    let degraded = gate.accepts(
        EventId::new(380_100, 42, 1_003),
        &EventDecisions {
            l1: Some(&menu_fired),
            hlt: Some(&paths),
            dcs: Some(&detector_unknown),
        },
    );
    write_line("Degraded event", &verdict_summary(&degraded))?;

    Ok(())
}

/// Formats a short summary for an event verdict.
fn verdict_summary(verdict: &Verdict) -> String {
    let outcome = if verdict.accepted { "accepted" } else { "rejected" };
    format!(
        "{} ({outcome}, categories={}, diagnostics={})",
        verdict.report.event,
        verdict.report.category_verdicts.len(),
        verdict.report.diagnostics.len()
    )
}

/// Writes a labeled line to stdout.
fn write_line(label: &str, value: &str) -> Result<(), std::io::Error> {
    let mut out = std::io::stdout();
    writeln!(out, "{label}: {value}")?;
    Ok(())
}
