// crates/trigger-gate-sources/tests/l1_source.rs
// ============================================================================
// Module: L1 Menu Source Tests
// Description: Tests for the L1 algorithm-menu decision source.
// Purpose: Validate menu-backed resolution and unknown-algorithm reporting.
// Dependencies: trigger-gate-sources, trigger-gate-core
// ============================================================================

//! ## Overview
//! Tests the L1 source for:
//! - Resolution of seeded algorithm decisions
//! - Unknown-algorithm reporting for names outside the menu
//! - Incremental menu updates between events

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use trigger_gate_core::ConditionName;
use trigger_gate_core::DecisionSource;
use trigger_gate_core::ResolveError;
use trigger_gate_sources::L1MenuSource;

// ============================================================================
// SECTION: Menu Resolution
// ============================================================================

/// Tests that seeded algorithm decisions resolve to their recorded values.
#[test]
fn seeded_algorithms_resolve() {
    let source = L1MenuSource::from_decisions([
        ("L1_SingleMu22", true),
        ("L1_SingleEG36", false),
    ]);
    assert_eq!(source.resolve(&ConditionName::new("L1_SingleMu22")), Ok(true));
    assert_eq!(source.resolve(&ConditionName::new("L1_SingleEG36")), Ok(false));
}

/// Tests that an algorithm outside the menu reports an unknown condition.
#[test]
fn algorithms_outside_the_menu_are_unknown() {
    let source = L1MenuSource::from_decisions([("L1_SingleMu22", true)]);
    let result = source.resolve(&ConditionName::new("L1_DoubleMu_15_7"));
    assert_eq!(
        result,
        Err(ResolveError::UnknownCondition {
            name: ConditionName::new("L1_DoubleMu_15_7"),
        })
    );
}

/// Tests that an empty menu answers every name with an unknown condition.
#[test]
fn empty_menus_know_nothing() {
    let source = L1MenuSource::default();
    assert!(source.menu().is_empty());
    assert!(source.resolve(&ConditionName::new("L1_ZeroBias")).is_err());
}

// ============================================================================
// SECTION: Menu Updates
// ============================================================================

/// Tests that recording updates the menu for subsequent events.
#[test]
fn recording_updates_the_menu() {
    let mut source = L1MenuSource::default();
    source.record("L1_SingleMu22", false);
    assert_eq!(source.resolve(&ConditionName::new("L1_SingleMu22")), Ok(false));
    source.record("L1_SingleMu22", true);
    assert_eq!(source.resolve(&ConditionName::new("L1_SingleMu22")), Ok(true));
}
