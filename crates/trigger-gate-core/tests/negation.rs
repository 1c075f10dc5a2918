// crates/trigger-gate-core/tests/negation.rs
// ============================================================================
// Module: Negation Tests
// Description: Tests for negation-marker stripping.
// ============================================================================
//! ## Overview
//! Validates marker detection, stripping, and the empty-remainder edge case.

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

use trigger_gate_core::NEGATION_MARKER;
use trigger_gate_core::strip_negation;

// ============================================================================
// SECTION: Marker Stripping
// ============================================================================

/// Tests unmarked names pass through with the negation flag clear.
#[test]
fn test_unmarked_name_is_not_negated() {
    assert_eq!(strip_negation("HLT_IsoMu24"), ("HLT_IsoMu24", false));
}

/// Tests the marker is removed, not merely flagged.
#[test]
fn test_marker_is_stripped_from_name() {
    assert_eq!(strip_negation("~HLT_IsoMu24"), ("HLT_IsoMu24", true));
}

/// Tests only the first marker is consumed.
#[test]
fn test_only_leading_marker_is_consumed() {
    assert_eq!(strip_negation("~~x"), ("~x", true));
}

/// Tests a marker in the middle of a name is left alone.
#[test]
fn test_interior_marker_is_preserved() {
    assert_eq!(strip_negation("a~b"), ("a~b", false));
}

/// Tests a bare marker yields an empty name with the flag set.
#[test]
fn test_bare_marker_yields_empty_name() {
    let raw = NEGATION_MARKER.to_string();
    assert_eq!(strip_negation(&raw), ("", true));
}

/// Tests surrounding whitespace is trimmed before and after stripping.
#[test]
fn test_whitespace_is_trimmed_around_marker() {
    assert_eq!(strip_negation("  ~ HLT_Ele35  "), ("HLT_Ele35", true));
    assert_eq!(strip_negation("  L1_SingleMu7 "), ("L1_SingleMu7", false));
}

/// Tests the empty string maps to an empty, unnegated name.
#[test]
fn test_empty_input_is_empty_and_unnegated() {
    assert_eq!(strip_negation(""), ("", false));
    assert_eq!(strip_negation("   "), ("", false));
}
