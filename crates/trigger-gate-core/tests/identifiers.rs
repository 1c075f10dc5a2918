// crates/trigger-gate-core/tests/identifiers.rs
// ============================================================================
// Module: Identifier Tests
// Description: Tests for condition names, categories, and event identifiers.
// Purpose: Ensure identifiers round-trip through serde and display correctly.
// Dependencies: trigger-gate-core, serde_json
// ============================================================================
//! ## Overview
//! Validates that identifier wrappers preserve their underlying values and
//! serialize deterministically.

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

use trigger_gate_core::Category;
use trigger_gate_core::ConditionName;
use trigger_gate_core::EventId;

/// Verifies condition names expose stable string values and serde.
#[test]
fn condition_names_roundtrip_with_serde_and_display() {
    let name = ConditionName::new("HLT_IsoMu24");
    assert_eq!(name.as_str(), "HLT_IsoMu24");
    assert_eq!(name.to_string(), "HLT_IsoMu24");

    let json = serde_json::to_string(&name).expect("serialize");
    assert_eq!(json, "\"HLT_IsoMu24\"");

    let decoded: ConditionName = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, name);

    assert_eq!(ConditionName::from("L1_SingleMu7").as_str(), "L1_SingleMu7");
    assert_eq!(ConditionName::from("a".to_string()).as_str(), "a");
}

/// Verifies categories serialize as lowercase tags in a fixed order.
#[test]
fn categories_have_stable_names_and_order() {
    assert_eq!(Category::ALL, [Category::L1, Category::Hlt, Category::Dcs]);
    assert_eq!(Category::L1.as_str(), "l1");
    assert_eq!(Category::Hlt.as_str(), "hlt");
    assert_eq!(Category::Dcs.as_str(), "dcs");
    assert_eq!(Category::Hlt.to_string(), "hlt");

    let json = serde_json::to_string(&Category::Dcs).expect("serialize");
    assert_eq!(json, "\"dcs\"");

    let decoded: Category = serde_json::from_str("\"l1\"").expect("deserialize");
    assert_eq!(decoded, Category::L1);
}

/// Verifies event identifiers display as run:lumi:event.
#[test]
fn event_ids_display_their_coordinates() {
    let event = EventId::new(380_100, 42, 9_876_543_210);
    assert_eq!(event.run, 380_100);
    assert_eq!(event.lumi, 42);
    assert_eq!(event.event, 9_876_543_210);
    assert_eq!(event.to_string(), "380100:42:9876543210");

    let json = serde_json::to_string(&event).expect("serialize");
    let decoded: EventId = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, event);
}
