// crates/trigger-gate-sources/src/lib.rs
// ============================================================================
// Module: Trigger Gate Sources
// Description: Decision sources backed by per-event trigger and DCS records.
// Purpose: Supply `DecisionSource` implementations for L1, HLT, and DCS.
// Dependencies: trigger-gate-core
// ============================================================================

//! ## Overview
//! This crate implements the decision sources the gate consults: the L1
//! algorithm menu, the HLT path results of an event, and the detector-control
//! status record. All three resolve condition names through the same
//! [`DecisionSource`](trigger_gate_core::DecisionSource) trait, so the gate
//! never learns which subsystem a name belongs to.
//!
//! The L1 menu is persistent configuration and always answers. HLT results
//! and DCS status are per-event products that can be missing, and both model
//! that absence explicitly instead of answering with a made-up decision.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod dcs;
pub mod hlt;
pub mod l1;
pub mod table;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use dcs::DCS_PARTITION_NAMES;
pub use dcs::DcsStatusSource;
pub use dcs::is_known_partition;
pub use hlt::HltPathSource;
pub use l1::L1MenuSource;
pub use table::DecisionEntry;
pub use table::DecisionTable;
