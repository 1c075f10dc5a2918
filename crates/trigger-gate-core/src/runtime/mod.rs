// crates/trigger-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Trigger Gate Runtime
// Description: Filter compilation and per-event evaluation.
// Purpose: Execute compiled trigger filters against per-event decision sources.
// Dependencies: crate::{core, interfaces}, trig-logic
// ============================================================================

//! ## Overview
//! Runtime modules compile filter configurations and evaluate them per event.
//! Every host surface must evaluate through [`TriggerGate`] so that verdicts
//! and substitution reports stay consistent.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod evaluator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use evaluator::GateError;
pub use evaluator::TriggerGate;
