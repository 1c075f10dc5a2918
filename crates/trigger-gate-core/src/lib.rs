// crates/trigger-gate-core/src/lib.rs
// ============================================================================
// Module: Trigger Gate Core Library
// Description: Public API surface for the Trigger Gate core.
// Purpose: Expose core types, interfaces, and the filter evaluator.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Trigger Gate core provides deterministic per-event trigger filtering over
//! L1, HLT, and DCS decision sources. A filter configuration compiles once
//! into a [`TriggerGate`]; each event is then reduced to a single Boolean
//! verdict with a structured report of every error-reply substitution made
//! along the way. The core is backend-agnostic and integrates through
//! explicit interfaces rather than embedding into any host framework.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::DecisionSource;
pub use interfaces::EventDecisions;
pub use interfaces::ResolveError;
pub use runtime::GateError;
pub use runtime::TriggerGate;
