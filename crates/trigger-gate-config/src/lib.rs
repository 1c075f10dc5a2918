// crates/trigger-gate-config/src/lib.rs
// ============================================================================
// Module: Trigger Gate Config Library
// Description: Canonical filter config model, loading, and validation.
// Purpose: Single source of truth for trigger-gate.toml semantics.
// Dependencies: trigger-gate-core, trig-logic, serde, toml
// ============================================================================

//! ## Overview
//! `trigger-gate-config` defines the on-disk configuration model for the
//! trigger gate. It loads `trigger-gate.toml`, applies strict fail-closed
//! validation (size limits, grammar compilation of every expression), and
//! materializes the plain [`FilterConfig`](trigger_gate_core::FilterConfig)
//! the core consumes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
