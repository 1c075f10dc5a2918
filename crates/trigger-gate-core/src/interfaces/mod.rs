// crates/trigger-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Trigger Gate Interfaces
// Description: Backend-agnostic interfaces for per-event decision lookup.
// Purpose: Define the contract surface between the evaluator and its sources.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the evaluator obtains per-event condition decisions
//! without embedding any detector or data-format knowledge. Sources are
//! handed in per call rather than stored, so the same compiled filter can be
//! replayed against any event's decision products.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

use crate::core::identifiers::Category;
use crate::core::identifiers::ConditionName;

// ============================================================================
// SECTION: Resolution Errors
// ============================================================================

/// Errors a decision source can raise while resolving a condition.
///
/// Resolution errors are never fatal to evaluation; the evaluator records a
/// diagnostic and substitutes the configured error reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The condition name is not known to this source.
    #[error("unknown condition `{name}`")]
    UnknownCondition {
        /// The unresolved condition name.
        name: ConditionName,
    },
    /// The source failed while resolving the condition.
    #[error("source error {code}: {message}")]
    Source {
        /// Source-specific numeric error code.
        code: i32,
        /// Human-readable failure description.
        message: String,
    },
    /// The source has no decision product for this event.
    #[error("source unavailable: {detail}")]
    Unavailable {
        /// Human-readable description of what was missing.
        detail: String,
    },
}

// ============================================================================
// SECTION: Decision Source
// ============================================================================

/// Backend-agnostic source of per-event condition decisions.
///
/// Implementations answer one question: did this condition pass for the
/// event currently under evaluation? They must be deterministic for a given
/// event and must report failure through [`ResolveError`] rather than
/// guessing a decision.
pub trait DecisionSource {
    /// Resolves a single condition into its Boolean decision.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the condition is unknown, the source
    /// failed, or no decision product exists for the event.
    fn resolve(&self, name: &ConditionName) -> Result<bool, ResolveError>;
}

// ============================================================================
// SECTION: Per-Event Source Handles
// ============================================================================

/// Decision sources supplied for a single event evaluation.
///
/// Any handle may be absent; expressions in a category without a source
/// evaluate to the configured error reply and are reported as diagnostics.
#[derive(Clone, Copy, Default)]
pub struct EventDecisions<'a> {
    /// Level-1 trigger decision source.
    pub l1: Option<&'a dyn DecisionSource>,
    /// High-level trigger decision source.
    pub hlt: Option<&'a dyn DecisionSource>,
    /// Detector control system decision source.
    pub dcs: Option<&'a dyn DecisionSource>,
}

impl<'a> EventDecisions<'a> {
    /// Creates a handle set with no sources attached.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            l1: None,
            hlt: None,
            dcs: None,
        }
    }

    /// Returns the source handle for the given category, if supplied.
    #[must_use]
    pub const fn source(&self, category: Category) -> Option<&'a dyn DecisionSource> {
        match category {
            Category::L1 => self.l1,
            Category::Hlt => self.hlt,
            Category::Dcs => self.dcs,
        }
    }
}

impl fmt::Debug for EventDecisions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDecisions")
            .field("l1", &self.l1.is_some())
            .field("hlt", &self.hlt.is_some())
            .field("dcs", &self.dcs.is_some())
            .finish()
    }
}
