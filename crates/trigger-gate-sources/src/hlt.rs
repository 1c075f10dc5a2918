// crates/trigger-gate-sources/src/hlt.rs
// ============================================================================
// Module: HLT Path Source
// Description: Decision source over per-event high-level trigger results.
// Purpose: Resolve HLT path names against the event's trigger results.
// Dependencies: trigger-gate-core
// ============================================================================

//! ## Overview
//! HLT decisions come from a per-event trigger-results product. Unlike the
//! Level-1 menu, that product can be missing or unreadable for an event, in
//! which case every resolution reports the product as unavailable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use trigger_gate_core::ConditionName;
use trigger_gate_core::DecisionSource;
use trigger_gate_core::ResolveError;

use crate::table::DecisionTable;

// ============================================================================
// SECTION: HLT Path Source
// ============================================================================

/// Per-event trigger results, or the reason they are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathResults {
    /// Path decisions recorded for this event.
    Present(DecisionTable),
    /// No results product accompanied this event.
    Absent {
        /// Human-readable description of what was missing.
        detail: String,
    },
}

/// Decision source for high-level trigger path decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HltPathSource {
    /// The event's trigger results, when present.
    results: PathResults,
}

impl HltPathSource {
    /// Creates a source over the event's path decisions.
    #[must_use]
    pub const fn from_table(results: DecisionTable) -> Self {
        Self {
            results: PathResults::Present(results),
        }
    }

    /// Builds a source from plain path decisions.
    #[must_use]
    pub fn from_decisions<I, N>(decisions: I) -> Self
    where
        I: IntoIterator<Item = (N, bool)>,
        N: Into<String>,
    {
        Self::from_table(DecisionTable::from_decisions(decisions))
    }

    /// Creates a source whose results product is missing for this event.
    #[must_use]
    pub fn absent(detail: impl Into<String>) -> Self {
        Self {
            results: PathResults::Absent {
                detail: detail.into(),
            },
        }
    }

    /// Returns `true` when a results product is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self.results, PathResults::Present(_))
    }
}

impl DecisionSource for HltPathSource {
    fn resolve(&self, name: &ConditionName) -> Result<bool, ResolveError> {
        match &self.results {
            PathResults::Present(table) => table.lookup(name),
            PathResults::Absent {
                detail,
            } => Err(ResolveError::Unavailable {
                detail: detail.clone(),
            }),
        }
    }
}
