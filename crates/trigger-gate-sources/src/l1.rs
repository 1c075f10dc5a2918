// crates/trigger-gate-sources/src/l1.rs
// ============================================================================
// Module: L1 Menu Source
// Description: Decision source backed by a persistent Level-1 menu.
// Purpose: Resolve L1 algorithm names against menu-wide decisions.
// Dependencies: trigger-gate-core
// ============================================================================

//! ## Overview
//! Level-1 algorithms resolve through a persistent menu rather than a
//! per-event data product, so this source is never "absent": a name either
//! exists in the menu or it does not.

// ============================================================================
// SECTION: Imports
// ============================================================================

use trigger_gate_core::ConditionName;
use trigger_gate_core::DecisionSource;
use trigger_gate_core::ResolveError;

use crate::table::DecisionTable;

// ============================================================================
// SECTION: L1 Menu Source
// ============================================================================

/// Decision source for Level-1 algorithm decisions.
///
/// The menu persists across events; per-event updates replace the recorded
/// decisions in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct L1MenuSource {
    /// Algorithm decisions keyed by algorithm name.
    menu: DecisionTable,
}

impl L1MenuSource {
    /// Creates a source over an existing menu table.
    #[must_use]
    pub const fn new(menu: DecisionTable) -> Self {
        Self {
            menu,
        }
    }

    /// Builds a source from plain algorithm decisions.
    #[must_use]
    pub fn from_decisions<I, N>(decisions: I) -> Self
    where
        I: IntoIterator<Item = (N, bool)>,
        N: Into<String>,
    {
        Self::new(DecisionTable::from_decisions(decisions))
    }

    /// Returns the underlying menu table.
    #[must_use]
    pub const fn menu(&self) -> &DecisionTable {
        &self.menu
    }

    /// Records an algorithm decision for the current event.
    pub fn record(&mut self, algorithm: impl Into<String>, decision: bool) {
        self.menu.record(algorithm, decision);
    }
}

impl DecisionSource for L1MenuSource {
    fn resolve(&self, name: &ConditionName) -> Result<bool, ResolveError> {
        self.menu.lookup(name)
    }
}
