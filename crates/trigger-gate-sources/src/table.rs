// crates/trigger-gate-sources/src/table.rs
// ============================================================================
// Module: Decision Table
// Description: In-memory decision table shared by the built-in sources.
// Purpose: Store per-condition decisions and recorded failures for lookup.
// Dependencies: trigger-gate-core
// ============================================================================

//! ## Overview
//! A decision table maps condition names to recorded decisions. Each entry is
//! either the decision itself or the failure its source reported in its
//! place, so a table can faithfully replay both healthy and degraded
//! readouts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use trigger_gate_core::ConditionName;
use trigger_gate_core::DecisionSource;
use trigger_gate_core::ResolveError;

// ============================================================================
// SECTION: Table Entries
// ============================================================================

/// One recorded decision, or the failure reported in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionEntry {
    /// The condition resolved to a decision.
    Decision(bool),
    /// The source failed for this condition with a nonzero code.
    Error {
        /// Source-specific numeric error code.
        code: i32,
        /// Human-readable failure description.
        message: String,
    },
}

// ============================================================================
// SECTION: Decision Table
// ============================================================================

/// In-memory decision table keyed by condition name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionTable {
    /// Recorded entries keyed by condition name.
    entries: BTreeMap<String, DecisionEntry>,
}

impl DecisionTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a table from plain decisions.
    #[must_use]
    pub fn from_decisions<I, N>(decisions: I) -> Self
    where
        I: IntoIterator<Item = (N, bool)>,
        N: Into<String>,
    {
        let mut table = Self::new();
        for (name, decision) in decisions {
            table.record(name, decision);
        }
        table
    }

    /// Records a decision for a condition, replacing any earlier entry.
    pub fn record(&mut self, name: impl Into<String>, decision: bool) {
        self.entries.insert(name.into(), DecisionEntry::Decision(decision));
    }

    /// Records a failure for a condition, replacing any earlier entry.
    pub fn record_error(&mut self, name: impl Into<String>, code: i32, message: impl Into<String>) {
        self.entries.insert(name.into(), DecisionEntry::Error {
            code,
            message: message.into(),
        });
    }

    /// Returns the entry recorded for a condition, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DecisionEntry> {
        self.entries.get(name)
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a condition against the recorded entries.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnknownCondition`] for unrecorded names and
    /// [`ResolveError::Source`] for entries recorded as failures.
    pub fn lookup(&self, name: &ConditionName) -> Result<bool, ResolveError> {
        match self.entries.get(name.as_str()) {
            Some(DecisionEntry::Decision(decision)) => Ok(*decision),
            Some(DecisionEntry::Error {
                code,
                message,
            }) => Err(ResolveError::Source {
                code: *code,
                message: message.clone(),
            }),
            None => Err(ResolveError::UnknownCondition {
                name: name.clone(),
            }),
        }
    }
}

impl DecisionSource for DecisionTable {
    fn resolve(&self, name: &ConditionName) -> Result<bool, ResolveError> {
        self.lookup(name)
    }
}

impl<N: Into<String>> FromIterator<(N, bool)> for DecisionTable {
    fn from_iter<I: IntoIterator<Item = (N, bool)>>(iter: I) -> Self {
        Self::from_decisions(iter)
    }
}
