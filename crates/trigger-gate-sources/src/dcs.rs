// crates/trigger-gate-sources/src/dcs.rs
// ============================================================================
// Module: DCS Status Source
// Description: Decision source over per-event detector-control status.
// Purpose: Resolve detector partition names against the event's DCS record.
// Dependencies: trigger-gate-core
// ============================================================================

//! ## Overview
//! Detector-control decisions ask whether a named detector partition was
//! ready while the event was taken. Partition names form a fixed vocabulary;
//! asking for a name outside it is a configuration mistake and reported as an
//! unknown condition even when the per-event record is missing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use trigger_gate_core::ConditionName;
use trigger_gate_core::DecisionSource;
use trigger_gate_core::ResolveError;

// ============================================================================
// SECTION: Partition Vocabulary
// ============================================================================

/// Detector partition names, in status-record bit order.
pub const DCS_PARTITION_NAMES: [&str; 25] = [
    "EBp", "EBm", "EEp", "EEm", "HBHEa", "HBHEb", "HBHEc", "HF", "HO", "RPC", "DT0", "DTp",
    "DTm", "CSCp", "CSCm", "CASTOR", "ZDC", "TIBTID", "TOB", "TECp", "TECm", "BPIX", "FPIX",
    "ESp", "ESm",
];

/// Returns `true` when the name is a known detector partition.
#[must_use]
pub fn is_known_partition(name: &str) -> bool {
    DCS_PARTITION_NAMES.contains(&name)
}

// ============================================================================
// SECTION: DCS Status Source
// ============================================================================

/// Decision source for detector-control readiness.
///
/// A partition resolves to `true` when the event's status record marks it
/// ready. The record itself can be missing for an event, in which case every
/// known partition reports the record as unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcsStatusSource {
    /// Partitions marked ready in the event's record, when a record exists.
    ready: Option<BTreeSet<String>>,
}

impl DcsStatusSource {
    /// Creates a source from the partitions marked ready for this event.
    pub fn from_ready<I, N>(ready: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            ready: Some(ready.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates a source whose status record is missing for this event.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            ready: None,
        }
    }

    /// Returns `true` when a status record is present.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.ready.is_some()
    }
}

impl DecisionSource for DcsStatusSource {
    fn resolve(&self, name: &ConditionName) -> Result<bool, ResolveError> {
        if !is_known_partition(name.as_str()) {
            return Err(ResolveError::UnknownCondition {
                name: name.clone(),
            });
        }
        match &self.ready {
            Some(ready) => Ok(ready.contains(name.as_str())),
            None => Err(ResolveError::Unavailable {
                detail: "no DCS status record for event".to_string(),
            }),
        }
    }
}
