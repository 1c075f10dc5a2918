// crates/trigger-gate-core/src/core/identifiers.rs
// ============================================================================
// Module: Trigger Gate Identifiers
// Description: Canonical identifiers for conditions, categories, and events.
// Purpose: Provide strongly typed, serializable keys with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical identifiers used throughout Trigger
//! Gate. Condition names are opaque and serialize as strings; validation is
//! handled at the grammar and configuration boundaries rather than within
//! these simple wrappers. Event coordinates follow the run / luminosity
//! section / event numbering used by detector data products.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Condition Names
// ============================================================================

/// Name of a single trigger condition, such as an L1 seed or HLT path.
///
/// The name carries no negation marker; marker stripping happens before a
/// name is constructed from menu text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionName(String);

impl ConditionName {
    /// Creates a new condition name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ConditionName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ConditionName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Decision Categories
// ============================================================================

/// Decision-source category a filter expression is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Level-1 hardware trigger decisions.
    L1,
    /// High-level trigger path decisions.
    Hlt,
    /// Detector control system partition states.
    Dcs,
}

impl Category {
    /// All categories in their fixed evaluation order.
    pub const ALL: [Self; 3] = [Self::L1, Self::Hlt, Self::Dcs];

    /// Returns the category as its canonical lowercase string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::L1 => "l1",
            Self::Hlt => "hlt",
            Self::Dcs => "dcs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Event Coordinates
// ============================================================================

/// Coordinates of a single collision event.
///
/// Events are addressed by run number, luminosity section, and event number;
/// the triple is carried through evaluation reports so accept decisions can
/// be traced back to the event they were made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    /// Run number the event was recorded in.
    pub run: u32,
    /// Luminosity section within the run.
    pub lumi: u32,
    /// Event number within the run.
    pub event: u64,
}

impl EventId {
    /// Creates event coordinates from their three components.
    #[must_use]
    pub const fn new(run: u32, lumi: u32, event: u64) -> Self {
        Self {
            run,
            lumi,
            event,
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.run, self.lumi, self.event)
    }
}
