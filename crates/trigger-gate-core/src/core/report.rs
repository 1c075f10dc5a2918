// crates/trigger-gate-core/src/core/report.rs
// ============================================================================
// Module: Trigger Gate Evaluation Reports
// Description: Verdicts, category results, and recovery diagnostics.
// Purpose: Capture per-event evaluation outcomes in a serializable record.
// Dependencies: crate::core::{filter, hashing, identifiers}, serde
// ============================================================================

//! ## Overview
//! Evaluation never aborts on a missing menu entry or a failed source; it
//! substitutes the configured error reply and keeps going. The report is the
//! durable account of that process: which categories were checked, what each
//! decided, and a diagnostic for every substitution that was made. Reports
//! serialize cleanly so downstream bookkeeping can archive or forward them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::filter::Combine;
use crate::core::hashing::HashDigest;
use crate::core::identifiers::Category;
use crate::core::identifiers::ConditionName;
use crate::core::identifiers::EventId;

// ============================================================================
// SECTION: Diagnostics
// ============================================================================

/// Why a configured expression could not be evaluated normally.
///
/// # Invariants
/// - Variants are stable for serialization and downstream matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticCause {
    /// The expression slot holds no logic after marker stripping.
    EmptyExpression,
    /// A condition name is not known to its decision source.
    UnknownCondition {
        /// The unresolved condition name.
        name: ConditionName,
    },
    /// The decision source failed while resolving a condition.
    SourceError {
        /// The condition whose resolution failed.
        name: ConditionName,
        /// Source-specific numeric error code.
        code: i32,
        /// Human-readable failure description.
        message: String,
    },
    /// The decision source had no product for this event.
    SourceUnavailable {
        /// Human-readable description of what was missing.
        detail: String,
    },
    /// No decision source was supplied for the category.
    SourceMissing,
}

/// Record of one error-reply substitution made during evaluation.
///
/// # Invariants
/// - `expression_index` addresses the expression list of `category` in the
///   filter specification the report was produced under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Category the affected expression belongs to.
    pub category: Category,
    /// Zero-based index of the expression within its category list.
    pub expression_index: usize,
    /// Expression text as configured, including any negation marker.
    pub expression: String,
    /// Why normal evaluation was not possible.
    pub cause: DiagnosticCause,
    /// Boolean substituted so evaluation could continue.
    pub substituted: bool,
}

// ============================================================================
// SECTION: Category Verdicts
// ============================================================================

/// Outcome of one decision-source category.
///
/// # Invariants
/// - `evaluated <= total`; a gap means the combine mode short-circuited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryVerdict {
    /// Category this verdict belongs to.
    pub category: Category,
    /// Combine mode the expression results were joined under.
    pub combine: Combine,
    /// Whether the category accepted the event.
    pub accepted: bool,
    /// Number of expressions evaluated before the verdict was known.
    pub evaluated: usize,
    /// Number of expressions listed for the category.
    pub total: usize,
}

// ============================================================================
// SECTION: Evaluation Report
// ============================================================================

/// Full account of one event evaluation.
///
/// # Invariants
/// - `errored` is true exactly when `diagnostics` is non-empty.
/// - `category_verdicts` follows the fixed category evaluation order and
///   contains only categories that were actually consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Coordinates of the evaluated event.
    pub event: EventId,
    /// Canonical digest of the filter specification that was applied.
    pub spec_hash: HashDigest,
    /// Per-category outcomes in evaluation order.
    pub category_verdicts: Vec<CategoryVerdict>,
    /// One record per error-reply substitution, in discovery order.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any substitution was made while producing this report.
    pub errored: bool,
}

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Accept decision for one event, paired with its report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether the event passes the filter.
    pub accepted: bool,
    /// Full evaluation account behind the decision.
    pub report: EvaluationReport,
}
