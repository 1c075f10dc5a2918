// crates/trigger-gate-core/src/core/mod.rs
// ============================================================================
// Module: Trigger Gate Core Types
// Description: Canonical filter schema and evaluation record structures.
// Purpose: Provide stable, serializable types for filter specs and reports.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Trigger Gate core types define filter specifications, condition and event
//! identifiers, negation handling, and evaluation reports. These types are
//! the canonical source of truth for any derived surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod filter;
pub mod hashing;
pub mod identifiers;
pub mod negation;
pub mod report;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use filter::CategoryConfig;
pub use filter::Combine;
pub use filter::FilterConfig;
pub use filter::FilterError;
pub use filter::MAX_EXPRESSION_BYTES;
pub use filter::MAX_EXPRESSIONS_PER_CATEGORY;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use identifiers::Category;
pub use identifiers::ConditionName;
pub use identifiers::EventId;
pub use negation::NEGATION_MARKER;
pub use negation::strip_negation;
pub use report::CategoryVerdict;
pub use report::Diagnostic;
pub use report::DiagnosticCause;
pub use report::EvaluationReport;
pub use report::Verdict;
