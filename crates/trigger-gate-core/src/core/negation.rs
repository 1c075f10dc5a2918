// crates/trigger-gate-core/src/core/negation.rs
// ============================================================================
// Module: Negation Marker Handling
// Description: Leading-marker negation for configured filter expressions.
// Purpose: Split an expression string into its negation flag and remainder.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Filter configurations may prefix a whole expression with `~` to request
//! the inverted decision, e.g. `~HLT_IsoMu24` accepts events where the path
//! did not fire. The marker applies once, to the whole expression, and is
//! stripped before the remainder reaches the grammar parser.

// ============================================================================
// SECTION: Marker
// ============================================================================

/// Marker character that inverts a whole configured expression.
pub const NEGATION_MARKER: char = '~';

// ============================================================================
// SECTION: Stripping
// ============================================================================

/// Splits an expression string into its remainder and negation flag.
///
/// The input is trimmed, then a single leading [`NEGATION_MARKER`] is
/// removed if present. Whitespace between the marker and the remainder is
/// dropped, so `~ HLT_IsoMu24` and `~HLT_IsoMu24` are equivalent. A marker
/// with nothing after it yields an empty remainder; callers treat that the
/// same as an empty expression.
#[must_use]
pub fn strip_negation(raw: &str) -> (&str, bool) {
    let trimmed = raw.trim();
    trimmed.strip_prefix(NEGATION_MARKER).map_or((trimmed, false), |rest| {
        (rest.trim_start(), true)
    })
}
