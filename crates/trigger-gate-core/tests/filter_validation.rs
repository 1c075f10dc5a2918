// crates/trigger-gate-core/tests/filter_validation.rs
// ============================================================================
// Module: Filter Validation Tests
// Description: Tests for filter configuration limits and canonical hashing.
// ============================================================================
//! ## Overview
//! Ensures configuration limits are enforced per category and that canonical
//! hashes are stable for identical configurations.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use trigger_gate_core::Category;
use trigger_gate_core::CategoryConfig;
use trigger_gate_core::Combine;
use trigger_gate_core::FilterConfig;
use trigger_gate_core::FilterError;
use trigger_gate_core::MAX_EXPRESSIONS_PER_CATEGORY;
use trigger_gate_core::MAX_EXPRESSION_BYTES;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

fn hlt_only(expressions: Vec<String>) -> FilterConfig {
    FilterConfig {
        combine: Some(Combine::Or),
        l1: None,
        hlt: Some(CategoryConfig {
            combine: Combine::Or,
            error_reply: false,
            expressions,
        }),
        dcs: None,
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Verifies a configuration within limits validates cleanly.
#[test]
fn configuration_within_limits_is_valid() {
    let config = hlt_only(vec!["HLT_IsoMu24".to_string(), "~HLT_Ele35".to_string()]);
    assert!(config.validate().is_ok());
}

/// Verifies the default configuration is valid and fully disabled.
#[test]
fn default_configuration_is_valid_and_disabled() {
    let config = FilterConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.combine.is_none());
    for category in Category::ALL {
        assert!(config.category(category).is_none());
    }
}

/// Verifies the expression-count limit is enforced per category.
#[test]
fn expression_count_limit_is_enforced() {
    let expressions = vec!["HLT_IsoMu24".to_string(); MAX_EXPRESSIONS_PER_CATEGORY + 1];
    let config = hlt_only(expressions);

    let error = config.validate().expect_err("count over limit");
    match error {
        FilterError::TooManyExpressions {
            category,
            count,
            max,
        } => {
            assert_eq!(category, Category::Hlt);
            assert_eq!(count, MAX_EXPRESSIONS_PER_CATEGORY + 1);
            assert_eq!(max, MAX_EXPRESSIONS_PER_CATEGORY);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Verifies the per-expression size limit is enforced with its index.
#[test]
fn expression_size_limit_is_enforced() {
    let oversized = "x".repeat(MAX_EXPRESSION_BYTES + 1);
    let config = hlt_only(vec!["HLT_IsoMu24".to_string(), oversized]);

    let error = config.validate().expect_err("expression over limit");
    match error {
        FilterError::ExpressionTooLong {
            category,
            index,
            actual_bytes,
            max_bytes,
        } => {
            assert_eq!(category, Category::Hlt);
            assert_eq!(index, 1);
            assert_eq!(actual_bytes, MAX_EXPRESSION_BYTES + 1);
            assert_eq!(max_bytes, MAX_EXPRESSION_BYTES);
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Verifies an expression exactly at the size limit is accepted.
#[test]
fn expression_at_size_limit_is_valid() {
    let config = hlt_only(vec!["x".repeat(MAX_EXPRESSION_BYTES)]);
    assert!(config.validate().is_ok());
}

// ============================================================================
// SECTION: Canonical Hashing
// ============================================================================

/// Verifies identical configurations hash identically.
#[test]
fn canonical_hash_is_stable_for_equal_configs() {
    let first = hlt_only(vec!["HLT_IsoMu24".to_string()]);
    let second = hlt_only(vec!["HLT_IsoMu24".to_string()]);

    let hash_a = first.canonical_hash().expect("hash first");
    let hash_b = second.canonical_hash().expect("hash second");
    assert_eq!(hash_a, hash_b);
}

/// Verifies differing configurations produce differing hashes.
#[test]
fn canonical_hash_distinguishes_configs() {
    let first = hlt_only(vec!["HLT_IsoMu24".to_string()]);
    let second = hlt_only(vec!["HLT_IsoMu27".to_string()]);

    let hash_a = first.canonical_hash().expect("hash first");
    let hash_b = second.canonical_hash().expect("hash second");
    assert_ne!(hash_a, hash_b);
}

// ============================================================================
// SECTION: Combination Modes
// ============================================================================

/// Verifies combination modes serialize as lowercase tags.
#[test]
fn combine_serializes_as_lowercase() {
    assert_eq!(serde_json::to_string(&Combine::And).expect("serialize"), "\"and\"");
    assert_eq!(serde_json::to_string(&Combine::Or).expect("serialize"), "\"or\"");
    assert_eq!(Combine::And.as_str(), "and");
    assert_eq!(Combine::default(), Combine::Or);
}
