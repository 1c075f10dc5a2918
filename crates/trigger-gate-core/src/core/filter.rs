// crates/trigger-gate-core/src/core/filter.rs
// ============================================================================
// Module: Trigger Filter Specification
// Description: Category and global filter specifications for event selection.
// Purpose: Define canonical filter specs with validation helpers.
// Dependencies: crate::core::{hashing, identifiers}, serde, thiserror
// ============================================================================

//! ## Overview
//! A filter specification lists, per decision-source category, the trigger
//! expressions an event is checked against, how results within a category
//! combine, and which Boolean stands in for a condition whose decision
//! cannot be obtained. A global combine mode joins the category verdicts;
//! when it is absent the filter is disabled and every event is accepted.
//! Specs are validated before compilation to enforce expression-count and
//! expression-size limits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::hashing;
use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::identifiers::Category;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum number of expressions a single category may list.
pub const MAX_EXPRESSIONS_PER_CATEGORY: usize = 64;
/// Maximum size of a single expression string in bytes.
pub const MAX_EXPRESSION_BYTES: usize = 4096;

// ============================================================================
// SECTION: Combine Modes
// ============================================================================

/// How multiple Boolean results are joined into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combine {
    /// Every result must hold.
    And,
    /// At least one result must hold.
    Or,
}

impl Combine {
    /// Returns the combine mode as its canonical lowercase string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl Default for Combine {
    /// Defaults to OR, accepting events that satisfy any listed expression.
    fn default() -> Self {
        Self::Or
    }
}

impl fmt::Display for Combine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Category Specification
// ============================================================================

/// Filter specification for one decision-source category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// How results of the listed expressions combine within this category.
    #[serde(default)]
    pub combine: Combine,
    /// Boolean substituted for a condition whose decision cannot be obtained.
    #[serde(default)]
    pub error_reply: bool,
    /// Expression strings in menu grammar, each optionally `~`-prefixed.
    ///
    /// An empty list makes the category trivially accept. An empty string is
    /// a configuration slot with no logic; it evaluates to `error_reply` and
    /// is reported as an empty-expression diagnostic.
    #[serde(default)]
    pub expressions: Vec<String>,
}

// ============================================================================
// SECTION: Filter Specification
// ============================================================================

/// Canonical filter specification across all decision-source categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Global combine mode joining category verdicts.
    ///
    /// When absent the filter is disabled: every event is accepted without
    /// consulting any decision source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combine: Option<Combine>,
    /// Level-1 trigger category specification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l1: Option<CategoryConfig>,
    /// High-level trigger category specification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hlt: Option<CategoryConfig>,
    /// Detector control system category specification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcs: Option<CategoryConfig>,
}

impl FilterConfig {
    /// Returns the specification for the given category, if configured.
    #[must_use]
    pub const fn category(&self, category: Category) -> Option<&CategoryConfig> {
        match category {
            Category::L1 => self.l1.as_ref(),
            Category::Hlt => self.hlt.as_ref(),
            Category::Dcs => self.dcs.as_ref(),
        }
    }

    /// Computes the canonical hash of the filter specification.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Canonicalization`] when serialization fails.
    pub fn canonical_hash(&self) -> Result<HashDigest, HashError> {
        hashing::hash_canonical_json(DEFAULT_HASH_ALGORITHM, self)
    }

    /// Validates the filter specification invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when a category lists too many expressions or
    /// an expression exceeds the size limit.
    pub fn validate(&self) -> Result<(), FilterError> {
        for category in Category::ALL {
            if let Some(spec) = self.category(category) {
                ensure_expression_count(category, spec)?;
                ensure_expression_sizes(category, spec)?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Validation Errors
// ============================================================================

/// Errors raised by filter specification validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A category lists more expressions than the configured limit.
    #[error("category {category} lists {count} expressions (max {max})")]
    TooManyExpressions {
        /// Category holding the oversized list.
        category: Category,
        /// Number of expressions listed.
        count: usize,
        /// Maximum allowed expressions per category.
        max: usize,
    },
    /// A single expression exceeds the size limit.
    #[error("category {category} expression {index} is {actual_bytes} bytes (max {max_bytes})")]
    ExpressionTooLong {
        /// Category holding the oversized expression.
        category: Category,
        /// Zero-based index of the expression within the category list.
        index: usize,
        /// Actual expression length in bytes.
        actual_bytes: usize,
        /// Maximum allowed expression length in bytes.
        max_bytes: usize,
    },
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Ensures a category does not list more expressions than allowed.
fn ensure_expression_count(category: Category, spec: &CategoryConfig) -> Result<(), FilterError> {
    if spec.expressions.len() > MAX_EXPRESSIONS_PER_CATEGORY {
        return Err(FilterError::TooManyExpressions {
            category,
            count: spec.expressions.len(),
            max: MAX_EXPRESSIONS_PER_CATEGORY,
        });
    }
    Ok(())
}

/// Ensures every expression in a category fits the size limit.
fn ensure_expression_sizes(category: Category, spec: &CategoryConfig) -> Result<(), FilterError> {
    for (index, expression) in spec.expressions.iter().enumerate() {
        if expression.len() > MAX_EXPRESSION_BYTES {
            return Err(FilterError::ExpressionTooLong {
                category,
                index,
                actual_bytes: expression.len(),
                max_bytes: MAX_EXPRESSION_BYTES,
            });
        }
    }
    Ok(())
}
