// crates/trigger-gate-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Trigger Gate Evaluator
// Description: Filter compilation and deterministic per-event evaluation.
// Purpose: Turn a filter configuration into accept/reject verdicts with full
//          substitution reporting.
// Dependencies: crate::{core, interfaces}, trig-logic
// ============================================================================

//! ## Overview
//! The evaluator compiles a [`FilterConfig`] once into a [`TriggerGate`] and
//! then answers one question per event: accept or reject. Evaluation is a
//! two-pass process per expression: pass 1 resolves every named condition
//! through the supplied decision source into a value table, pass 2 reduces
//! the parsed logic tree against that table. Resolution failures never abort
//! evaluation; the failing operand takes the category's error reply and the
//! substitution is recorded in the verdict's report.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use trig_logic::Expr;
use trig_logic::ExprError;
use trig_logic::parse_expr;

use crate::core::Category;
use crate::core::CategoryConfig;
use crate::core::CategoryVerdict;
use crate::core::Combine;
use crate::core::ConditionName;
use crate::core::Diagnostic;
use crate::core::DiagnosticCause;
use crate::core::EvaluationReport;
use crate::core::EventId;
use crate::core::FilterConfig;
use crate::core::FilterError;
use crate::core::Verdict;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::negation::strip_negation;
use crate::interfaces::DecisionSource;
use crate::interfaces::EventDecisions;
use crate::interfaces::ResolveError;

// ============================================================================
// SECTION: Gate Errors
// ============================================================================

/// Errors raised while compiling a filter configuration into a gate.
///
/// Compilation is the only fallible step; evaluation itself always produces
/// a verdict.
#[derive(Debug, Error)]
pub enum GateError {
    /// Filter configuration failed validation.
    #[error("invalid filter configuration: {0}")]
    InvalidFilter(#[from] FilterError),
    /// A non-empty expression failed to parse.
    #[error("malformed {category} expression at index {index}: {source}")]
    Expression {
        /// Category whose expression list holds the malformed entry.
        category: Category,
        /// Position of the malformed entry in the expression list.
        index: usize,
        /// Underlying grammar error.
        #[source]
        source: ExprError,
    },
    /// Canonical hashing of the filter configuration failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

// ============================================================================
// SECTION: Compiled Filter Plan
// ============================================================================

/// One compiled expression slot within a category.
#[derive(Debug, Clone)]
struct CompiledExpression {
    /// Expression text as configured, including any negation marker.
    source: String,
    /// Parsed logic tree, or `None` when the slot is empty after marker
    /// stripping. Empty slots substitute the category error reply at run
    /// time instead of failing compilation.
    tree: Option<Expr<ConditionName>>,
}

/// Compiled evaluation plan for one configured category.
#[derive(Debug, Clone)]
struct CompiledCategory {
    /// Decision category this plan covers.
    category: Category,
    /// Combination mode across the expression list.
    combine: Combine,
    /// Decision substituted whenever resolution fails.
    error_reply: bool,
    /// Compiled expression slots in configuration order.
    expressions: Vec<CompiledExpression>,
}

// ============================================================================
// SECTION: Trigger Gate
// ============================================================================

/// Compiled trigger filter ready for per-event evaluation.
///
/// # Invariants
/// - `categories` holds only configured categories, in [`Category::ALL`]
///   order.
/// - `spec_hash` is the canonical hash of the originating [`FilterConfig`].
/// - Expressions are parsed exactly once, at construction.
#[derive(Debug, Clone)]
pub struct TriggerGate {
    /// Global combination mode; `None` disables filtering entirely.
    global: Option<Combine>,
    /// Compiled plans for the configured categories.
    categories: Vec<CompiledCategory>,
    /// Canonical hash of the source configuration.
    spec_hash: HashDigest,
}

impl TriggerGate {
    /// Compiles a filter configuration into an evaluable gate.
    ///
    /// # Errors
    ///
    /// Returns [`GateError`] when the configuration fails validation, a
    /// non-empty expression fails to parse, or canonical hashing fails.
    pub fn new(config: FilterConfig) -> Result<Self, GateError> {
        config.validate()?;
        let spec_hash = config.canonical_hash()?;

        let mut categories = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            if let Some(category_config) = config.category(category) {
                categories.push(compile_category(category, category_config)?);
            }
        }

        Ok(Self {
            global: config.combine,
            categories,
            spec_hash,
        })
    }

    /// Returns the canonical hash of the source configuration.
    #[must_use]
    pub const fn spec_hash(&self) -> &HashDigest {
        &self.spec_hash
    }

    /// Returns the global combination mode, or `None` when filtering is
    /// disabled.
    #[must_use]
    pub const fn global_combine(&self) -> Option<Combine> {
        self.global
    }

    /// Returns `true` when the gate accepts every event without consulting
    /// any decision source.
    #[must_use]
    pub const fn is_unconditional(&self) -> bool {
        self.global.is_none()
    }

    /// Evaluates the gate for one event against the supplied decision
    /// sources.
    ///
    /// Evaluation never fails: every resolution problem is recorded as a
    /// diagnostic and replaced by the owning category's error reply. An
    /// absent global combination mode accepts unconditionally without
    /// consulting any source.
    #[must_use]
    pub fn accepts(&self, event: EventId, sources: &EventDecisions<'_>) -> Verdict {
        let Some(global) = self.global else {
            return Verdict {
                accepted: true,
                report: EvaluationReport {
                    event,
                    spec_hash: self.spec_hash.clone(),
                    category_verdicts: Vec::new(),
                    diagnostics: Vec::new(),
                    errored: false,
                },
            };
        };

        let mut category_verdicts = Vec::with_capacity(self.categories.len());
        let mut diagnostics = Vec::new();
        // Start from the neutral element of the global combination so that a
        // configuration with no categories resolves the same way an empty
        // reduction would.
        let mut accepted = matches!(global, Combine::And);

        for compiled in &self.categories {
            let verdict =
                evaluate_category(compiled, sources.source(compiled.category), &mut diagnostics);
            let category_accepted = verdict.accepted;
            category_verdicts.push(verdict);

            match global {
                Combine::And if !category_accepted => {
                    accepted = false;
                    break;
                }
                Combine::Or if category_accepted => {
                    accepted = true;
                    break;
                }
                Combine::And | Combine::Or => {}
            }
        }

        let errored = !diagnostics.is_empty();
        Verdict {
            accepted,
            report: EvaluationReport {
                event,
                spec_hash: self.spec_hash.clone(),
                category_verdicts,
                diagnostics,
                errored,
            },
        }
    }
}

// ============================================================================
// SECTION: Compilation Helpers
// ============================================================================

/// Compiles one category configuration into an evaluation plan.
fn compile_category(
    category: Category,
    config: &CategoryConfig,
) -> Result<CompiledCategory, GateError> {
    let mut expressions = Vec::with_capacity(config.expressions.len());
    for (index, raw) in config.expressions.iter().enumerate() {
        let (body, negated) = strip_negation(raw);
        let tree = if body.is_empty() {
            None
        } else {
            let parsed = parse_expr(body).map_err(|source| GateError::Expression {
                category,
                index,
                source,
            })?;
            let named = parsed.map(&ConditionName::new);
            Some(if negated { Expr::negate(named) } else { named })
        };
        expressions.push(CompiledExpression {
            source: raw.clone(),
            tree,
        });
    }

    Ok(CompiledCategory {
        category,
        combine: config.combine,
        error_reply: config.error_reply,
        expressions,
    })
}

// ============================================================================
// SECTION: Evaluation Helpers
// ============================================================================

/// Evaluates one compiled category against its decision source.
fn evaluate_category(
    compiled: &CompiledCategory,
    source: Option<&dyn DecisionSource>,
    diagnostics: &mut Vec<Diagnostic>,
) -> CategoryVerdict {
    let total = compiled.expressions.len();

    // An empty expression list disables the category: accept outright, under
    // either combination mode and regardless of the global mode.
    if total == 0 {
        return CategoryVerdict {
            category: compiled.category,
            combine: compiled.combine,
            accepted: true,
            evaluated: 0,
            total: 0,
        };
    }

    let mut accepted = matches!(compiled.combine, Combine::And);
    let mut evaluated = 0;
    for (index, expression) in compiled.expressions.iter().enumerate() {
        let value = evaluate_expression(compiled, index, expression, source, diagnostics);
        evaluated += 1;

        match compiled.combine {
            Combine::And if !value => {
                accepted = false;
                break;
            }
            Combine::Or if value => {
                accepted = true;
                break;
            }
            Combine::And | Combine::Or => {}
        }
    }

    CategoryVerdict {
        category: compiled.category,
        combine: compiled.combine,
        accepted,
        evaluated,
        total,
    }
}

/// Evaluates one expression slot, recording a diagnostic per substitution.
fn evaluate_expression(
    compiled: &CompiledCategory,
    index: usize,
    expression: &CompiledExpression,
    source: Option<&dyn DecisionSource>,
    diagnostics: &mut Vec<Diagnostic>,
) -> bool {
    let Some(tree) = &expression.tree else {
        diagnostics.push(Diagnostic {
            category: compiled.category,
            expression_index: index,
            expression: expression.source.clone(),
            cause: DiagnosticCause::EmptyExpression,
            substituted: compiled.error_reply,
        });
        return compiled.error_reply;
    };

    let Some(source) = source else {
        // No source handle at all: every operand takes the error reply, but
        // the tree still reduces so that negations keep their meaning.
        diagnostics.push(Diagnostic {
            category: compiled.category,
            expression_index: index,
            expression: expression.source.clone(),
            cause: DiagnosticCause::SourceMissing,
            substituted: compiled.error_reply,
        });
        return tree.eval(&|_| compiled.error_reply);
    };

    // Pass 1: resolve every named condition once into a value table.
    let mut values: Vec<(&ConditionName, bool)> = Vec::new();
    for name in tree.conditions() {
        let value = match source.resolve(name) {
            Ok(decision) => decision,
            Err(error) => {
                diagnostics.push(Diagnostic {
                    category: compiled.category,
                    expression_index: index,
                    expression: expression.source.clone(),
                    cause: diagnostic_cause(name, error),
                    substituted: compiled.error_reply,
                });
                compiled.error_reply
            }
        };
        values.push((name, value));
    }

    // Pass 2: reduce the logic tree against the value table.
    tree.eval(&|name| {
        values
            .iter()
            .find(|(known, _)| *known == name)
            .map_or(compiled.error_reply, |(_, value)| *value)
    })
}

/// Maps a resolution error onto its diagnostic cause.
fn diagnostic_cause(name: &ConditionName, error: ResolveError) -> DiagnosticCause {
    match error {
        ResolveError::UnknownCondition {
            name,
        } => DiagnosticCause::UnknownCondition {
            name,
        },
        ResolveError::Source {
            code,
            message,
        } => DiagnosticCause::SourceError {
            name: name.clone(),
            code,
            message,
        },
        ResolveError::Unavailable {
            detail,
        } => DiagnosticCause::SourceUnavailable {
            detail,
        },
    }
}
