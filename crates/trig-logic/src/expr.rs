// crates/trig-logic/src/expr.rs
// ============================================================================
// Module: Expression Core Types
// Description: Boolean algebra over typed trigger conditions.
// Purpose: Define the `Expr` tree and its evaluation, inspection, and
//          construction helpers.
// Dependencies: serde::{Deserialize, Serialize}, smallvec::SmallVec
// ============================================================================

//! ## Overview
//! This module defines the core expression structure: a composable Boolean
//! algebra whose leaves are domain-specific condition keys. Evaluation is a
//! pure reduction against a caller-supplied lookup, so the same tree can be
//! replayed against any assignment of condition values while preserving
//! short-circuit guarantees.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// SECTION: Expression Definition
// ============================================================================

/// Boolean expression tree with domain-specific condition leaves
///
/// The logical operators (And, Or, Not) are universal and domain-agnostic,
/// while the Cond variant is the boundary where domain-specific meaning is
/// injected. The tree never resolves conditions itself: callers first decide
/// a Boolean for every leaf, then [`Expr::eval`] reduces the tree against
/// that assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr<C> {
    /// Logical AND: all operands must hold
    ///
    /// Evaluation short-circuits on the first false operand. Empty And is
    /// trivially true (mathematical identity).
    And(SmallVec<[Box<Self>; 4]>),

    /// Logical OR: at least one operand must hold
    ///
    /// Evaluation short-circuits on the first true operand. Empty Or is
    /// trivially false (no options available).
    Or(SmallVec<[Box<Self>; 4]>),

    /// Logical NOT: inverts the operand
    ///
    /// Boxed to keep the enum size manageable since Not is less common.
    Not(Box<Self>),

    /// Domain-specific atomic condition
    ///
    /// For trigger menus this is a condition key such as an L1 seed name or
    /// an HLT path name; the algebra itself never inspects it.
    Cond(C),
}

// ============================================================================
// SECTION: Evaluation Helpers
// ============================================================================

impl<C> Expr<C> {
    /// Evaluates this expression against a condition-value lookup
    ///
    /// This method implements the universal Boolean reduction with optimal
    /// control flow. Condition values come from the caller, typically a
    /// table built by resolving every leaf up front, so the lookup must be
    /// total over the conditions the tree mentions.
    pub fn eval<F>(&self, lookup: &F) -> bool
    where
        F: Fn(&C) -> bool,
    {
        match self {
            // Delegate to the caller-supplied condition assignment
            Self::Cond(condition) => lookup(condition),

            // Simple negation
            Self::Not(expr) => !expr.eval(lookup),

            // Short-circuit AND: exit on first false operand
            Self::And(exprs) => {
                for expr in exprs {
                    if !expr.eval(lookup) {
                        return false;
                    }
                }
                true
            }

            // Short-circuit OR: exit on first true operand
            Self::Or(exprs) => {
                for expr in exprs {
                    if expr.eval(lookup) {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Collects the distinct conditions this expression mentions
    ///
    /// Conditions are returned in first-appearance order under a left-to-right
    /// walk, with duplicates removed. This is the leaf set a resolver must
    /// cover before [`Expr::eval`] can run.
    pub fn conditions(&self) -> Vec<&C>
    where
        C: PartialEq,
    {
        let mut found = Vec::new();
        self.collect_conditions(&mut found);
        found
    }

    /// Walks the tree, appending each condition not yet seen
    fn collect_conditions<'a>(&'a self, found: &mut Vec<&'a C>)
    where
        C: PartialEq,
    {
        match self {
            Self::Cond(condition) => {
                if !found.contains(&condition) {
                    found.push(condition);
                }
            }
            Self::Not(expr) => expr.collect_conditions(found),
            Self::And(exprs) | Self::Or(exprs) => {
                for expr in exprs {
                    expr.collect_conditions(found);
                }
            }
        }
    }

    /// Determines if this expression is true regardless of condition values
    pub fn is_trivially_true(&self) -> bool {
        match self {
            // Empty And is trivially true (mathematical identity)
            Self::And(exprs) if exprs.is_empty() => true,

            // And is trivially true if every operand is
            Self::And(exprs) => exprs.iter().all(|e| e.is_trivially_true()),

            // Or is trivially true if any operand is
            Self::Or(exprs) => exprs.iter().any(|e| e.is_trivially_true()),

            // Not is trivially true if the operand is trivially false
            Self::Not(expr) => expr.is_trivially_false(),

            // Conditions depend on the assignment
            Self::Cond(_) => false,
        }
    }

    /// Determines if this expression is false regardless of condition values
    pub fn is_trivially_false(&self) -> bool {
        match self {
            // Empty Or is trivially false (no options)
            Self::Or(exprs) if exprs.is_empty() => true,

            // And is trivially false if any operand is
            Self::And(exprs) => exprs.iter().any(|e| e.is_trivially_false()),

            // Or is trivially false if every operand is
            Self::Or(exprs) => exprs.iter().all(|e| e.is_trivially_false()),

            // Not is trivially false if the operand is trivially true
            Self::Not(expr) => expr.is_trivially_true(),

            // Conditions depend on the assignment
            Self::Cond(_) => false,
        }
    }

    /// Returns the node count of this expression tree
    pub fn complexity(&self) -> usize {
        match self {
            Self::Cond(_) => 1,
            Self::Not(expr) => 1 + expr.complexity(),
            Self::And(exprs) | Self::Or(exprs) => {
                1 + exprs.iter().map(|e| e.complexity()).sum::<usize>()
            }
        }
    }

    /// Maps every condition leaf through `f`, preserving the tree shape
    ///
    /// This is how parsed trees over raw strings become trees over typed
    /// condition keys without re-walking the grammar.
    pub fn map<D, F>(self, f: &F) -> Expr<D>
    where
        F: Fn(C) -> D,
    {
        match self {
            Self::Cond(condition) => Expr::Cond(f(condition)),
            Self::Not(expr) => Expr::Not(Box::new(expr.map(f))),
            Self::And(exprs) => {
                Expr::And(exprs.into_iter().map(|e| Box::new(e.map(f))).collect())
            }
            Self::Or(exprs) => Expr::Or(exprs.into_iter().map(|e| Box::new(e.map(f))).collect()),
        }
    }
}

// ============================================================================
// SECTION: Constructor Helpers
// ============================================================================

impl<C> Expr<C> {
    /// Creates a logical AND of the given expressions
    pub fn and(exprs: Vec<Self>) -> Self {
        Self::And(exprs.into_iter().map(Box::new).collect())
    }

    /// Creates a logical OR of the given expressions
    pub fn or(exprs: Vec<Self>) -> Self {
        Self::Or(exprs.into_iter().map(Box::new).collect())
    }

    /// Creates a logical NOT of the given expression
    pub fn negate(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }

    /// Creates an expression from a single condition
    pub const fn cond(condition: C) -> Self {
        Self::Cond(condition)
    }
}

impl<C> std::ops::Not for Expr<C> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

// ============================================================================
// SECTION: Default Implementations
// ============================================================================

impl<C> Default for Expr<C> {
    /// Creates an empty And expression (trivially true)
    fn default() -> Self {
        Self::And(SmallVec::new())
    }
}
