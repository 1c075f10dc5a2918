// crates/trig-logic/src/lib.rs
// ============================================================================
// Module: Trig Logic Root
// Description: Public API surface for the trigger logic subsystem.
// Purpose: Wire together the expression algebra, the menu grammar parser,
//          and convenience constructors.
// Dependencies: crate::{dsl, expr}
// ============================================================================

//! ## Overview
//! This crate holds the domain-agnostic half of trigger decision logic: a
//! Boolean expression tree over opaque condition keys and a parser for the
//! menu grammar (`AND`/`OR`/`NOT`/parentheses). Resolution of condition
//! names to event decisions lives with the caller, keeping this crate free
//! of any detector or data-source knowledge.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod dsl;
pub mod expr;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use dsl::ExprError;
pub use dsl::parse_expr;
pub use expr::Expr;

// ============================================================================
// SECTION: Convenience Constructors
// ============================================================================

/// Convenience functions for creating expressions without builders
pub mod convenience {
    use super::Expr;

    /// Creates an expression requiring all of the given expressions
    #[must_use]
    pub fn all<C>(exprs: Vec<Expr<C>>) -> Expr<C> {
        Expr::and(exprs)
    }

    /// Creates an expression requiring any of the given expressions
    #[must_use]
    pub fn any<C>(exprs: Vec<Expr<C>>) -> Expr<C> {
        Expr::or(exprs)
    }

    /// Creates an expression that inverts another expression
    #[must_use]
    pub fn not<C>(expr: Expr<C>) -> Expr<C> {
        Expr::negate(expr)
    }

    /// Creates an expression from a single condition
    #[must_use]
    pub const fn cond<C>(condition: C) -> Expr<C> {
        Expr::cond(condition)
    }
}
