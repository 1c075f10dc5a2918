// crates/trig-logic/src/dsl.rs
// ============================================================================
// Module: Trigger Expression Grammar
// Description: Parser for menu-style Boolean trigger expressions.
// Purpose: Turn expressions such as `A AND (B OR NOT C)` into `Expr<String>`
//          trees with input-size and nesting limits enforced.
// Dependencies: crate::expr::Expr
// ============================================================================

//! ## Overview
//!
//! Trigger menus write selection logic as plain text, for example
//! `L1_SingleMu7 AND (HLT_IsoMu24 OR NOT HLT_Ele35)`. This module parses that
//! grammar into an [`Expr`] tree. Condition names are kept as opaque strings:
//! the parser never looks them up, so unknown names surface later, when the
//! tree is evaluated against a concrete event. Expression text is untrusted
//! configuration input; size and nesting limits are enforced here.
//!
//! ### Grammar (informal)
//! - **Conditions**: identifiers matching `[A-Za-z_][A-Za-z0-9_]*`, such as
//!   `L1_SingleMu7` or `HLT_IsoMu24_v2`
//! - **Operators**: the exact keywords `AND`, `OR`, `NOT` (case-sensitive, so
//!   `And` or `and` is an ordinary condition name)
//! - **Parentheses**: `( ... )` for explicit grouping
//! - **Precedence**: `NOT` binds tightest, then `AND`, then `OR`
//!
//! ### Example
//!
//! ```
//! use trig_logic::parse_expr;
//!
//! let expr = parse_expr("L1_SingleMu7 AND (HLT_IsoMu24 OR NOT HLT_Ele35)").unwrap();
//! assert_eq!(expr.conditions().len(), 3);
//! ```

use std::fmt;

use crate::expr::Expr;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum allowed expression input size in bytes.
const MAX_EXPR_INPUT_BYTES: usize = 64 * 1024;
/// Maximum supported nesting depth for expressions.
const MAX_EXPR_NESTING: usize = 32;

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Errors that can occur while parsing a trigger expression.
///
/// # Invariants
/// - None. Variants capture structured parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Input was empty or contained only whitespace.
    EmptyInput,
    /// Input exceeded the configured size limit.
    InputTooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual input length in bytes.
        actual_bytes: usize,
    },
    /// Input exceeded the configured nesting depth.
    NestingTooDeep {
        /// Maximum allowed nesting depth.
        max_depth: usize,
        /// Actual nesting depth when the error occurred.
        actual_depth: usize,
        /// Byte offset in the original input.
        position: usize,
    },
    /// Unexpected token encountered during parsing.
    UnexpectedToken {
        /// Human-friendly expectation summary.
        expected: &'static str,
        /// The token that was actually seen.
        found: String,
        /// Byte offset in the original input.
        position: usize,
    },
    /// Unexpected trailing input after a complete expression.
    TrailingInput {
        /// Byte offset where unexpected input begins.
        position: usize,
    },
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "expression is empty"),
            Self::InputTooLarge {
                max_bytes,
                actual_bytes,
            } => {
                write!(f, "expression exceeds size limit: {actual_bytes} bytes (max {max_bytes})")
            }
            Self::NestingTooDeep {
                max_depth,
                actual_depth,
                position,
            } => write!(
                f,
                "expression nesting exceeds limit: depth {actual_depth} (max {max_depth}) at \
                 {position}"
            ),
            Self::UnexpectedToken {
                expected,
                found,
                position,
            } => {
                write!(f, "unexpected token `{found}` at {position}, expected {expected}")
            }
            Self::TrailingInput {
                position,
            } => {
                write!(f, "unexpected trailing input at {position}")
            }
        }
    }
}

impl std::error::Error for ExprError {}

/// Parses a trigger expression into an [`Expr`] tree over condition names.
///
/// # Arguments
/// * `input` - Expression text (e.g., `"L1_SingleMu7 AND NOT HLT_Ele35"`).
///
/// # Errors
/// Returns [`ExprError`] for empty input, oversized input, excessive nesting,
/// syntax errors, or trailing input after a complete expression.
pub fn parse_expr(input: &str) -> Result<Expr<String>, ExprError> {
    if input.len() > MAX_EXPR_INPUT_BYTES {
        return Err(ExprError::InputTooLarge {
            max_bytes: MAX_EXPR_INPUT_BYTES,
            actual_bytes: input.len(),
        });
    }
    let mut lexer = Lexer::new(input);
    let tokens = lexer.lex()?;

    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expression()?;
    parser.expect_eof()?;

    Ok(expr)
}

// ============================================================================
// SECTION: Lexer
// ============================================================================

/// Lexer token produced from the expression input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Condition name token.
    Ident(&'a str),
    /// Logical AND keyword.
    And,
    /// Logical OR keyword.
    Or,
    /// Logical NOT keyword.
    Not,
    /// Left parenthesis.
    LParen,
    /// Right parenthesis.
    RParen,
    /// End-of-input marker.
    Eof,
}

/// Token paired with its byte offset.
#[derive(Debug, Clone, Copy)]
struct SpannedToken<'a> {
    /// Token value.
    token: Token<'a>,
    /// Byte offset into the input.
    position: usize,
}

/// Lexer for the trigger expression grammar.
struct Lexer<'a> {
    /// Source input being tokenized.
    input: &'a str,
    /// Current byte offset into the input.
    offset: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
        }
    }

    /// Lexes the input into a sequence of tokens.
    fn lex(&mut self) -> Result<Vec<SpannedToken<'a>>, ExprError> {
        let mut tokens = Vec::new();
        let bytes = self.input.as_bytes();

        while self.offset < bytes.len() {
            let ch = bytes[self.offset];
            match ch {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.offset += 1;
                }
                b'(' => {
                    tokens.push(self.simple(Token::LParen));
                    self.offset += 1;
                }
                b')' => {
                    tokens.push(self.simple(Token::RParen));
                    self.offset += 1;
                }
                b'a' ..= b'z' | b'A' ..= b'Z' | b'_' => {
                    let start = self.offset;
                    self.consume_while(bytes, |b| b.is_ascii_alphanumeric() || b == b'_');
                    let slice = &self.input[start .. self.offset];
                    tokens.push(SpannedToken {
                        token: Self::keyword_or_ident(slice),
                        position: start,
                    });
                }
                _ => {
                    return Err(ExprError::UnexpectedToken {
                        expected: "condition name, keyword, or parenthesis",
                        found: char::from(ch).to_string(),
                        position: self.offset,
                    });
                }
            }
        }

        if tokens.is_empty() {
            return Err(ExprError::EmptyInput);
        }

        tokens.push(SpannedToken {
            token: Token::Eof,
            position: self.offset,
        });
        Ok(tokens)
    }

    /// Builds a token at the current offset.
    const fn simple(&self, token: Token<'a>) -> SpannedToken<'a> {
        SpannedToken {
            token,
            position: self.offset,
        }
    }

    /// Advances while the condition matches the current byte.
    fn consume_while<F>(&mut self, bytes: &[u8], condition: F)
    where
        F: Fn(u8) -> bool,
    {
        while let Some(&b) = bytes.get(self.offset) {
            if condition(b) {
                self.offset += 1;
            } else {
                break;
            }
        }
    }

    /// Maps a slice to a keyword token or condition-name token.
    ///
    /// Keywords are matched exactly; any other casing stays an identifier so
    /// that menu names containing `and`/`or` fragments never collide.
    fn keyword_or_ident(slice: &'a str) -> Token<'a> {
        match slice {
            "AND" => Token::And,
            "OR" => Token::Or,
            "NOT" => Token::Not,
            _ => Token::Ident(slice),
        }
    }
}

// ============================================================================
// SECTION: Parser
// ============================================================================

/// Recursive-descent parser for the trigger expression grammar.
struct Parser<'input> {
    /// Token stream with source positions.
    tokens: Vec<SpannedToken<'input>>,
    /// Current token index.
    index: usize,
    /// Current nesting depth for parenthesized or negated expressions.
    nesting: usize,
}

impl<'input> Parser<'input> {
    /// Creates a parser over the token stream.
    const fn new(tokens: Vec<SpannedToken<'input>>) -> Self {
        Self {
            tokens,
            index: 0,
            nesting: 0,
        }
    }

    /// Parses a full expression.
    fn parse_expression(&mut self) -> Result<Expr<String>, ExprError> {
        self.parse_or()
    }

    /// Parses OR expressions.
    fn parse_or(&mut self) -> Result<Expr<String>, ExprError> {
        let mut parts = Vec::new();
        parts.push(self.parse_and()?);

        while self.matches(Token::Or) {
            parts.push(self.parse_and()?);
        }

        if parts.len() == 1 { Ok(parts.remove(0)) } else { Ok(Expr::or(parts)) }
    }

    /// Parses AND expressions.
    fn parse_and(&mut self) -> Result<Expr<String>, ExprError> {
        let mut parts = Vec::new();
        parts.push(self.parse_unary()?);

        while self.matches(Token::And) {
            parts.push(self.parse_unary()?);
        }

        if parts.len() == 1 { Ok(parts.remove(0)) } else { Ok(Expr::and(parts)) }
    }

    /// Parses unary expressions, including NOT.
    ///
    /// NOT chains count against the nesting limit so that pathological inputs
    /// like a long run of `NOT NOT NOT ...` cannot exhaust the stack.
    fn parse_unary(&mut self) -> Result<Expr<String>, ExprError> {
        if matches!(self.current().token, Token::Not) {
            let pos = self.current().position;
            self.advance();
            let expr = self.with_nesting(pos, |parser| parser.parse_unary())?;
            return Ok(Expr::negate(expr));
        }
        self.parse_primary()
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr<String>, ExprError> {
        match self.current().token {
            Token::Ident(name) => {
                self.advance();
                Ok(Expr::cond(name.to_string()))
            }
            Token::LParen => {
                let pos = self.current().position;
                self.advance();
                self.with_nesting(pos, |parser| {
                    let expr = parser.parse_expression()?;
                    parser.expect(Token::RParen, "`)`")?;
                    Ok(expr)
                })
            }
            Token::RParen | Token::And | Token::Or | Token::Not | Token::Eof => {
                Err(ExprError::UnexpectedToken {
                    expected: "condition name or `(`",
                    found: self.describe_current(),
                    position: self.current().position,
                })
            }
        }
    }

    /// Runs a parser step while enforcing the nesting limit.
    fn with_nesting<T>(
        &mut self,
        position: usize,
        f: impl FnOnce(&mut Self) -> Result<T, ExprError>,
    ) -> Result<T, ExprError> {
        let next_depth = self.nesting + 1;
        if next_depth > MAX_EXPR_NESTING {
            return Err(ExprError::NestingTooDeep {
                max_depth: MAX_EXPR_NESTING,
                actual_depth: next_depth,
                position,
            });
        }
        self.nesting = next_depth;
        let result = f(self);
        self.nesting = self.nesting.saturating_sub(1);
        result
    }

    /// Consumes the expected token or returns an error.
    fn expect(&mut self, token: Token<'_>, expected: &'static str) -> Result<(), ExprError> {
        if std::mem::discriminant(&self.current().token) == std::mem::discriminant(&token) {
            self.advance();
            Ok(())
        } else {
            Err(ExprError::UnexpectedToken {
                expected,
                found: self.describe_current(),
                position: self.current().position,
            })
        }
    }

    /// Ensures the parser is at end-of-input.
    fn expect_eof(&self) -> Result<(), ExprError> {
        if matches!(self.current().token, Token::Eof) {
            Ok(())
        } else {
            Err(ExprError::TrailingInput {
                position: self.current().position,
            })
        }
    }

    /// Consumes the token if it matches the expected kind.
    fn matches(&mut self, kind: Token<'_>) -> bool {
        if std::mem::discriminant(&self.current().token) == std::mem::discriminant(&kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current token.
    fn current(&self) -> &SpannedToken<'input> {
        debug_assert!(self.index < self.tokens.len(), "parser index out of bounds");
        &self.tokens[self.index]
    }

    /// Advances to the next token.
    const fn advance(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    /// Formats the current token for diagnostics.
    fn describe_current(&self) -> String {
        match &self.current().token {
            Token::Ident(name) => (*name).to_string(),
            Token::And => "AND".to_string(),
            Token::Or => "OR".to_string(),
            Token::Not => "NOT".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Eof => "end of input".to_string(),
        }
    }
}
