//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal payload (omitted for payload-free tokens)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, Literal::Int(42));
/// let plus = MK_TOKEN!(TokenKind::Plus);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr) => {
        Token {
            kind: $kind,
            literal: None,
        }
    };
    ($kind:expr, $literal:expr) => {
        Token {
            kind: $kind,
            literal: Some($literal),
        }
    };
}
