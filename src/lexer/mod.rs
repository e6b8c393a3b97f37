//! Lexical analysis module.
//!
//! This module contains the scanner that converts raw source text into a
//! flat sequence of classified tokens. It handles:
//!
//! - Character-by-character traversal with one character of lookahead
//! - Recognition of numbers, operators, punctuation, keywords and strings
//! - Declared-variable tracking across a scan session
//! - Line/column position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
