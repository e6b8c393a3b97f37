#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::Error;
use crate::lexer::lexer::{Lexer, VariableRegistry};
use crate::lexer::tokens::Token;

pub mod errors;
pub mod lexer;
pub mod macros;

/// A cursor into the source text. `idx` and `col` start at -1 so that the
/// first `advance` lands on index 0, column 0.
#[derive(Debug, Clone)]
pub struct Position {
    pub idx: isize,
    pub line: usize,
    pub col: isize,
    pub file: Rc<String>,
    pub text: Rc<String>,
}

impl Position {
    pub fn new(file: Rc<String>, text: Rc<String>) -> Self {
        Position {
            idx: -1,
            line: 0,
            col: -1,
            file,
            text,
        }
    }

    /// Consume one character. `current` is the character being stepped over,
    /// or `None` at the end-of-input sentinel; the caller stops asking for
    /// characters once the sentinel is reached.
    pub fn advance(&mut self, current: Option<char>) {
        self.idx += 1;
        self.col += 1;

        if current == Some('\n') {
            self.line += 1;
            self.col = 0;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// The three parallel sequences produced by a successful scan: the tokens,
/// their raw display strings, and their line annotations. All three are the
/// same length at every point of the scan.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub values: Vec<String>,
    pub lines: Vec<String>,
}

impl ScanOutput {
    pub fn push(&mut self, token: Token, value: String, line: usize) {
        self.values.push(value);
        self.lines.push(format!(", Line number {}", line));
        self.tokens.push(token);
    }
}

/// Owns the declared-variable registry. Scans made through the same session
/// share the registry, so an identifier declared in one `run` is recognised
/// as a previously declared variable in later runs of the same session.
#[derive(Debug, Default)]
pub struct ScanSession {
    vars: VariableRegistry,
}

impl ScanSession {
    pub fn new() -> Self {
        ScanSession {
            vars: VariableRegistry::new(),
        }
    }

    pub fn run(&mut self, filename: &str, text: &str) -> Result<ScanOutput, Error> {
        let mut lexer = Lexer::new(filename, text, &mut self.vars);
        lexer.scan()
    }
}

/// One-shot entry point with a fresh registry: declared variables do not
/// leak between independent calls. Use a [`ScanSession`] when cross-call
/// persistence is wanted.
pub fn run(filename: &str, text: &str) -> Result<ScanOutput, Error> {
    ScanSession::new().run(filename, text)
}
