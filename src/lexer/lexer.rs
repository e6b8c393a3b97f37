use std::collections::HashSet;
use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl};
use crate::{Position, ScanOutput, MK_TOKEN};

use super::tokens::{
    Literal, Token, TokenKind, CONDITIONAL_TOKENS, DECLARATION_TOKENS, LOOP_TOKENS,
    OPERATOR_TOKENS, OUTPUT_TOKENS, RETURN_TOKENS,
};

/// The set of identifiers seen immediately after a declaration keyword.
/// Lives outside the `Lexer` so a caller can keep it across scans; see
/// [`crate::ScanSession`].
#[derive(Debug, Default)]
pub struct VariableRegistry {
    names: HashSet<String>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        VariableRegistry {
            names: HashSet::new(),
        }
    }

    pub fn declare(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

pub struct Lexer<'v> {
    chars: Vec<char>,
    pos: Position,
    current: Option<char>,
    vars: &'v mut VariableRegistry,
}

impl<'v> Lexer<'v> {
    pub fn new(filename: &str, text: &str, vars: &'v mut VariableRegistry) -> Lexer<'v> {
        let mut lexer = Lexer {
            chars: text.chars().collect(),
            pos: Position::new(Rc::new(String::from(filename)), Rc::new(String::from(text))),
            current: None,
            vars,
        };
        lexer.advance();
        lexer
    }

    fn advance(&mut self) {
        self.pos.advance(self.current);
        self.current = self.chars.get(self.pos.idx as usize).copied();
    }

    /// Consume the whole input in one pass. Fails fast: the first
    /// unclassifiable lexeme aborts the scan with no partial output.
    pub fn scan(&mut self) -> Result<ScanOutput, Error> {
        let mut out = ScanOutput::default();

        while let Some(c) = self.current {
            if c == ' ' || c == '\t' || c == '\n' {
                self.advance();
            } else if c == '#' {
                // Comment: skip to end of line, leaving the newline for the
                // whitespace rule. A comment may also end the input.
                self.advance();
                while self.current.is_some() && self.current != Some('\n') {
                    self.advance();
                }
            } else if c.is_ascii_digit() {
                let line = self.pos.line;
                let token = self.scan_number()?;
                let value = format!(", {}", token);
                out.push(token, value, line);
            } else if let Some(kind) = symbol_kind(c) {
                out.push(MK_TOKEN!(kind), format!(", {}", c), self.pos.line);
                self.advance();
            } else {
                self.scan_word(c, &mut out)?;
            }
        }

        Ok(out)
    }

    /// Greedy digit run with at most one decimal point. A second dot ends
    /// the literal without being consumed; the main loop restarts there.
    fn scan_number(&mut self) -> Result<Token, Error> {
        let start = self.pos.clone();
        let mut num = String::new();
        let mut dot_count = 0;

        while let Some(c) = self.current {
            if c == '.' {
                if dot_count == 1 {
                    break;
                }
                dot_count += 1;
                num.push('.');
            } else if c.is_ascii_digit() {
                num.push(c);
            } else {
                break;
            }
            self.advance();
        }

        if dot_count == 0 {
            let value = num.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParse { text: num.clone() },
                    start,
                    self.pos.clone(),
                )
            })?;
            Ok(MK_TOKEN!(TokenKind::Int, Literal::Int(value)))
        } else {
            let value = num.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParse { text: num.clone() },
                    start,
                    self.pos.clone(),
                )
            })?;
            Ok(MK_TOKEN!(TokenKind::Float, Literal::Float(value)))
        }
    }

    /// Accumulate a lexeme and classify it. Two sub-states: a quoted region
    /// runs through the matching closing quote (boundary characters inside
    /// the quotes are kept), then bare-word accumulation picks up any
    /// trailing characters until a boundary.
    fn scan_word(&mut self, first: char, out: &mut ScanOutput) -> Result<(), Error> {
        let start = self.pos.clone();
        self.advance();

        let mut lexeme = String::new();
        lexeme.push(first);

        if first == '"' || first == '\'' {
            loop {
                match self.current {
                    Some(c) => {
                        lexeme.push(c);
                        self.advance();
                        if c == first {
                            break;
                        }
                    }
                    None => {
                        return Err(Error::new(
                            ErrorImpl::UnterminatedString { text: lexeme },
                            start,
                            self.pos.clone(),
                        ));
                    }
                }
            }
        }

        while let Some(c) = self.current {
            if c == ' ' || c == '\t' || c == '\n' || c == ',' {
                break;
            }
            lexeme.push(c);
            self.advance();
        }

        // Classification precedence is load-bearing: a lexeme matching two
        // sets resolves as the earlier one (e.g. `void` is a declaration
        // keyword, never a return keyword; a variable named `while` stays a
        // loop keyword).
        let kind = if OPERATOR_TOKENS.contains(lexeme.as_str()) {
            TokenKind::Operator
        } else if DECLARATION_TOKENS.contains(lexeme.as_str()) {
            TokenKind::Declaration
        } else if LOOP_TOKENS.contains(lexeme.as_str()) {
            TokenKind::Loop
        } else if CONDITIONAL_TOKENS.contains(lexeme.as_str()) {
            TokenKind::Conditional
        } else if matches!(out.tokens.last(), Some(t) if t.kind == TokenKind::Declaration) {
            self.vars.declare(&lexeme);
            TokenKind::Variable
        } else if is_quoted(&lexeme) {
            TokenKind::String
        } else if self.vars.contains(&lexeme) {
            TokenKind::PreviousVariable
        } else if RETURN_TOKENS.contains(lexeme.as_str()) {
            TokenKind::Return
        } else if OUTPUT_TOKENS.contains(lexeme.as_str()) {
            TokenKind::Output
        } else {
            return Err(Error::new(
                ErrorImpl::IllegalCharacter { character: first },
                start,
                self.pos.clone(),
            ));
        };

        let value = format!(", {}", lexeme);
        let line = self.pos.line;
        out.push(MK_TOKEN!(kind, Literal::Text(lexeme)), value, line);

        Ok(())
    }
}

fn symbol_kind(c: char) -> Option<TokenKind> {
    match c {
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Dash),
        '*' => Some(TokenKind::Star),
        '/' => Some(TokenKind::Slash),
        '(' => Some(TokenKind::OpenParen),
        ')' => Some(TokenKind::CloseParen),
        '{' => Some(TokenKind::OpenCurly),
        '}' => Some(TokenKind::CloseCurly),
        '[' => Some(TokenKind::OpenBracket),
        ']' => Some(TokenKind::CloseBracket),
        '%' => Some(TokenKind::Percent),
        '<' => Some(TokenKind::Less),
        '>' => Some(TokenKind::Greater),
        '!' => Some(TokenKind::Not),
        '?' => Some(TokenKind::Question),
        ';' => Some(TokenKind::Semicolon),
        '=' => Some(TokenKind::Assignment),
        _ => None,
    }
}

fn is_quoted(lexeme: &str) -> bool {
    let bytes = lexeme.as_bytes();
    bytes.len() >= 2
        && bytes[0] == bytes[bytes.len() - 1]
        && (bytes[0] == b'"' || bytes[0] == b'\'')
}
