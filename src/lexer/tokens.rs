use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    /// Two-character relational and logical operators. The main loop
    /// consumes `<`, `>`, `!` and `=` as single-character symbols before the
    /// word-scanner runs, so of these only `&&` and `||` are ever matched.
    pub static ref OPERATOR_TOKENS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("<=");
        set.insert(">=");
        set.insert("==");
        set.insert("!=");
        set.insert("&&");
        set.insert("||");
        set
    };

    /// Type keywords that open a variable declaration. `void` also appears
    /// in RETURN_TOKENS; declaration classification runs first and wins.
    pub static ref DECLARATION_TOKENS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("string");
        set.insert("float");
        set.insert("boolean");
        set.insert("void");
        set
    };

    pub static ref LOOP_TOKENS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("while");
        set.insert("for");
        set.insert("main");
        set
    };

    pub static ref CONDITIONAL_TOKENS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("elif");
        set
    };

    pub static ref RETURN_TOKENS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("void");
        set.insert("return");
        set
    };

    pub static ref OUTPUT_TOKENS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("printf");
        set.insert("scanf");
        set.insert("print");
        set.insert("write");
        set.insert("writeln");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Int,
    Float,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Less,
    Greater,
    Not,
    Question,
    Semicolon,
    Assignment, // =

    // Word-scanned categories
    Operator,    // <=, >=, ==, !=, &&, ||
    Declaration, // int, string, float, boolean, void
    Loop,        // while, for, main
    Conditional, // if, else, elif
    Variable,    // identifier right after a declaration keyword
    String,      // quoted text, delimiters included
    PreviousVariable,
    Return, // void, return
    Output, // printf, scanf, print, write, writeln
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Float(value) => write!(f, "{}", value),
            Literal::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<Literal>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(literal) = &self.literal {
            write!(f, "{}:{}", self.kind, literal)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    pub fn text(&self) -> Option<&str> {
        match &self.literal {
            Some(Literal::Text(text)) => Some(text),
            _ => None,
        }
    }
}
