//! Logos-based lexer for cron fields
//!
//! A single logos table knows every token of every dialect. A [`Vocabulary`]
//! then decides which of those kinds the active dialect accepts; everything
//! else is reported as a lexical error.

use super::errors::{ErrorKind, ParseError};
use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rustc_hash::FxHashSet;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_offset(input, TextSize::new(0))
    }

    /// Lex `input` as if it started at `offset` in a larger text
    pub fn with_offset(input: &'a str, offset: TextSize) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: offset.into(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// The set of token kinds one dialect recognizes
#[derive(Debug, Clone)]
pub struct Vocabulary {
    name: &'static str,
    kinds: FxHashSet<SyntaxKind>,
}

impl Vocabulary {
    pub fn new(name: &'static str, kinds: impl IntoIterator<Item = SyntaxKind>) -> Self {
        let mut kinds: FxHashSet<SyntaxKind> = kinds.into_iter().collect();
        kinds.insert(SyntaxKind::WHITESPACE);
        Self { name, kinds }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, kind: SyntaxKind) -> bool {
        kind != SyntaxKind::UNKNOWN_WORD && kind != SyntaxKind::ERROR && self.kinds.contains(&kind)
    }
}

/// Output of lexing against a vocabulary
///
/// Rejected tokens stay in `tokens` with kind [`SyntaxKind::ERROR`] so that
/// whitespace-delimited groups keep their shape; the grammar skips them.
#[derive(Debug, Clone, Default)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub errors: Vec<ParseError>,
}

/// Tokenize `input` and reject every token outside `vocabulary`
pub fn lex<'a>(input: &'a str, offset: TextSize, vocabulary: &Vocabulary) -> Lexed<'a> {
    let mut lexed = Lexed::default();
    for mut token in Lexer::with_offset(input, offset) {
        if !vocabulary.contains(token.kind) {
            lexed.errors.push(unrecognized(&token, vocabulary));
            token.kind = SyntaxKind::ERROR;
        }
        lexed.tokens.push(token);
    }
    lexed
}

fn unrecognized(token: &Token<'_>, vocabulary: &Vocabulary) -> ParseError {
    let message = format!(
        "unrecognized token '{}' at offset {} in {} mode",
        token.text,
        u32::from(token.offset),
        vocabulary.name()
    );
    let error = ParseError::new(ErrorKind::LexicalError, message, token.range());
    match token.kind {
        SyntaxKind::HASH | SyntaxKind::HASH_RANGE => {
            error.with_hint("'H' is only recognized in jenkins mode")
        }
        SyntaxKind::QUESTION
        | SyntaxKind::LAST
        | SyntaxKind::LAST_WEEKDAY
        | SyntaxKind::NEAREST_WEEKDAY
        | SyntaxKind::LAST_OF_WEEKDAY
        | SyntaxKind::NTH_WEEKDAY => {
            error.with_hint(format!("'{}' is only recognized in quartz mode", token.text))
        }
        _ => error,
    }
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // =========================================================================
    // VALUES
    // =========================================================================
    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC")]
    MonthName,

    #[regex(r"SUN|MON|TUE|WED|THU|FRI|SAT")]
    DayName,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(",")]
    Comma,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("*")]
    Star,
    #[token("?")]
    Question,

    // =========================================================================
    // QUARTZ SPECIALS
    // =========================================================================
    #[token("L", priority = 3)]
    Last,

    #[token("LW")]
    LastWeekday,

    #[regex(r"[0-9]+W")]
    NearestWeekday,

    #[regex(r"[0-7]L|SUNL|MONL|TUEL|WEDL|THUL|FRIL|SATL")]
    LastOfWeekday,

    #[regex(r"([0-7]|SUN|MON|TUE|WED|THU|FRI|SAT)#[1-5]")]
    NthWeekday,

    // =========================================================================
    // JENKINS SPECIALS
    // =========================================================================
    #[token("H", priority = 3)]
    Hash,

    #[regex(r"H\([0-9]+-[0-9]+\)")]
    HashRange,

    /// Letters that form no known name; always rejected
    #[regex(r"[A-Za-z]+")]
    UnknownWord,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            Integer => SyntaxKind::INTEGER,
            MonthName => SyntaxKind::MONTH_NAME,
            DayName => SyntaxKind::DAY_NAME,
            Comma => SyntaxKind::COMMA,
            Minus => SyntaxKind::MINUS,
            Slash => SyntaxKind::SLASH,
            Star => SyntaxKind::STAR,
            Question => SyntaxKind::QUESTION,
            Last => SyntaxKind::LAST,
            LastWeekday => SyntaxKind::LAST_WEEKDAY,
            NearestWeekday => SyntaxKind::NEAREST_WEEKDAY,
            LastOfWeekday => SyntaxKind::LAST_OF_WEEKDAY,
            NthWeekday => SyntaxKind::NTH_WEEKDAY,
            Hash => SyntaxKind::HASH,
            HashRange => SyntaxKind::HASH_RANGE,
            UnknownWord => SyntaxKind::UNKNOWN_WORD,
        }
    }
}
