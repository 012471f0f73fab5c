//! Recursive descent parser for one cron field
//!
//! Builds a rowan GreenNode tree from the accepted tokens of a field.
//! Parsing stops at the first grammar error; leftover tokens are wrapped in
//! an ERROR node.

use super::errors::{ErrorKind, ParseError};
use super::grammar::{self, FieldParser};
use super::lexer::Token;
use super::syntax_kind::SyntaxKind;
use crate::dialect::FieldRules;
use rowan::{Checkpoint, GreenNode, GreenNodeBuilder};
use text_size::{TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<ParseError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse the tokens of one field under `rules`
///
/// Whitespace and tokens rejected by the lexer are skipped. `end` is the
/// offset just past the field text; errors found at end of input point there.
pub fn parse_field(tokens: &[Token<'_>], rules: &FieldRules, end: TextSize) -> Parse {
    let tokens: Vec<&Token<'_>> = tokens
        .iter()
        .filter(|t| !t.kind.is_trivia() && t.kind != SyntaxKind::ERROR)
        .collect();
    let mut parser = Parser::new(&tokens, rules, end);
    grammar::parse_field(&mut parser);
    parser.finish()
}

/// The parser state
pub(crate) struct Parser<'t, 'a> {
    tokens: &'t [&'t Token<'a>],
    pos: usize,
    rules: &'t FieldRules,
    end: TextSize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<ParseError>,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [&'t Token<'a>], rules: &'t FieldRules, end: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            rules,
            end,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn current_range(&self) -> TextRange {
        self.current()
            .map(Token::range)
            .unwrap_or_else(|| TextRange::empty(self.end))
    }
}

impl FieldParser for Parser<'_, '_> {
    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn at_atom(&self) -> bool {
        !self.at_eof() && self.rules.admits_atom(self.current_kind())
    }

    fn at_range_end(&self) -> bool {
        !self.at_eof() && self.rules.admits_range_end(self.current_kind())
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        let tokens = self.tokens;
        if let Some(token) = tokens.get(self.pos) {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn bump_rest(&mut self) {
        while !self.at_eof() {
            self.bump();
        }
    }

    // =========================================================================
    // Node building
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn checkpoint(&self) -> Checkpoint {
        self.builder.checkpoint()
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, kind: ErrorKind, message: String) {
        let range = self.current_range();
        self.errors.push(ParseError::new(kind, message, range));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{CronMode, DialectTables, FieldName};
    use crate::parser::lexer::lex;

    fn parse_with(mode: CronMode, field: Option<FieldName>, text: &str) -> Parse {
        let tables = DialectTables::build(mode.profile());
        let rules = match field {
            Some(name) => tables.rules(name).unwrap(),
            None => tables.any_field(),
        };
        let lexed = lex(text, TextSize::new(0), &tables.vocabulary);
        parse_field(&lexed.tokens, rules, TextSize::of(text))
    }

    fn kinds(parse: &Parse) -> Vec<SyntaxKind> {
        parse.syntax().descendants().map(|n| n.kind()).collect()
    }

    #[test]
    fn test_single_value() {
        let parse = parse_with(CronMode::Cron, None, "5");
        assert!(parse.ok());
        assert_eq!(kinds(&parse), vec![SyntaxKind::FIELD, SyntaxKind::VALUE_EXPR]);
    }

    #[test]
    fn test_interval_wraps_range() {
        let parse = parse_with(CronMode::Cron, None, "4-10/2");
        assert!(parse.ok());
        assert_eq!(
            kinds(&parse),
            vec![
                SyntaxKind::FIELD,
                SyntaxKind::INTERVAL_EXPR,
                SyntaxKind::RANGE_EXPR,
                SyntaxKind::VALUE_EXPR,
                SyntaxKind::VALUE_EXPR,
                SyntaxKind::VALUE_EXPR,
            ]
        );
    }

    #[test]
    fn test_union_only_for_multiple_terms() {
        let parse = parse_with(CronMode::Cron, None, "1,*/5");
        assert!(parse.ok());
        assert_eq!(kinds(&parse)[1], SyntaxKind::UNION);
    }

    #[test]
    fn test_cst_preserves_text() {
        let parse = parse_with(CronMode::Quartz, None, "MON#4,L");
        assert_eq!(parse.syntax().text().to_string(), "MON#4,L");
    }

    #[test]
    fn test_empty_field() {
        let parse = parse_with(CronMode::Cron, Some(FieldName::Minute), "");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].kind, ErrorKind::RequiredTermMissing);
        assert_eq!(parse.errors[0].range, TextRange::empty(TextSize::new(0)));
    }

    #[test]
    fn test_trailing_tokens() {
        let parse = parse_with(CronMode::Cron, None, "4-10-2");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].kind, ErrorKind::UnconsumedInput);
        assert_eq!(parse.errors[0].range.start(), TextSize::new(4));
        // leftover tokens are still in the tree
        assert_eq!(parse.syntax().text().to_string(), "4-10-2");
    }

    #[test]
    fn test_error_messages_name_the_token_once() {
        let parse = parse_with(CronMode::Cron, None, "4-10-2");
        assert_eq!(parse.errors[0].message, "unexpected '-' after a complete field");

        let parse = parse_with(CronMode::Quartz, Some(FieldName::Minute), "5L");
        assert_eq!(parse.errors[0].message, "last-weekday-of-month marker '5L' cannot start a term here");

        let parse = parse_with(CronMode::Quartz, Some(FieldName::Minute), "L");
        assert_eq!(parse.errors[0].message, "'L' cannot start a term here");

        let parse = parse_with(CronMode::Cron, None, ",5");
        assert_eq!(parse.errors[0].message, "',' cannot start a term here");
    }

    #[test]
    fn test_field_rules_reject_question_in_minute() {
        let parse = parse_with(CronMode::Quartz, Some(FieldName::Minute), "?");
        assert_eq!(parse.errors.len(), 1);
        assert_eq!(parse.errors[0].kind, ErrorKind::RequiredTermMissing);
    }
}
