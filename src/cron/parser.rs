//! Expression assembler
//!
//! [`CronParser`] ties the pipeline together: lex against the dialect
//! vocabulary, split positional text into fields (or read a record), run the
//! field grammar, build [`CronNode`]s, fill record defaults, and assemble the
//! [`Expression`]. Errors are collected on the parser instance.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use super::input::{CronInput, CronRecord};
use super::options::ParserOptions;
use crate::dialect::{ConfigError, CronMode, DialectProfile, DialectTables, FieldName, FieldRules};
use crate::parser::ast::{AstNode, FieldRoot};
use crate::parser::{self, ErrorKind, Lexed, ParseError, SyntaxKind, Token, lex};
use crate::syntax::builder::build_field;
use crate::syntax::{CronNode, Expression};

/// Errors of a failed parse, for `?`-style callers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cron expression failed to parse with {} error(s): {}", .errors.len(), first_message(.errors))]
pub struct ParseFailure {
    pub errors: Vec<ParseError>,
}

fn first_message(errors: &[ParseError]) -> String {
    errors.first().map(ParseError::to_string).unwrap_or_default()
}

/// Dialect-aware cron parser
///
/// The mode is fixed at construction. Each `parse*` call replaces the error
/// list readable through [`CronParser::errors`].
#[derive(Debug, Clone)]
pub struct CronParser {
    options: ParserOptions,
    tables: DialectTables,
    defaults: FxHashMap<FieldName, CronNode>,
    errors: Vec<ParseError>,
}

impl Default for CronParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl CronParser {
    pub fn new(options: ParserOptions) -> Self {
        let tables = DialectTables::build(options.mode.profile());
        let defaults = record_defaults(&tables);
        Self {
            options,
            tables,
            defaults,
            errors: Vec::new(),
        }
    }

    pub fn with_mode(mode: CronMode) -> Self {
        Self::new(ParserOptions::new(mode))
    }

    /// Parser for a mode name such as `"quartz"`
    pub fn from_mode_name(name: &str) -> Result<Self, ConfigError> {
        ParserOptions::from_mode_name(name).map(Self::new)
    }

    pub fn mode(&self) -> CronMode {
        self.options.mode
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Errors of the last call, lexical errors first
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parse a whole expression from text or a record
    pub fn parse<'i>(&mut self, input: impl Into<CronInput<'i>>) -> Option<Expression> {
        let input = input.into();
        debug!(mode = %self.mode(), ?input, "parsing cron expression");

        let (expression, errors) = match input {
            CronInput::Text(text) => self.assemble_text(text),
            CronInput::Record(record) => self.assemble_record(record),
        };
        self.finish(expression, errors)
    }

    /// Parse one field under the rules of every field in the dialect
    pub fn parse_field(&mut self, text: &str) -> Option<CronNode> {
        debug!(mode = %self.mode(), text, "parsing cron field");

        let lexed = lex(text, TextSize::new(0), &self.tables.vocabulary);
        let mut errors = lexed.errors;
        let node = match field_node(&lexed.tokens, self.tables.any_field(), TextSize::of(text)) {
            Ok(node) => Some(node),
            Err(grammar_errors) => {
                errors.extend(grammar_errors);
                None
            }
        };
        self.finish(node, errors)
    }

    /// [`CronParser::parse`] returning the errors instead of storing them only
    pub fn try_parse<'i>(&mut self, input: impl Into<CronInput<'i>>) -> Result<Expression, ParseFailure> {
        self.parse(input).ok_or_else(|| self.failure())
    }

    pub fn try_parse_field(&mut self, text: &str) -> Result<CronNode, ParseFailure> {
        self.parse_field(text).ok_or_else(|| self.failure())
    }

    fn failure(&self) -> ParseFailure {
        ParseFailure {
            errors: self.errors.clone(),
        }
    }

    fn finish<T>(&mut self, result: Option<T>, errors: Vec<ParseError>) -> Option<T> {
        debug!(errors = errors.len(), "parse finished");
        self.errors = errors;
        if self.errors.is_empty() { result } else { None }
    }

    // =========================================================================
    // Positional text
    // =========================================================================

    fn assemble_text(&self, text: &str) -> (Option<Expression>, Vec<ParseError>) {
        let Lexed { tokens, errors: lexical } = lex(text, TextSize::new(0), &self.tables.vocabulary);
        let groups = split_fields(&tokens);
        let profile = self.tables.profile;
        let end = TextSize::of(text);

        let mut errors: Vec<ParseError> = lexical
            .into_iter()
            .map(|error| match field_at(&groups, profile, error.range.start()) {
                Some(name) => error.in_field(name),
                None => error,
            })
            .collect();

        // Trailing optional fields may be left off only once every other field is present
        let complete = groups.len() >= profile.min_positional();

        let mut fields = IndexMap::with_capacity(profile.fields.len());
        for (index, spec) in profile.fields.iter().enumerate() {
            let Some(group) = groups.get(index) else {
                match self.defaults.get(&spec.name) {
                    Some(default) if complete && spec.trailing_optional => {
                        trace!(field = %spec.name, default = %default, "using positional default");
                        fields.insert(spec.name, default.clone());
                    }
                    _ => errors.push(self.missing_field(spec.name, end)),
                }
                continue;
            };
            trace!(field = %spec.name, "parsing positional field");
            match self.field_rules(spec.name).and_then(|rules| field_node(group, rules, group_end(group, end))) {
                Ok(node) => {
                    fields.insert(spec.name, node);
                }
                Err(field_errors) => {
                    errors.extend(field_errors.into_iter().map(|e| e.in_field(spec.name)));
                }
            }
        }

        if let Some(extra) = groups.get(profile.fields.len()) {
            let offset = extra.first().map(|t| t.offset).unwrap_or(end);
            errors.push(
                ParseError::at_offset(
                    ErrorKind::UnconsumedInput,
                    format!(
                        "found {} fields but {} expressions have {}",
                        groups.len(),
                        self.mode(),
                        profile.fields.len()
                    ),
                    offset,
                )
                .with_hint(field_list_hint(self.mode())),
            );
        }

        (self.expression(fields, &errors), errors)
    }

    fn missing_field(&self, name: FieldName, end: TextSize) -> ParseError {
        ParseError::at_offset(
            ErrorKind::RequiredTermMissing,
            format!("missing {} field", name),
            end,
        )
        .in_field(name)
        .with_hint(field_list_hint(self.mode()))
    }

    // =========================================================================
    // Records
    // =========================================================================

    fn assemble_record(&self, record: &CronRecord) -> (Option<Expression>, Vec<ParseError>) {
        for name in FieldName::ALL {
            if record.get(name).is_some() && !self.tables.profile.contains(name) {
                debug!(field = %name, mode = %self.mode(), "ignoring field outside the dialect");
            }
        }

        // Lex every supplied field first so lexical errors lead the list
        let mut errors = Vec::new();
        let mut supplied = Vec::new();
        for spec in self.tables.profile.fields {
            if let Some(text) = record.get(spec.name) {
                let lexed = lex(text, TextSize::new(0), &self.tables.vocabulary);
                errors.extend(lexed.errors.iter().cloned().map(|e| e.in_field(spec.name)));
                supplied.push((spec.name, text, lexed.tokens));
            }
        }

        let mut fields = IndexMap::with_capacity(self.tables.profile.fields.len());
        for spec in self.tables.profile.fields {
            if let Some((_, text, tokens)) = supplied.iter().find(|(name, _, _)| *name == spec.name) {
                trace!(field = %spec.name, text, "parsing record field");
                match self.field_rules(spec.name).and_then(|rules| field_node(tokens, rules, TextSize::of(*text))) {
                    Ok(node) => {
                        fields.insert(spec.name, node);
                    }
                    Err(field_errors) => {
                        errors.extend(field_errors.into_iter().map(|e| e.in_field(spec.name)));
                    }
                }
            } else if let Some(default) = self.defaults.get(&spec.name) {
                trace!(field = %spec.name, default = %default, "using record default");
                fields.insert(spec.name, default.clone());
            } else {
                errors.push(
                    ParseError::at_offset(
                        ErrorKind::RequiredTermMissing,
                        format!("record has no {} field", spec.name),
                        TextSize::new(0),
                    )
                    .in_field(spec.name)
                    .with_hint(format!("the {} field has no default in {} mode", spec.name, self.mode())),
                );
            }
        }

        (self.expression(fields, &errors), errors)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn field_rules(&self, name: FieldName) -> Result<&FieldRules, Vec<ParseError>> {
        // Profile fields always have rules; a miss means the tables are out of sync
        self.tables.rules(name).ok_or_else(|| {
            vec![ParseError::at_offset(
                ErrorKind::RequiredTermMissing,
                format!("no grammar rules for the {} field", name),
                TextSize::new(0),
            )]
        })
    }

    fn expression(&self, fields: IndexMap<FieldName, CronNode>, errors: &[ParseError]) -> Option<Expression> {
        errors.is_empty().then(|| Expression::new(self.mode(), fields))
    }
}

/// Parse the tokens of one field and build its node
fn field_node(tokens: &[Token<'_>], rules: &FieldRules, end: TextSize) -> Result<CronNode, Vec<ParseError>> {
    let parse = parser::parse_field(tokens, rules, end);
    if !parse.ok() {
        return Err(parse.errors);
    }
    FieldRoot::cast(parse.syntax())
        .and_then(|root| build_field(&root))
        .ok_or_else(|| {
            vec![ParseError::with_default_message(
                ErrorKind::RequiredTermMissing,
                TextRange::empty(end),
            )]
        })
}

/// Split a token stream into whitespace-separated field groups
///
/// Tokens rejected by the lexer stay in their group, so a field made only of
/// rejected text still occupies its position.
fn split_fields<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<&'t [Token<'a>]> {
    tokens
        .split(|t| t.kind == SyntaxKind::WHITESPACE)
        .filter(|group| !group.is_empty())
        .collect()
}

fn group_end(group: &[Token<'_>], fallback: TextSize) -> TextSize {
    group.last().map(|t| t.range().end()).unwrap_or(fallback)
}

/// Profile field whose positional group covers `offset`
fn field_at(groups: &[&[Token<'_>]], profile: &DialectProfile, offset: TextSize) -> Option<FieldName> {
    let index = groups.iter().position(|group| {
        let start = group.first().map(|t| t.offset);
        start.is_some_and(|start| start <= offset && offset < group_end(group, start))
    })?;
    profile.fields.get(index).map(|spec| spec.name)
}

fn field_list_hint(mode: CronMode) -> String {
    let profile = mode.profile();
    let names: Vec<_> = profile.field_names().map(FieldName::as_str).collect();
    let count = match profile.min_positional() {
        min if min == names.len() => min.to_string(),
        min => format!("{} or {}", min, names.len()),
    };
    format!("{} expressions have {} fields: {}", mode, count, names.join(" "))
}

/// Parse each profile default once
fn record_defaults(tables: &DialectTables) -> FxHashMap<FieldName, CronNode> {
    let mut defaults = FxHashMap::default();
    for spec in tables.profile.fields {
        let (Some(text), Some(rules)) = (spec.record_default, tables.rules(spec.name)) else {
            continue;
        };
        let lexed = lex(text, TextSize::new(0), &tables.vocabulary);
        match field_node(&lexed.tokens, rules, TextSize::of(text)) {
            Ok(node) if lexed.errors.is_empty() => {
                defaults.insert(spec.name, node);
            }
            _ => debug_assert!(false, "default '{}' for {} does not parse", text, spec.name),
        }
    }
    defaults
}
