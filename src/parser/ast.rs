//! Typed AST wrappers over the untyped rowan CST.
//!
//! Each struct wraps a SyntaxNode and provides methods to access children.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// First non-trivia token directly under a node
fn first_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|element| element.into_token())
        .find(|token| !token.kind().is_trivia())
}

// ============================================================================
// Root
// ============================================================================

ast_node!(FieldRoot, FIELD);

impl FieldRoot {
    pub fn body(&self) -> Option<FieldBody> {
        self.0.children().find_map(FieldBody::cast)
    }

    /// True if the parser wrapped leftover tokens in an ERROR node
    pub fn has_leftover(&self) -> bool {
        self.0.children().any(|n| n.kind() == SyntaxKind::ERROR)
    }
}

/// What a field holds: one term, or a union of several
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldBody {
    Union(Union),
    Term(Term),
}

impl AstNode for FieldBody {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::UNION || Term::can_cast(kind)
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::UNION => Some(Self::Union(Union(node))),
            _ => Term::cast(node).map(Self::Term),
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Union(n) => n.syntax(),
            Self::Term(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Union
// ============================================================================

ast_node!(Union, UNION);

impl Union {
    pub fn terms(&self) -> impl Iterator<Item = Term> + '_ {
        self.0.children().filter_map(Term::cast)
    }
}

// ============================================================================
// Terms
// ============================================================================

/// One comma-separated term of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Wildcard(WildcardExpr),
    NoSpecific(NoSpecificExpr),
    Value(ValueExpr),
    Special(SpecialExpr),
    Range(RangeExpr),
    Interval(IntervalExpr),
}

impl AstNode for Term {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::WILDCARD_EXPR
                | SyntaxKind::NO_SPECIFIC_EXPR
                | SyntaxKind::VALUE_EXPR
                | SyntaxKind::SPECIAL_EXPR
                | SyntaxKind::RANGE_EXPR
                | SyntaxKind::INTERVAL_EXPR
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::WILDCARD_EXPR => Some(Self::Wildcard(WildcardExpr(node))),
            SyntaxKind::NO_SPECIFIC_EXPR => Some(Self::NoSpecific(NoSpecificExpr(node))),
            SyntaxKind::VALUE_EXPR => Some(Self::Value(ValueExpr(node))),
            SyntaxKind::SPECIAL_EXPR => Some(Self::Special(SpecialExpr(node))),
            SyntaxKind::RANGE_EXPR => Some(Self::Range(RangeExpr(node))),
            SyntaxKind::INTERVAL_EXPR => Some(Self::Interval(IntervalExpr(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Wildcard(n) => n.syntax(),
            Self::NoSpecific(n) => n.syntax(),
            Self::Value(n) => n.syntax(),
            Self::Special(n) => n.syntax(),
            Self::Range(n) => n.syntax(),
            Self::Interval(n) => n.syntax(),
        }
    }
}

ast_node!(WildcardExpr, WILDCARD_EXPR);
ast_node!(NoSpecificExpr, NO_SPECIFIC_EXPR);
ast_node!(ValueExpr, VALUE_EXPR);
ast_node!(SpecialExpr, SPECIAL_EXPR);
ast_node!(RangeExpr, RANGE_EXPR);
ast_node!(IntervalExpr, INTERVAL_EXPR);

impl ValueExpr {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

impl SpecialExpr {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0)
    }
}

impl RangeExpr {
    /// Left-hand side: the atomic the range starts from
    pub fn lhs(&self) -> Option<Term> {
        self.0.children().find_map(Term::cast)
    }

    /// Right-hand side: the value after `-`
    pub fn rhs(&self) -> Option<ValueExpr> {
        self.0.children().filter_map(Term::cast).nth(1).and_then(|t| match t {
            Term::Value(v) => Some(v),
            _ => None,
        })
    }
}

impl IntervalExpr {
    /// The stepped expression: an atomic or a range
    pub fn base(&self) -> Option<Term> {
        self.0.children().find_map(Term::cast)
    }

    /// The step after `/`
    pub fn step(&self) -> Option<ValueExpr> {
        self.0.children().filter_map(Term::cast).nth(1).and_then(|t| match t {
            Term::Value(v) => Some(v),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{CronMode, DialectTables};
    use crate::parser::{lex, parse_field};
    use text_size::TextSize;

    fn root(mode: CronMode, text: &str) -> FieldRoot {
        let tables = DialectTables::build(mode.profile());
        let lexed = lex(text, TextSize::new(0), &tables.vocabulary);
        let parse = parse_field(&lexed.tokens, tables.any_field(), TextSize::of(text));
        FieldRoot::cast(parse.syntax()).unwrap()
    }

    #[test]
    fn test_interval_accessors() {
        let Some(FieldBody::Term(Term::Interval(interval))) = root(CronMode::Cron, "4-10/2").body() else {
            panic!("expected interval");
        };
        assert!(matches!(interval.base(), Some(Term::Range(_))));
        assert_eq!(interval.step().and_then(|s| s.token()).unwrap().text(), "2");
    }

    #[test]
    fn test_range_accessors() {
        let Some(FieldBody::Term(Term::Range(range))) = root(CronMode::Quartz, "L-3").body() else {
            panic!("expected range");
        };
        assert!(matches!(range.lhs(), Some(Term::Special(_))));
        assert_eq!(range.rhs().and_then(|v| v.token()).unwrap().text(), "3");
    }

    #[test]
    fn test_union_terms() {
        let Some(FieldBody::Union(union)) = root(CronMode::Jenkins, "H,5-7,*/2").body() else {
            panic!("expected union");
        };
        assert_eq!(union.terms().count(), 3);
    }

    #[test]
    fn test_leftover_detected() {
        assert!(!root(CronMode::Cron, "5-6").has_leftover());
        assert!(root(CronMode::Cron, "5-6-7").has_leftover());
    }
}
