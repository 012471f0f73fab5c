//! CST → CronNode translation
//!
//! A one-to-one walk over the typed wrappers. No semantic checks: `10-4`
//! or `75` build just like `4-10` and `5`.

use crate::parser::SyntaxKind;
use crate::parser::ast::{FieldBody, FieldRoot, Term, ValueExpr};

use super::node::{CronNode, SpecialKind};

/// Build the node for a field; `None` if the tree is incomplete
pub fn build_field(root: &FieldRoot) -> Option<CronNode> {
    if root.has_leftover() {
        return None;
    }
    match root.body()? {
        FieldBody::Union(union) => {
            let parts = union
                .terms()
                .map(|term| build_term(&term))
                .collect::<Option<Vec<_>>>()?;
            Some(CronNode::Union(parts))
        }
        FieldBody::Term(term) => build_term(&term),
    }
}

fn build_term(term: &Term) -> Option<CronNode> {
    match term {
        Term::Wildcard(_) => Some(CronNode::Wildcard),
        Term::NoSpecific(_) => Some(CronNode::NoSpecificValue),
        Term::Value(value) => build_value(value),
        Term::Special(special) => {
            let token = special.token()?;
            Some(CronNode::special(special_kind(token.kind())?, token.text()))
        }
        Term::Range(range) => Some(CronNode::range(
            build_term(&range.lhs()?)?,
            build_value(&range.rhs()?)?,
        )),
        Term::Interval(interval) => Some(CronNode::interval(
            build_term(&interval.base()?)?,
            build_value(&interval.step()?)?,
        )),
    }
}

fn build_value(value: &ValueExpr) -> Option<CronNode> {
    value.token().map(|token| CronNode::atomic(token.text()))
}

fn special_kind(kind: SyntaxKind) -> Option<SpecialKind> {
    match kind {
        SyntaxKind::HASH => Some(SpecialKind::Hash),
        SyntaxKind::HASH_RANGE => Some(SpecialKind::HashRange),
        SyntaxKind::LAST => Some(SpecialKind::Last),
        SyntaxKind::LAST_WEEKDAY => Some(SpecialKind::LastWeekday),
        SyntaxKind::NEAREST_WEEKDAY => Some(SpecialKind::NearestWeekday),
        SyntaxKind::LAST_OF_WEEKDAY => Some(SpecialKind::LastOfWeekday),
        SyntaxKind::NTH_WEEKDAY => Some(SpecialKind::NthWeekday),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{CronMode, DialectTables};
    use crate::parser::ast::AstNode;
    use crate::parser::{TextSize, lex, parse_field};

    fn build(mode: CronMode, text: &str) -> Option<CronNode> {
        let tables = DialectTables::build(mode.profile());
        let lexed = lex(text, TextSize::new(0), &tables.vocabulary);
        let parse = parse_field(&lexed.tokens, tables.any_field(), TextSize::of(text));
        FieldRoot::cast(parse.syntax()).and_then(|root| build_field(&root))
    }

    #[test]
    fn test_build_range() {
        assert_eq!(
            build(CronMode::Cron, "4-10"),
            Some(CronNode::range(CronNode::atomic("4"), CronNode::atomic("10")))
        );
    }

    #[test]
    fn test_build_unchecked_range() {
        // bounds are not validated
        assert_eq!(build(CronMode::Cron, "10-4").map(|n| n.value()), Some("10-4".to_string()));
    }

    #[test]
    fn test_build_special() {
        assert_eq!(
            build(CronMode::Jenkins, "H(0-29)"),
            Some(CronNode::special(SpecialKind::HashRange, "H(0-29)"))
        );
        assert_eq!(
            build(CronMode::Quartz, "15W"),
            Some(CronNode::special(SpecialKind::NearestWeekday, "15W"))
        );
    }

    #[test]
    fn test_build_union() {
        let node = build(CronMode::Cron, "1,2,5-7").unwrap();
        assert_eq!(node.terms().len(), 3);
    }

    #[test]
    fn test_incomplete_tree_builds_nothing() {
        assert_eq!(build(CronMode::Cron, "4-10-2"), None);
        assert_eq!(build(CronMode::Cron, ""), None);
    }
}
