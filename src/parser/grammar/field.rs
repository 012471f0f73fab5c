use super::*;

/// field := term (',' term)*
///
/// A single term is left unwrapped; two or more are grouped under UNION.
pub fn parse_field<P: FieldParser>(p: &mut P) {
    p.start_node(SyntaxKind::FIELD);

    let checkpoint = p.checkpoint();
    if parse_term(p) && p.at(SyntaxKind::COMMA) {
        p.start_node_at(checkpoint, SyntaxKind::UNION);
        while p.at(SyntaxKind::COMMA) {
            p.bump();
            if !parse_term(p) {
                break;
            }
        }
        p.finish_node();
    }

    if !p.at_eof() {
        if !p.has_errors() {
            let message = format!("unexpected {} after a complete field", describe_current(p));
            p.error(ErrorKind::UnconsumedInput, message);
        }
        p.start_node(SyntaxKind::ERROR);
        p.bump_rest();
        p.finish_node();
    }

    p.finish_node();
}

/// term := atomic ('-' value)? ('/' INTEGER)?
///
/// Returns false after reporting an error.
fn parse_term<P: FieldParser>(p: &mut P) -> bool {
    if !p.at_atom() {
        let message = if p.at_eof() {
            "expected a term but found end of field".to_string()
        } else {
            format!("{} cannot start a term here", describe_current(p))
        };
        p.error(ErrorKind::RequiredTermMissing, message);
        return false;
    }

    let checkpoint = p.checkpoint();
    parse_atomic(p);

    if p.at(SyntaxKind::MINUS) {
        p.start_node_at(checkpoint, SyntaxKind::RANGE_EXPR);
        p.bump();
        let closed = p.at_range_end();
        if closed {
            parse_value(p);
        } else {
            p.error(ErrorKind::RequiredTermMissing, "expected a value after '-'".to_string());
        }
        p.finish_node();
        if !closed {
            return false;
        }
    }

    if p.at(SyntaxKind::SLASH) {
        p.start_node_at(checkpoint, SyntaxKind::INTERVAL_EXPR);
        p.bump();
        let stepped = p.at(SyntaxKind::INTEGER);
        if stepped {
            parse_value(p);
        } else {
            p.error(ErrorKind::RequiredTermMissing, "expected a step after '/'".to_string());
        }
        p.finish_node();
        return stepped;
    }

    true
}

/// atomic := '*' | '?' | value | special
fn parse_atomic<P: FieldParser>(p: &mut P) {
    let kind = match p.current_kind() {
        SyntaxKind::STAR => SyntaxKind::WILDCARD_EXPR,
        SyntaxKind::QUESTION => SyntaxKind::NO_SPECIFIC_EXPR,
        k if k.is_special() => SyntaxKind::SPECIAL_EXPR,
        _ => SyntaxKind::VALUE_EXPR,
    };
    p.start_node(kind);
    p.bump();
    p.finish_node();
}

fn parse_value<P: FieldParser>(p: &mut P) {
    p.start_node(SyntaxKind::VALUE_EXPR);
    p.bump();
    p.finish_node();
}

/// `'-'` for fixed tokens, `number '75'` for tokens with variable text
fn describe_current<P: FieldParser>(p: &P) -> String {
    match p.current_kind().display_name() {
        quoted if quoted.starts_with('\'') => quoted.to_string(),
        name => format!("{} '{}'", name, p.current_text()),
    }
}
