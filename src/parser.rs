//! Dep-string parser
//!
//! Parses the compact textual dep notation into a sequence of [`DepAtom`]s.
//! Based on the tokenization rules of the original `resolve-deps` tool:
//! strip `#` comments, split on runs of commas/spaces/newlines, then
//! classify each token by its leading/contained punctuation.

use crate::atom::{DepAtom, DepList};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("bare '+' with no following name")]
    BareWeak,

    #[error("alternation has an empty part: {0:?}")]
    EmptyAlternationPart(String),
}

/// Parse a free-form dep-string blob into an ordered sequence of dep atoms.
pub fn parse_dep_str(raw: &str) -> Result<DepList, ParseError> {
    let stripped = strip_comments(raw);

    stripped
        .split(|c: char| c == ',' || c == ' ' || c == '\n' || c == '\r' || c == '\t')
        .filter(|tok| !tok.is_empty())
        .map(parse_token)
        .collect()
}

/// Classify a single already-tokenized dep spec (no comment stripping or
/// splitting). Used directly by the JSON loader, whose array elements are
/// each one token per the spec's §4.1 rules.
pub fn parse_token(tok: &str) -> Result<DepAtom, ParseError> {
    parse_one_dep(tok)
}

/// Replace everything from `#` to end of line with a space, line by line.
fn strip_comments(raw: &str) -> String {
    raw.lines()
        .map(|line| match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify a single non-empty token. `|` is checked before `+`, so a token
/// like `+a|b` is an alternation over `["+a", "b"]`, not a weak alternation —
/// this matches the original tool's precedence and is intentionally not
/// "fixed" into a combined weak-alternation semantics.
fn parse_one_dep(tok: &str) -> Result<DepAtom, ParseError> {
    if tok.contains('|') {
        let parts: Vec<&str> = tok.split('|').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(ParseError::EmptyAlternationPart(tok.to_string()));
        }
        if parts.len() == 1 {
            return Ok(DepAtom::Required(parts[0].to_string()));
        }
        Ok(DepAtom::Alternation(parts.into_iter().map(String::from).collect()))
    } else if let Some(rest) = tok.strip_prefix('+') {
        if rest.is_empty() {
            return Err(ParseError::BareWeak);
        }
        Ok(DepAtom::Weak(rest.to_string()))
    } else {
        Ok(DepAtom::Required(tok.to_string()))
    }
}

/// Re-render a dep list with canonical whitespace, for the parser round-trip
/// property: `parse(render(parse(s))) == parse(s)`.
pub fn render_dep_list(deps: &DepList) -> String {
    deps.iter()
        .map(render_atom)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a single atom back to its canonical token form (`b`, `+b`, `a|b`).
pub fn render_atom(atom: &DepAtom) -> String {
    match atom {
        DepAtom::Required(n) => n.clone(),
        DepAtom::Weak(n) => format!("+{n}"),
        DepAtom::Alternation(ns) => ns.join("|"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert_eq!(parse_dep_str("").unwrap(), vec![]);
    }

    #[test]
    fn whitespace_only_yields_empty_sequence() {
        assert_eq!(parse_dep_str("   \n\t  ").unwrap(), vec![]);
    }

    #[test]
    fn comment_only_yields_empty_sequence() {
        assert_eq!(parse_dep_str("# just a comment\n").unwrap(), vec![]);
    }

    #[test]
    fn plain_tokens_are_required() {
        assert_eq!(
            parse_dep_str("a, b c").unwrap(),
            vec![
                DepAtom::Required("a".into()),
                DepAtom::Required("b".into()),
                DepAtom::Required("c".into()),
            ]
        );
    }

    #[test]
    fn pipe_token_is_alternation() {
        assert_eq!(
            parse_dep_str("mach3|ab").unwrap(),
            vec![DepAtom::Alternation(vec!["mach3".into(), "ab".into()])]
        );
    }

    #[test]
    fn plus_token_is_weak() {
        assert_eq!(parse_dep_str("+b").unwrap(), vec![DepAtom::Weak("b".into())]);
    }

    #[test]
    fn bare_plus_is_a_parse_error() {
        assert!(matches!(parse_dep_str("+"), Err(ParseError::BareWeak)));
    }

    #[test]
    fn empty_alternation_part_is_a_parse_error() {
        assert!(matches!(
            parse_dep_str("a||b"),
            Err(ParseError::EmptyAlternationPart(_))
        ));
    }

    #[test]
    fn pipe_is_checked_before_plus() {
        // +a|b -> alternation over ["+a", "b"], not a weak alternation.
        assert_eq!(
            parse_dep_str("+a|b").unwrap(),
            vec![DepAtom::Alternation(vec!["+a".into(), "b".into()])]
        );
    }

    #[test]
    fn comments_are_stripped_to_end_of_line() {
        assert_eq!(
            parse_dep_str("a # comment about a\nb").unwrap(),
            vec![DepAtom::Required("a".into()), DepAtom::Required("b".into())]
        );
    }

    #[test]
    fn round_trip_is_stable() {
        for input in ["a,b,c", "mach3|ab|cd", "+weak", "a b|c +d"] {
            let first = parse_dep_str(input).unwrap();
            let rendered = render_dep_list(&first);
            let second = parse_dep_str(&rendered).unwrap();
            assert_eq!(first, second);
        }
    }
}
