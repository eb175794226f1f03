//! The lexer turns the remaining input into notation tokens, one at a time.
//!
//! Each call to [`Lexer::lex`] skips leading whitespace and tries, in order:
//! a numeric literal, the longest symbol-table token, and finally a single
//! character (an identifier when alphabetic, an operator otherwise). The node
//! handed back is always freshly built, so the parser may rearrange it freely.

use core::mem;

use crate::mathml_tree::{MathNodeType, Node};
use crate::symbols::longest_match;

/// Glyph substituted for an operand that the input never supplied.
pub const MISSING_OPERAND: &str = "\u{25a1}";

/// A lexed notation token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The slice of input the token was read from; empty for the placeholder
    pub text: &'a str,
    /// The tree fragment the token produces
    pub node: Node,
}

/// Scanner over the unconsumed part of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexer<'a> {
    rest: &'a str,
}

/// Byte length of a numeric literal at the start of `s`.
///
/// Accepts an optional leading minus, then either digits with an optional
/// fractional part (`12`, `12.`, `12.5`) or a bare fraction (`.5`).
fn match_number(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(bytes.first() == Some(&b'-'));
    let integral = digits(end);
    if integral > 0 {
        end += integral;
        if bytes.get(end) == Some(&b'.') {
            end += 1 + digits(end + 1);
        }
        Some(end)
    } else if bytes.get(end) == Some(&b'.') {
        let fraction = digits(end + 1);
        (fraction > 0).then_some(end + 1 + fraction)
    } else {
        None
    }
}

/// Build the node for a numeric literal; a leading minus becomes a negation
/// operator in front of the number.
fn number_node(literal: &str) -> Node {
    match literal.strip_prefix('-') {
        Some(digits) => Node::with_children(
            MathNodeType::Mrow,
            vec![
                Node::leaf(MathNodeType::Mo, "-"),
                Node::leaf(MathNodeType::Mn, digits),
            ],
        ),
        None => Node::leaf(MathNodeType::Mn, literal),
    }
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input`
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// The input not consumed yet
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.rest
    }

    /// Whether nothing but whitespace is left
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.rest.trim_start().is_empty()
    }

    /// Drop leading whitespace from the remaining input
    pub fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    /// Consume `len` bytes and return them.
    ///
    /// `len` is clamped to the remaining input and must fall on a character
    /// boundary; anything else consumes the rest of the input.
    pub fn consume(&mut self, len: usize) -> &'a str {
        match self.rest.split_at_checked(len) {
            Some((head, tail)) => {
                self.rest = tail;
                head
            }
            None => mem::take(&mut self.rest),
        }
    }

    /// Lex the next token.
    ///
    /// When the input is exhausted this yields the [`MISSING_OPERAND`]
    /// placeholder if `required` is set, and `None` otherwise.
    pub fn lex(&mut self, required: bool) -> Option<Token<'a>> {
        self.skip_whitespace();

        let Some(first) = self.rest.chars().next() else {
            return required.then(|| Token {
                text: "",
                node: Node::leaf(MathNodeType::Mi, MISSING_OPERAND),
            });
        };

        if let Some(len) = match_number(self.rest) {
            let text = self.consume(len);
            return Some(Token {
                text,
                node: number_node(text),
            });
        }

        if let Some((symbol, def)) = longest_match(self.rest) {
            let text = self.consume(symbol.len());
            return Some(Token {
                text,
                node: def.instantiate(),
            });
        }

        let text = self.consume(first.len_utf8());
        let math = if first.is_alphabetic() {
            MathNodeType::Mi
        } else {
            MathNodeType::Mo
        };
        Some(Token {
            text,
            node: Node::leaf(math, text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::iter;

    use proptest::prelude::*;

    fn lex_all(input: &str) -> Vec<String> {
        let mut lexer = Lexer::new(input);
        iter::from_fn(|| lexer.lex(false))
            .map(|t| t.text.to_owned())
            .collect()
    }

    #[test]
    fn test_match_number() {
        assert_eq!(match_number("12+3"), Some(2));
        assert_eq!(match_number("3.14x"), Some(4));
        assert_eq!(match_number("3.x"), Some(2));
        assert_eq!(match_number(".5"), Some(2));
        assert_eq!(match_number("-7"), Some(2));
        assert_eq!(match_number("-.25"), Some(4));
        assert_eq!(match_number("."), None);
        assert_eq!(match_number("-"), None);
        assert_eq!(match_number("x1"), None);
    }

    #[test]
    fn test_lex_tokens() {
        assert_eq!(lex_all("sin x^2"), ["sin", "x", "^", "2"]);
        assert_eq!(lex_all("a<=b"), ["a", "<=", "b"]);
        assert_eq!(lex_all("  sube\t"), ["sube"]);
        assert_eq!(lex_all("ab"), ["a", "b"]);
    }

    #[test]
    fn test_negative_number_is_wrapped() {
        let token = Lexer::new("-42").lex(false).unwrap();
        assert!(token.node.is(MathNodeType::Mrow));
        assert!(token.node.children[0].has_text("-"));
        assert!(token.node.children[1].is(MathNodeType::Mn));
        assert!(token.node.children[1].has_text("42"));
    }

    #[test]
    fn test_fallback_classification() {
        let mut lexer = Lexer::new("q ?");
        let ident = lexer.lex(false).unwrap();
        assert!(ident.node.is(MathNodeType::Mi));
        let op = lexer.lex(false).unwrap();
        assert!(op.node.is(MathNodeType::Mo));
        assert!(op.node.has_text("?"));
    }

    #[test]
    fn test_non_ascii_fallback() {
        let token = Lexer::new("\u{3b8}").lex(false).unwrap();
        assert!(token.node.is(MathNodeType::Mi));
        assert_eq!(token.text, "\u{3b8}");
    }

    #[test]
    fn test_placeholder_only_when_required() {
        assert!(Lexer::new("   ").lex(false).is_none());

        let token = Lexer::new("").lex(true).unwrap();
        assert!(token.node.has_text(MISSING_OPERAND));
        assert_eq!(token.text, "");
    }

    #[test]
    fn test_consume_clamps() {
        let mut lexer = Lexer::new("abc");
        assert_eq!(lexer.consume(1), "a");
        assert_eq!(lexer.consume(10), "bc");
        assert!(lexer.is_exhausted());
    }

    proptest! {
        #[test]
        fn prop_numbers_reproduce_digits(literal in "[0-9]{1,9}(\\.[0-9]{0,6})?") {
            let token = Lexer::new(&literal).lex(false).unwrap();
            prop_assert!(token.node.is(MathNodeType::Mn));
            prop_assert_eq!(token.node.text.as_deref(), Some(literal.as_str()));
        }

        #[test]
        fn prop_negative_numbers_split_sign(digits in "[0-9]{1,9}") {
            let literal = format!("-{digits}");
            let token = Lexer::new(&literal).lex(false).unwrap();
            prop_assert_eq!(token.node.to_text(), literal.as_str());
            prop_assert_eq!(token.node.children[1].text.as_deref(), Some(digits.as_str()));
        }
    }
}
