//! Free text reader for `text(...)`
//!
//! The argument is taken verbatim up to the bracket matching the one that
//! opens it. Without an opening bracket, the next single token is taken
//! literally instead. An unterminated bracket consumes the rest of the input.

use phf::phf_map;

use crate::lexer::Lexer;
use crate::mathml_tree::{MathNodeType, Node};

/// Brackets that may enclose free text, by opening glyph
static TEXT_DELIMITERS: phf::Map<char, char> = phf_map! {
    '(' => ')',
    '[' => ']',
    '{' => '}',
};

/// Read the free text argument following a `text` token.
///
/// Returns the argument wrapped as `mrow(mtext)`.
pub fn read_free_text(lexer: &mut Lexer<'_>) -> Node {
    lexer.skip_whitespace();
    let rest = lexer.remaining();

    let text = match rest.chars().next().and_then(|c| TEXT_DELIMITERS.get(&c)) {
        Some(&closing) => {
            lexer.consume(1);
            let body = lexer.remaining();
            match body.find(closing) {
                Some(end) => {
                    let text = lexer.consume(end);
                    lexer.consume(closing.len_utf8());
                    text
                }
                None => lexer.consume(body.len()),
            }
        }
        None => lexer.lex(false).map_or("", |token| token.text),
    };

    Node::with_children(
        MathNodeType::Mrow,
        vec![Node::leaf(MathNodeType::Mtext, text)],
    )
}
