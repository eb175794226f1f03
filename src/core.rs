//! Core entry points - translating a single formula

use crate::mathml_tree::{MATHML_NAMESPACE, MathNodeType, Node};
use crate::parser::Parser;
use crate::postprocess::postprocessed;

/// Parse `expression` into cleaned sibling nodes, without any wrapper.
#[must_use]
pub fn parse_expression(expression: &str) -> Vec<Node> {
    postprocessed(Parser::new(expression).parse())
}

/// Parse one line of notation into an `mrow`.
#[must_use]
pub fn parse_line(expression: &str) -> Node {
    Node::with_children(MathNodeType::Mrow, parse_expression(expression))
}

/// Parse an inline formula into `math > mstyle > nodes`.
///
/// Never fails: missing operands show up as a placeholder glyph and unknown
/// characters pass through as identifiers or operators.
#[must_use]
pub fn parse(expression: &str) -> Node {
    Node::with_children(
        MathNodeType::Math,
        vec![Node::with_children(
            MathNodeType::Mstyle,
            parse_expression(expression),
        )],
    )
    .attribute("xmlns", MATHML_NAMESPACE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::VirtualNode as _;

    #[test]
    fn test_parse_sqrt() {
        assert_eq!(
            parse("sqrt 2").to_markup(),
            "<math xmlns=\"http://www.w3.org/1998/Math/MathML\"><mstyle><msqrt><mn>2</mn></msqrt></mstyle></math>"
        );
    }

    #[test]
    fn test_parse_line() {
        let row = parse_line("a+b");
        assert!(row.is(MathNodeType::Mrow));
        assert_eq!(row.to_markup(), "<mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow>");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            parse("").children[0].to_markup(),
            "<mstyle/>"
        );
    }

    #[test]
    fn test_spaced_keyword() {
        assert_eq!(
            parse_line("a and b").to_markup(),
            "<mrow><mi>a</mi><mrow><mspace width=\"1ex\"/><mtext>and</mtext><mspace width=\"1ex\"/></mrow><mi>b</mi></mrow>"
        );
    }
}
