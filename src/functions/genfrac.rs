//! Fraction builder for the `a/b` infix form

use crate::mathml_tree::{MathNodeType, Node};

/// Nest `numerator` over `denominator`, dropping their group brackets.
#[must_use]
pub fn fraction(numerator: Node, denominator: Node) -> Node {
    Node::with_children(
        MathNodeType::Mfrac,
        vec![numerator.into_ungrouped(), denominator.into_ungrouped()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paren(mut node: Node, glyph: &str, opening: bool) -> Node {
        node.text = Some(glyph.to_owned());
        node.markers.opening = opening;
        node.markers.closing = !opening;
        node
    }

    #[test]
    fn test_fraction_strips_groups() {
        let group = Node::with_children(
            MathNodeType::Mrow,
            vec![
                paren(Node::new(MathNodeType::Mo), "(", true),
                Node::leaf(MathNodeType::Mi, "a"),
                Node::leaf(MathNodeType::Mo, "+"),
                Node::leaf(MathNodeType::Mi, "b"),
                paren(Node::new(MathNodeType::Mo), ")", false),
            ],
        );
        let frac = fraction(group, Node::leaf(MathNodeType::Mn, "2"));

        assert!(frac.is(MathNodeType::Mfrac));
        assert_eq!(frac.children[0].children.len(), 3);
        assert_eq!(frac.children[0].to_text(), "a+b");
        assert!(frac.children[1].has_text("2"));
    }
}
