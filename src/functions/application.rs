//! Attaching operands to prefix operators
//!
//! Unary symbols (`sqrt`, `sin`, accents) and binary symbols (`frac`, `root`,
//! `stackrel`) consume the operands that follow them in the input. The
//! `operand_first` marker flips where they land: accents sit over an operand
//! that comes first structurally, and `root` takes its index before the
//! radicand in the input but after it in the tree.

use crate::mathml_tree::Node;

/// Attach a single operand to `operator`.
#[must_use]
pub fn apply_unary(mut operator: Node, operand: Node) -> Node {
    let operand = operand.into_ungrouped();
    if operator.markers.operand_first {
        operator.children.insert(0, operand);
    } else {
        operator.add_child(operand);
    }
    operator
}

/// Attach two operands to `operator`, in input order unless swapped.
#[must_use]
pub fn apply_binary(mut operator: Node, first: Node, second: Node) -> Node {
    let first = first.into_ungrouped();
    let second = second.into_ungrouped();
    if operator.markers.operand_first {
        operator.children.extend([second, first]);
    } else {
        operator.children.extend([first, second]);
    }
    operator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SYMBOLS;
    use crate::mathml_tree::MathNodeType;

    fn symbol(token: &str) -> Node {
        SYMBOLS.get(token).map(|def| def.instantiate()).unwrap()
    }

    #[test]
    fn test_function_application() {
        let node = apply_unary(symbol("sin"), Node::leaf(MathNodeType::Mi, "x"));
        assert!(node.is(MathNodeType::Mrow));
        assert_eq!(node.to_text(), "sinx");
    }

    #[test]
    fn test_accent_goes_over_operand() {
        let node = apply_unary(symbol("hat"), Node::leaf(MathNodeType::Mi, "x"));
        assert!(node.is(MathNodeType::Mover));
        assert!(node.children[0].has_text("x"));
        assert!(node.children[1].has_text("^"));
    }

    #[test]
    fn test_root_swaps_operands() {
        let node = apply_binary(
            symbol("root"),
            Node::leaf(MathNodeType::Mn, "3"),
            Node::leaf(MathNodeType::Mi, "x"),
        );
        assert!(node.is(MathNodeType::Mroot));
        assert!(node.children[0].has_text("x"));
        assert!(node.children[1].has_text("3"));
    }

    #[test]
    fn test_frac_keeps_order() {
        let node = apply_binary(
            symbol("frac"),
            Node::leaf(MathNodeType::Mi, "a"),
            Node::leaf(MathNodeType::Mi, "b"),
        );
        assert_eq!(node.to_text(), "ab");
    }
}
