//! Cleanup applied to parsed nodes before they leave the engine.
//!
//! Invisible nodes are pruned first, while their flag is still readable; then
//! every parser marker is cleared. Both passes are idempotent.

use crate::mathml_tree::Node;

/// Prune invisible nodes and clear parser markers across `nodes`.
pub fn postprocess(nodes: &mut Vec<Node>) {
    nodes.retain(|node| !node.markers.invisible);
    for node in nodes.iter_mut() {
        node.remove_invisible();
        node.strip_private();
    }
}

/// Owned variant of [`postprocess`].
#[must_use]
pub fn postprocessed(mut nodes: Vec<Node>) -> Vec<Node> {
    postprocess(&mut nodes);
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathml_tree::MathNodeType;
    use crate::parser::Parser;
    use proptest::prelude::*;

    #[test]
    fn test_invisible_braces_are_pruned() {
        let nodes = postprocessed(Parser::new("{:x, y:}").parse());
        assert_eq!(nodes.len(), 1);
        let row = &nodes[0];
        assert!(row.is(MathNodeType::Mrow));
        assert_eq!(row.to_text(), "x,y");
        assert!(!row.has_private());
    }

    #[test]
    fn test_top_level_invisible_is_pruned() {
        let mut hidden = Node::leaf(MathNodeType::Mo, ":}");
        hidden.markers.invisible = true;
        let nodes = postprocessed(vec![hidden, Node::leaf(MathNodeType::Mi, "a")]);
        assert_eq!(nodes, vec![Node::leaf(MathNodeType::Mi, "a")]);
    }

    #[test]
    fn test_markers_are_cleared() {
        let nodes = postprocessed(Parser::new("sum_(i=1)^n hat x |y|").parse());
        assert!(nodes.iter().all(|n| !n.has_private()));
    }

    proptest! {
        #[test]
        fn prop_postprocess_is_idempotent(input in "[a-z0-9+/^_(),|{}:. -]{0,24}") {
            let once = postprocessed(Parser::new(&input).parse());
            let twice = postprocessed(once.clone());
            prop_assert_eq!(&once, &twice);
            prop_assert!(once.iter().all(|n| !n.has_private()));
        }
    }
}
