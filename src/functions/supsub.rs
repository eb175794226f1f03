//! Subscript and superscript builders
//!
//! Scripts attach beside their base (`msub`/`msup`), or under and over it
//! (`munder`/`mover`) when the base is a big operator such as `sum` or `lim`.
//! Adding the opposite script to an already scripted base merges both into a
//! single `msubsup`/`munderover` instead of nesting two script elements, which
//! is what makes `x_i^2` and `sum_(i=1)^n` come out right.

use crate::mathml_tree::{MathNodeType, Node};

/// Which slot of a combined script element a new script fills
#[derive(Clone, Copy)]
enum Slot {
    Sub,
    Sup,
}

/// Merge `script` into a base that already has the opposite script.
///
/// Returns the base back untouched when it is not a two-child script element.
fn merge(base: Node, script: Node, slot: Slot, merged: MathNodeType) -> Result<Node, (Node, Node)> {
    if base.children.len() != 2 {
        return Err((base, script));
    }
    let mut children = base.children;
    match slot {
        Slot::Sub => children.insert(1, script),
        Slot::Sup => children.push(script),
    }
    Ok(Node::with_children(merged, children))
}

/// Attach `subscript` to `base` (`a_b`).
#[must_use]
pub fn subscript(base: Node, subscript: Node) -> Node {
    let subscript = subscript.into_ungrouped();

    let merged = match base.math_type() {
        Some(MathNodeType::Msup) => Some(MathNodeType::Msubsup),
        Some(MathNodeType::Mover) => Some(MathNodeType::Munderover),
        _ => None,
    };
    let (base, subscript) = match merged {
        Some(merged) => match merge(base, subscript, Slot::Sub, merged) {
            Ok(node) => return node,
            Err(parts) => parts,
        },
        None => (base, subscript),
    };

    let script = if base.markers.underover {
        MathNodeType::Munder
    } else {
        MathNodeType::Msub
    };
    Node::with_children(script, vec![base, subscript])
}

/// Attach `superscript` to `base` (`a^b`).
#[must_use]
pub fn superscript(base: Node, superscript: Node) -> Node {
    let superscript = superscript.into_ungrouped();

    let merged = match base.math_type() {
        Some(MathNodeType::Msub) => Some(MathNodeType::Msubsup),
        Some(MathNodeType::Munder) => Some(MathNodeType::Munderover),
        _ => None,
    };
    let (base, superscript) = match merged {
        Some(merged) => match merge(base, superscript, Slot::Sup, merged) {
            Ok(node) => return node,
            Err(parts) => parts,
        },
        None => (base, superscript),
    };

    let script = if base.markers.underover {
        MathNodeType::Mover
    } else {
        MathNodeType::Msup
    };
    Node::with_children(script, vec![base, superscript])
}
