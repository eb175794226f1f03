//! Matrix builder
//!
//! A bracketed sequence such as `((a,b),(c,d))` is reinterpreted as a table:
//! every comma-separated sibling between the outer brackets becomes a row, and
//! the commas inside each row split it into cells.

use core::mem;

use crate::mathml_tree::{MathNodeType, Node};

fn is_comma(node: &Node) -> bool {
    node.is(MathNodeType::Mo) && node.has_text(",")
}

/// Split a row's contents on commas into table cells.
///
/// A row that is not a group becomes a single cell holding it.
fn row_to_cells(row: Node) -> Node {
    let row = row.into_ungrouped();
    if !row.is(MathNodeType::Mrow) {
        return Node::with_children(
            MathNodeType::Mtr,
            vec![Node::with_children(MathNodeType::Mtd, vec![row])],
        );
    }

    let mut cells = Vec::new();
    let mut cell = Vec::new();
    for child in row.children {
        if is_comma(&child) {
            cells.push(Node::with_children(
                MathNodeType::Mtd,
                mem::take(&mut cell),
            ));
        } else {
            cell.push(child);
        }
    }
    cells.push(Node::with_children(MathNodeType::Mtd, cell));
    Node::with_children(MathNodeType::Mtr, cells)
}

/// Turn a delimited sibling list into `open, mtable, close`.
///
/// `nodes` must start with the opening delimiter and end with the closing
/// one; shorter lists are returned unchanged.
#[must_use]
pub fn build_matrix(nodes: Vec<Node>) -> Vec<Node> {
    if nodes.len() < 2 {
        return nodes;
    }
    let mut inner = nodes.into_iter();
    let (Some(open), Some(close)) = (inner.next(), inner.next_back()) else {
        return Vec::new();
    };

    let rows = inner
        .filter(|node| !is_comma(node))
        .map(row_to_cells)
        .collect();

    vec![open, Node::with_children(MathNodeType::Mtable, rows), close]
}
