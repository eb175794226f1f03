//! Block structure builder
//!
//! A display block holds one or more equations, each optionally labeled and
//! each possibly broken over several lines. The builder lays them out as:
//!
//! - a single unlabeled equation: its row, unwrapped;
//! - anything else: a left-aligned table with one row per equation, where a
//!   labeled row carries a right-aligned number cell and the id the numbering
//!   pass later looks for.
//!
//! Labels are registered in the [`ReferenceTable`] as the rows are built. A
//! label that cannot be registered (a duplicate) leaves its row unnumbered.

use tracing::debug;

use crate::mathml_tree::{MATHML_NAMESPACE, MathNodeType, Node};
use crate::parser::Parser;
use crate::postprocess::postprocessed;
use crate::references::{ReferenceTable, equation_id};

/// Hard line break inside an equation's source: two spaces and a newline
pub const LINE_BREAK: &str = "  \n";

/// Class of a numbered equation row
pub const EQUATION_CLASS: &str = "equation";

/// Class of the number cell text
pub const EQNUM_CLASS: &str = "eqnum";

/// One equation of a display block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Equation {
    /// Label used for cross references; empty means unlabeled
    pub label: String,
    /// Source text, possibly containing [`LINE_BREAK`]s
    pub source: String,
}

impl Equation {
    /// A labeled equation
    #[must_use]
    pub fn new(label: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
        }
    }

    /// An equation without a label
    #[must_use]
    pub fn unlabeled(source: impl Into<String>) -> Self {
        Self::new(String::new(), source)
    }

    /// The visual lines of the equation
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.source.split(LINE_BREAK)
    }
}

fn left_aligned_table(rows: Vec<Node>) -> Node {
    Node::with_children(MathNodeType::Mtable, rows).attribute("columnalign", "left")
}

fn cell(children: Vec<Node>) -> Node {
    Node::with_children(MathNodeType::Mtd, children)
}

/// Parse an equation's lines.
///
/// One line becomes an `mrow`; several become a left-aligned table with one
/// row per line and no number cell.
#[must_use]
pub fn parse_multiline<'a>(lines: impl IntoIterator<Item = &'a str>) -> Node {
    let mut rows: Vec<Vec<Node>> = lines
        .into_iter()
        .map(|line| postprocessed(Parser::new(line).parse()))
        .collect();

    if rows.len() == 1 {
        let nodes = rows.pop().unwrap_or_default();
        return Node::with_children(MathNodeType::Mrow, nodes);
    }

    left_aligned_table(
        rows.into_iter()
            .map(|nodes| Node::with_children(MathNodeType::Mtr, vec![cell(nodes)]))
            .collect(),
    )
}

/// Build the row for one equation of a multi-equation block.
fn equation_row(equation: &Equation, references: &mut ReferenceTable) -> Node {
    let body = parse_multiline(equation.lines());

    if equation.label.is_empty() {
        return Node::with_children(MathNodeType::Mtr, vec![cell(vec![body])]);
    }

    match references.register(&equation.label) {
        Ok(ordinal) => {
            let number = Node::leaf(MathNodeType::Mtext, format!("({ordinal})")).class(EQNUM_CLASS);
            Node::with_children(
                MathNodeType::Mtr,
                vec![
                    cell(vec![body]),
                    cell(vec![number]).attribute("columnalign", "right"),
                ],
            )
            .attribute("id", equation_id(&equation.label))
            .class(EQUATION_CLASS)
        }
        Err(err) => {
            debug!(label = %equation.label, %err, "leaving equation unnumbered");
            Node::with_children(MathNodeType::Mtr, vec![cell(vec![body])])
        }
    }
}

/// Lay out a block of equations, registering their labels.
///
/// An empty block yields an empty `mrow`.
#[must_use]
pub fn build_block(equations: &[Equation], references: &mut ReferenceTable) -> Node {
    match equations {
        [] => Node::new(MathNodeType::Mrow),
        [single] if single.label.is_empty() => parse_multiline(single.lines()),
        _ => left_aligned_table(
            equations
                .iter()
                .map(|equation| equation_row(equation, references))
                .collect(),
        ),
    }
}

/// Wrap a block unit as display math: `math[display=block] > mstyle > unit`.
#[must_use]
pub fn display_math(unit: Node) -> Node {
    Node::with_children(
        MathNodeType::Math,
        vec![Node::with_children(MathNodeType::Mstyle, vec![unit])],
    )
    .attribute("xmlns", MATHML_NAMESPACE)
    .attribute("display", "block")
}
