//! Recursive-descent parser for ASCIIMath notation.
//!
//! The parser pulls tokens from the [`Lexer`] and assembles them into sibling
//! lists. Three mechanisms shape the tree:
//!
//! - **Arity**: unary and binary symbols consume the operands that follow
//!   them; a missing operand becomes the placeholder glyph.
//! - **Grouping**: an opening delimiter starts a nested sibling list that runs
//!   to the next closing delimiter. Symmetric delimiters such as `|` open a
//!   group unless an identical glyph is already among the preceding siblings,
//!   in which case they close it.
//! - **Infix rewrites**: after every append, a `left op right` triple whose
//!   middle is a special binary operator (`/`, `_`, `^`) collapses into a
//!   single node. Because the check runs on every append, `a/b/c` is
//!   left-associative.
//!
//! A bracketed sequence becomes a matrix when, directly inside the brackets, a
//! comma follows a fully bracketed group: `((a,b),(c,d))` is a matrix, `(a,b)`
//! is a plain group.
//!
//! Nesting is capped at [`MAX_NESTING`] levels. Past the cap, brackets are
//! kept as flat glyphs, operators get the placeholder as operand and infix
//! rewrites stop deepening the tree, so hostile input still yields a tree.
//!
//! The nodes returned still carry their parser markers; run them through
//! [`crate::postprocess`] before handing them out.

use tracing::trace;

use crate::functions::application::{apply_binary, apply_unary};
use crate::functions::array::build_matrix;
use crate::functions::rewrite_special;
use crate::functions::text::read_free_text;
use crate::lexer::{Lexer, MISSING_OPERAND};
use crate::mathml_tree::{Arity, MathNodeType, Node};

/// Deepest nesting of groups and operands the parser descends into.
pub const MAX_NESTING: usize = 64;

/// Parser over a single expression
///
/// # Examples
///
/// ```rust
/// use asciimathml::parser::Parser;
/// use asciimathml::MathNodeType;
///
/// let nodes = Parser::new("a/b/c").parse();
/// assert_eq!(nodes.len(), 1);
/// assert!(nodes[0].is(MathNodeType::Mfrac));
/// assert!(nodes[0].children[0].is(MathNodeType::Mfrac));
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    depth: usize,
}

/// Whether a symmetric delimiter already opened among `siblings`.
fn has_open_twin(siblings: &[Node], delimiter: &Node) -> bool {
    delimiter.text.is_some() && siblings.iter().any(|s| s.text == delimiter.text)
}

/// Collapse trailing `left op right` triples whose `op` is a special binary
/// operator.
///
/// An opening delimiter is never taken as the left operand, so `(/x)` keeps
/// its slash. Operands taller than [`MAX_NESTING`] are left alone too.
fn rewrite_trailing_specials(nodes: &mut Vec<Node>) {
    while let [.., left, operator, right] = nodes.as_slice()
        && let Some(kind) = operator.markers.special
        && !left.markers.opening
        && !left.taller_than(MAX_NESTING)
        && !right.taller_than(MAX_NESTING)
    {
        let (Some(right), Some(_), Some(left)) = (nodes.pop(), nodes.pop(), nodes.pop()) else {
            break;
        };
        nodes.push(rewrite_special(kind, left, right));
    }
}

impl<'a> Parser<'a> {
    /// Create a parser over `input`
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            depth: 0,
        }
    }

    /// The input not consumed yet
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.lexer.remaining()
    }

    /// Parse the whole input into a list of sibling nodes.
    #[must_use]
    pub fn parse(mut self) -> Vec<Node> {
        self.parse_exprs(Vec::new(), false)
    }

    /// Parse one expression: a token plus whatever it consumes.
    ///
    /// `siblings` are the nodes already parsed at this nesting level, used to
    /// decide whether a symmetric delimiter opens or closes. Returns `None`
    /// only when the input is exhausted and `required` is unset.
    pub fn parse_expr(&mut self, siblings: &[Node], required: bool) -> Option<Node> {
        let node = self.lexer.lex(required)?.node;
        trace!(depth = self.depth, text = ?node.text, "parse expression");

        if node.markers.opening && (!node.markers.closing || !has_open_twin(siblings, &node)) {
            if self.at_limit() {
                trace!(depth = self.depth, "nesting limit, keeping bracket flat");
                return Some(node);
            }
            let children = self.nested(|parser| parser.parse_exprs(vec![node], true));
            return Some(Node::with_children(MathNodeType::Mrow, children));
        }

        if node.markers.free_text {
            return Some(read_free_text(&mut self.lexer));
        }

        Some(match node.markers.arity {
            Arity::Nullary => node,
            Arity::Unary => {
                let operand = self.parse_operand();
                apply_unary(node, operand)
            }
            Arity::Binary => {
                let first = self.parse_operand();
                let second = self.parse_operand();
                apply_binary(node, first, second)
            }
        })
    }

    /// Parse a mandatory operand, falling back to the placeholder glyph.
    ///
    /// At the nesting limit nothing is consumed and the placeholder is used.
    fn parse_operand(&mut self) -> Node {
        if self.at_limit() {
            trace!(depth = self.depth, "nesting limit, operand left missing");
            return Node::leaf(MathNodeType::Mi, MISSING_OPERAND);
        }
        self.nested(|parser| parser.parse_expr(&[], true))
            .unwrap_or_else(|| Node::leaf(MathNodeType::Mi, MISSING_OPERAND))
    }

    const fn at_limit(&self) -> bool {
        self.depth >= MAX_NESTING
    }

    /// Run `f` one nesting level deeper.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    /// Parse siblings onto `nodes` until the input runs out or, inside a
    /// group, a closing delimiter arrives.
    ///
    /// A group that turned out to be a matrix comes back as
    /// `open, mtable, close`. Outside any group, a stray closing delimiter is
    /// kept as a plain glyph and parsing continues.
    pub fn parse_exprs(&mut self, mut nodes: Vec<Node>, inside_parens: bool) -> Vec<Node> {
        let mut inside_matrix = false;

        loop {
            if let Some(node) = self.parse_expr(&nodes, false) {
                let closing = node.markers.closing;
                let comma = node.has_text(",");
                nodes.push(node);

                if inside_parens && closing {
                    trace!(depth = self.depth, inside_matrix, "group closed");
                    return if inside_matrix {
                        build_matrix(nodes)
                    } else {
                        nodes
                    };
                }

                if inside_parens
                    && comma
                    && nodes.len() >= 2
                    && nodes[nodes.len() - 2].is_enclosed_group()
                {
                    inside_matrix = true;
                }

                rewrite_trailing_specials(&mut nodes);
            }

            if self.lexer.is_exhausted() {
                return nodes;
            }
        }
    }
}
