//! ASCIIMath to MathML tree translation
//!
//! Turns the compact ASCIIMath notation (`sum_(i=1)^n i^2`, `sqrt(x+1)/2`,
//! `((a,b),(c,d))`) into a tree of MathML nodes, and numbers the headings and
//! labeled equations of a host document so equation references can be
//! resolved into links.
//!
//! The crate produces trees only. Finding math regions in surrounding text
//! and serializing the final document are left to the host.
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::non_ascii_literal)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::absolute_paths)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::return_and_then)]
#![warn(clippy::needless_raw_strings)]
#![warn(clippy::ref_patterns)]
// Not sure
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
// clippy exceptions
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::single_call_fn)]

extern crate alloc;
pub mod block;
pub mod context;
pub mod core;
pub mod functions;
pub mod lexer;
pub mod mathml_tree;
pub mod numbering;
/// Recursive-descent parsing of ASCIIMath expressions.
pub mod parser;
pub mod postprocess;
pub mod references;
pub mod symbols;
pub mod tree;
pub mod types;
pub mod utils;

/// Per-document state: settings, equation references and numbering.
///
/// Create one per document, build its display blocks with
/// [`DocumentContext::parse_block`], run [`DocumentContext::number`] once the
/// host has assembled the full document tree, then resolve equation mentions
/// with [`DocumentContext::resolve`].
///
/// # Examples
///
/// ```rust
/// use asciimathml::{DocumentContext, Equation, Settings};
///
/// let mut ctx = DocumentContext::new(Settings::default());
/// let block = ctx.parse_block(&[
///     Equation::new("first", "a^2 + b^2 = c^2"),
///     Equation::unlabeled("a = sqrt(c^2 - b^2)"),
/// ]);
/// assert_eq!(ctx.references().len(), 1);
/// # let _ = block;
/// ```
pub use crate::context::DocumentContext;

/// Parse an inline formula into a `math` element.
///
/// # Examples
///
/// ```rust
/// use asciimathml::{VirtualNode as _, parse};
///
/// assert_eq!(
///     parse("sqrt 2").to_markup(),
///     "<math xmlns=\"http://www.w3.org/1998/Math/MathML\"><mstyle><msqrt><mn>2</mn></msqrt></mstyle></math>"
/// );
/// ```
pub use crate::core::parse;

/// Parse one line of notation into an `mrow`.
pub use crate::core::parse_line;

/// Parse a formula into bare, cleaned sibling nodes.
pub use crate::core::parse_expression;

/// One labeled (or unlabeled) equation of a display block.
pub use crate::block::Equation;

/// The tree node type produced by every stage of the engine.
pub use crate::mathml_tree::{MathNodeType, Node, NodeType};

/// The equation label table filled by block building and numbering.
pub use crate::references::ReferenceTable;

/// Markup writing for inspection and tests.
pub use crate::tree::VirtualNode;

/// Numbering configuration and reference table errors.
pub use crate::types::{ReferenceError, Settings};
