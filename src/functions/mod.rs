//! Tree builders invoked by the parser
//!
//! The parser decides *when* a construct applies; the functions here decide
//! *what* it turns into:
//!
//! - **Fractions** ([`genfrac`]): the `/` infix rewrite.
//! - **Scripts** ([`supsub`]): the `_` and `^` infix rewrites, merging into
//!   combined script elements when a base already carries the opposite script.
//! - **Operator application** ([`application`]): attaching operands to unary
//!   and binary symbols such as `sqrt`, `hat` and `root`.
//! - **Free text** ([`text`]): the `text(...)` reader.
//! - **Matrices** ([`array`]): reinterpreting a bracketed row sequence as a
//!   table.
//!
//! Every builder strips the bracket glyphs from the operands it nests, since a
//! group's delimiters only render when the group stands on its own.

pub mod application;
pub mod array;
pub mod genfrac;
pub mod supsub;
pub mod text;

use crate::mathml_tree::{Node, SpecialBinary};

/// Apply the infix rewrite registered for `kind` to its two operands.
#[must_use]
pub fn rewrite_special(kind: SpecialBinary, left: Node, right: Node) -> Node {
    match kind {
        SpecialBinary::Fraction => genfrac::fraction(left, right),
        SpecialBinary::Subscript => supsub::subscript(left, right),
        SpecialBinary::Superscript => supsub::superscript(left, right),
    }
}
