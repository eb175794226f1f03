//! MathML tree node definitions
//!
//! Every stage of the engine works on [`Node`]: the tokenizer instantiates
//! symbol fragments as nodes, the parser rearranges them, the postprocessor
//! cleans them and the numbering pass walks a host document made of the same
//! nodes. Each node owns its children, so the result is always a tree.
//!
//! Parser bookkeeping lives in [`Markers`], kept apart from the public
//! attributes so it can be stripped wholesale before the tree leaves the
//! engine.

use alloc::borrow::Cow;
use core::fmt;
use core::iter;

use strum::AsRefStr;

use crate::tree::VirtualNode;
use crate::types::KeyMap;
use crate::utils::escape_into;

/// MathML namespace set on every `<math>` root.
pub const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

/// MathML node types produced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MathNodeType {
    /// `<math>` element
    Math,
    /// `<mstyle>` element
    Mstyle,
    /// `<mrow>` element
    Mrow,
    /// `<mi>` element
    Mi,
    /// `<mn>` element
    Mn,
    /// `<mo>` element
    Mo,
    /// `<mtext>` element
    Mtext,
    /// `<mspace>` element
    Mspace,
    /// `<mfrac>` element
    Mfrac,
    /// `<msqrt>` element
    Msqrt,
    /// `<mroot>` element
    Mroot,
    /// `<msub>` element
    Msub,
    /// `<msup>` element
    Msup,
    /// `<msubsup>` element
    Msubsup,
    /// `<mover>` element
    Mover,
    /// `<munder>` element
    Munder,
    /// `<munderover>` element
    Munderover,
    /// `<mtable>` element
    Mtable,
    /// `<mtr>` element
    Mtr,
    /// `<mtd>` element
    Mtd,
}

/// Semantic role of a node.
///
/// Formulas only ever contain [`NodeType::Math`] nodes. The other variants
/// let the host express the surrounding document the numbering pass walks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// A MathML element
    Math(MathNodeType),
    /// A section heading; the level is 1-based like `<h1>`..`<h6>`
    Heading(u8),
    /// A link, used for resolved equation references
    Anchor,
    /// Any other host element, by tag name
    Element(String),
}

impl NodeType {
    /// The element name used when the node is written as markup.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Math(math) => Cow::Borrowed(math.as_ref()),
            Self::Heading(level) => Cow::Owned(format!("h{level}")),
            Self::Anchor => Cow::Borrowed("a"),
            Self::Element(tag) => Cow::Borrowed(tag),
        }
    }
}

impl From<MathNodeType> for NodeType {
    fn from(math: MathNodeType) -> Self {
        Self::Math(math)
    }
}

/// Number of operands a symbol consumes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// Stands on its own
    #[default]
    Nullary,
    /// Takes one operand (`sqrt`, `hat`, `sin`)
    Unary,
    /// Takes two operands (`frac`, `root`, `stackrel`)
    Binary,
}

/// Infix operators applied by rewriting the preceding siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialBinary {
    /// `a/b`
    Fraction,
    /// `a^b`
    Superscript,
    /// `a_b`
    Subscript,
}

/// Parser-internal flags carried on a node.
///
/// None of this may reach the output; see
/// [`Node::strip_private`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Markers {
    /// Operands consumed after the symbol
    pub arity: Arity,
    /// Operands attach before the operator's own children
    pub operand_first: bool,
    /// Opens a group
    pub opening: bool,
    /// Closes a group; with `opening` this is a symmetric delimiter
    pub closing: bool,
    /// Removed from the output entirely
    pub invisible: bool,
    /// Wrapped in spacing when instantiated
    pub spaced: bool,
    /// Scripts attach under/over rather than beside
    pub underover: bool,
    /// Consumes the following input as literal text
    pub free_text: bool,
    /// Infix operator applied by postfix rewrite
    pub special: Option<SpecialBinary>,
}

impl Markers {
    /// Markers of a node with no parser bookkeeping.
    pub const NONE: Self = Self {
        arity: Arity::Nullary,
        operand_first: false,
        opening: false,
        closing: false,
        invisible: false,
        spaced: false,
        underover: false,
        free_text: false,
        special: None,
    };

    /// Whether no flag is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// General purpose tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The role of the node
    pub node_type: NodeType,
    /// Literal text content, written before the children
    pub text: Option<String>,
    /// Child nodes, in order
    pub children: Vec<Node>,
    /// Public attributes carried into the output
    pub attributes: KeyMap<String, String>,
    /// CSS classes carried into the output
    pub classes: Vec<String>,
    /// Parser bookkeeping, never emitted
    pub markers: Markers,
}

impl Node {
    /// Create an empty node of the given type
    #[must_use]
    pub fn new(node_type: impl Into<NodeType>) -> Self {
        Self {
            node_type: node_type.into(),
            text: None,
            children: Vec::new(),
            attributes: KeyMap::default(),
            classes: Vec::new(),
            markers: Markers::NONE,
        }
    }

    /// Create a leaf node holding `text`
    #[must_use]
    pub fn leaf(node_type: impl Into<NodeType>, text: impl Into<String>) -> Self {
        let mut node = Self::new(node_type);
        node.text = Some(text.into());
        node
    }

    /// Create a node with the given children
    #[must_use]
    pub fn with_children(node_type: impl Into<NodeType>, children: Vec<Self>) -> Self {
        let mut node = Self::new(node_type);
        node.children = children;
        node
    }

    /// Builder-style attribute setter
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder-style class setter
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Add a child to this node
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Set an attribute on this node
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Add a CSS class to this node
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    /// Check if the node has a specific class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The MathML type, if this is a MathML element
    #[must_use]
    pub const fn math_type(&self) -> Option<MathNodeType> {
        match self.node_type {
            NodeType::Math(math) => Some(math),
            _ => None,
        }
    }

    /// Whether this node is the given MathML element
    #[must_use]
    pub fn is(&self, math: MathNodeType) -> bool {
        self.math_type() == Some(math)
    }

    /// Whether the node's literal text equals `text`
    #[must_use]
    pub fn has_text(&self, text: &str) -> bool {
        self.text.as_deref() == Some(text)
    }

    /// A row whose first child opens a group and whose last child closes it.
    #[must_use]
    pub fn is_enclosed_group(&self) -> bool {
        self.is(MathNodeType::Mrow)
            && self.children.first().is_some_and(|c| c.markers.opening)
            && self.children.last().is_some_and(|c| c.markers.closing)
    }

    /// Drop the bracket glyphs of a group row, keeping its contents.
    ///
    /// Non-row nodes and rows without delimiter children are left as they
    /// are, so this is safe to call on any operand.
    pub fn strip_group(&mut self) {
        if !self.is(MathNodeType::Mrow) {
            return;
        }
        if self.children.first().is_some_and(|c| c.markers.opening) {
            self.children.remove(0);
        }
        if self.children.last().is_some_and(|c| c.markers.closing) {
            self.children.pop();
        }
    }

    /// [`Node::strip_group`] for owned values.
    #[must_use]
    pub fn into_ungrouped(mut self) -> Self {
        self.strip_group();
        self
    }

    /// Recursively delete every child flagged invisible.
    pub fn remove_invisible(&mut self) {
        self.children.retain(|c| !c.markers.invisible);
        for child in &mut self.children {
            child.remove_invisible();
        }
    }

    /// Recursively clear every parser-internal marker.
    pub fn strip_private(&mut self) {
        self.markers = Markers::NONE;
        for child in &mut self.children {
            child.strip_private();
        }
    }

    /// Whether this node or any descendant still carries parser markers.
    #[must_use]
    pub fn has_private(&self) -> bool {
        !self.markers.is_empty() || self.children.iter().any(Self::has_private)
    }

    /// Whether the tree under this node has more than `levels` levels.
    ///
    /// Stops descending after `levels` levels.
    #[must_use]
    pub fn taller_than(&self, levels: usize) -> bool {
        levels == 0 || self.children.iter().any(|c| c.taller_than(levels - 1))
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Concatenated text of this node and its descendants
    #[must_use]
    pub fn to_text(&self) -> String {
        self.descendants()
            .filter_map(|n| n.text.as_deref())
            .collect()
    }
}

impl VirtualNode for Node {
    fn write_markup(&self, fmt: &mut dyn fmt::Write) -> fmt::Result {
        let name = self.node_type.name();
        write!(fmt, "<{name}")?;

        if !self.classes.is_empty() {
            fmt.write_str(" class=\"")?;
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    fmt.write_char(' ')?;
                }
                escape_into(fmt, class)?;
            }
            fmt.write_char('"')?;
        }

        let mut attributes: Vec<_> = self.attributes.iter().collect();
        attributes.sort_unstable();
        for (key, value) in attributes {
            write!(fmt, " {key}=\"")?;
            escape_into(fmt, value)?;
            fmt.write_char('"')?;
        }

        if self.text.is_none() && self.children.is_empty() {
            return fmt.write_str("/>");
        }
        fmt.write_char('>')?;

        if let Some(text) = &self.text {
            escape_into(fmt, text)?;
        }
        for child in &self.children {
            child.write_markup(fmt)?;
        }

        write!(fmt, "</{name}>")
    }
}
