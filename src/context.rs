//! Document-scoped state
//!
//! Everything that must not leak between documents lives in a
//! [`DocumentContext`]: the numbering settings, the equation reference table
//! and whether the numbering pass already ran. Hosts processing documents in
//! parallel give each one its own context; only the symbol table is shared.

use tracing::{debug, warn};

use crate::block::{Equation, build_block, display_math};
use crate::mathml_tree::Node;
use crate::numbering::number_document;
use crate::references::ReferenceTable;
use crate::types::{ReferenceError, Settings};

/// State for processing one document
///
/// The expected call order is: any number of [`parse_block`] calls while the
/// host assembles its tree, one [`number`] call on the finished tree, then
/// any number of [`resolve`] calls.
///
/// [`parse_block`]: DocumentContext::parse_block
/// [`number`]: DocumentContext::number
/// [`resolve`]: DocumentContext::resolve
///
/// # Examples
///
/// ```rust
/// use asciimathml::{DocumentContext, Equation, Node, NodeType, Settings};
///
/// let mut ctx = DocumentContext::new(Settings::default());
/// let block = ctx.parse_block(&[Equation::new("euler", "e^(i pi) + 1 = 0")]);
///
/// let mut doc = Node::with_children(
///     NodeType::Element("body".to_owned()),
///     vec![Node::leaf(NodeType::Heading(1), "Identities"), block],
/// );
/// ctx.number(&mut doc);
///
/// let link = ctx.resolve("euler").unwrap().unwrap();
/// assert_eq!(link.text.as_deref(), Some("(1.1)"));
/// assert!(ctx.resolve("missing").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentContext {
    /// Numbering configuration
    pub settings: Settings,
    references: ReferenceTable,
    numbered: bool,
}

impl DocumentContext {
    /// Create a context for a new document
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            references: ReferenceTable::new(),
            numbered: false,
        }
    }

    /// Forget all document state, keeping the settings.
    pub fn reset(&mut self) {
        self.references.clear();
        self.numbered = false;
    }

    /// The equation reference table
    #[must_use]
    pub const fn references(&self) -> &ReferenceTable {
        &self.references
    }

    /// Whether [`DocumentContext::number`] has run for this document
    #[must_use]
    pub const fn is_numbered(&self) -> bool {
        self.numbered
    }

    /// Build a display block and register its labels.
    ///
    /// The result is `math[display=block] > mstyle > unit`, ready to be
    /// spliced into the host document.
    pub fn parse_block(&mut self, equations: &[Equation]) -> Node {
        if self.numbered {
            warn!("block parsed after numbering; its equations stay unnumbered");
        }
        display_math(build_block(equations, &mut self.references))
    }

    /// Number the headings and equations of the finished document.
    ///
    /// Only the first call per document has an effect.
    pub fn number(&mut self, root: &mut Node) {
        if self.numbered {
            debug!("document already numbered");
            return;
        }
        number_document(root, &self.settings, &mut self.references);
        self.numbered = true;
    }

    /// Resolve a mention of `label` into a reference link.
    ///
    /// Unknown labels resolve to `Ok(None)`, leaving the mention as plain
    /// text.
    ///
    /// # Errors
    ///
    /// [`ReferenceError::NumberingPending`] if the document has not been
    /// numbered yet.
    pub fn resolve(&self, label: &str) -> Result<Option<Node>, ReferenceError> {
        if !self.numbered {
            warn!(label, "reference resolved before numbering");
            return Err(ReferenceError::NumberingPending {
                label: label.to_owned(),
            });
        }
        let link = self.references.link(label);
        if link.is_none() {
            debug!(label, "unresolved equation reference");
        }
        Ok(link)
    }
}
