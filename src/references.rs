//! Equation reference table
//!
//! Labels are registered while block units are built, each receiving the next
//! registration ordinal and no number yet. The numbering pass then assigns
//! every pending entry its final number exactly once, after which the entry
//! is frozen and reference mentions may be resolved against it.

use crate::mathml_tree::{Node, NodeType};
use crate::types::{KeyMap, ReferenceError};

/// Prefix of the element id derived from an equation label
pub const EQUATION_ID_PREFIX: &str = "eq:";

/// Class set on resolved reference links
pub const EQREF_CLASS: &str = "eqref";

/// Build the element id for `label`, e.g. `eq:euler`.
#[must_use]
pub fn equation_id(label: &str) -> String {
    format!("{EQUATION_ID_PREFIX}{label}")
}

/// One registered label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// 1-based registration order within the document
    pub ordinal: usize,
    /// Final number, set once by the numbering pass
    pub number: Option<String>,
}

impl Reference {
    /// The number to display: the assigned one, or the ordinal while none has
    /// been assigned.
    #[must_use]
    pub fn display_number(&self) -> String {
        self.number
            .clone()
            .unwrap_or_else(|| self.ordinal.to_string())
    }
}

/// Document-scoped map from equation label to its number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTable {
    entries: KeyMap<String, Reference>,
}

impl ReferenceTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no label has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `label` and return its ordinal.
    ///
    /// # Errors
    ///
    /// [`ReferenceError::EmptyLabel`] for the empty label and
    /// [`ReferenceError::DuplicateLabel`] when the label is already taken; the
    /// table is left unchanged in both cases.
    pub fn register(&mut self, label: &str) -> Result<usize, ReferenceError> {
        if label.is_empty() {
            return Err(ReferenceError::EmptyLabel);
        }
        if self.entries.contains_key(label) {
            return Err(ReferenceError::DuplicateLabel {
                label: label.to_owned(),
            });
        }
        let ordinal = self.entries.len() + 1;
        self.entries.insert(
            label.to_owned(),
            Reference {
                ordinal,
                number: None,
            },
        );
        Ok(ordinal)
    }

    /// Whether `label` is registered and still waiting for its number
    #[must_use]
    pub fn is_pending(&self, label: &str) -> bool {
        self.entries
            .get(label)
            .is_some_and(|entry| entry.number.is_none())
    }

    /// Set the final number of `label`.
    ///
    /// # Errors
    ///
    /// [`ReferenceError::UnknownLabel`] if the label was never registered and
    /// [`ReferenceError::AlreadyNumbered`] if it already has a number.
    pub fn assign(&mut self, label: &str, number: String) -> Result<(), ReferenceError> {
        let entry = self
            .entries
            .get_mut(label)
            .ok_or_else(|| ReferenceError::UnknownLabel {
                label: label.to_owned(),
            })?;
        if entry.number.is_some() {
            return Err(ReferenceError::AlreadyNumbered {
                label: label.to_owned(),
            });
        }
        entry.number = Some(number);
        Ok(())
    }

    /// Look up a registered label
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Reference> {
        self.entries.get(label)
    }

    /// The assigned number of `label`, if any
    #[must_use]
    pub fn number(&self, label: &str) -> Option<&str> {
        self.get(label)?.number.as_deref()
    }

    /// Build the link for a mention of `label`, or `None` for an unknown
    /// label.
    ///
    /// The link is `a[href="#eq:label", class="eqref"]` with the
    /// parenthesized display number as text.
    #[must_use]
    pub fn link(&self, label: &str) -> Option<Node> {
        let entry = self.get(label)?;
        let mut anchor = Node::leaf(NodeType::Anchor, format!("({})", entry.display_number()))
            .attribute("href", format!("#{}", equation_id(label)));
        anchor.add_class(EQREF_CLASS);
        Some(anchor)
    }

    /// Forget every label
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
