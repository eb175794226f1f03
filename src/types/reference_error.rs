//! Error handling for the equation reference table
//!
//! Translation itself never fails: malformed formulas degrade to placeholder
//! glyphs. The only operations that can be refused are the ones touching the
//! document-scoped [`ReferenceTable`](crate::references::ReferenceTable),
//! and even those are absorbed by the block builder and the numbering pass.
//! Hosts only see these errors when they call the table directly.

use thiserror::Error;

/// Describes why an operation on the reference table was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The empty label means "unlabeled" and can never be registered.
    #[error("cannot register an empty equation label")]
    EmptyLabel,
    /// Labels are unique within one document.
    #[error("equation label '{label}' is already registered")]
    DuplicateLabel {
        /// The label that was registered twice
        label: String,
    },
    /// A number was assigned to a label nobody registered.
    #[error("equation label '{label}' is not registered")]
    UnknownLabel {
        /// The unknown label
        label: String,
    },
    /// Numbers are final once the numbering pass has written them.
    #[error("equation label '{label}' has already been numbered")]
    AlreadyNumbered {
        /// The label whose number is final
        label: String,
    },
    /// Resolution read the table before the numbering pass populated it.
    #[error("cannot resolve reference to '{label}' before the document is numbered")]
    NumberingPending {
        /// The label the host tried to resolve
        label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_label() {
        let err = ReferenceError::DuplicateLabel {
            label: "euler".to_owned(),
        };
        assert_eq!(err.to_string(), "equation label 'euler' is already registered");

        let err = ReferenceError::NumberingPending {
            label: "e1".to_owned(),
        };
        assert!(err.to_string().contains("'e1'"));
    }
}
