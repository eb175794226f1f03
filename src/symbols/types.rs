use crate::mathml_tree::{Arity, Markers, MathNodeType, Node, SpecialBinary};

/// Shape of the tree fragment a symbol produces.
///
/// Templates are plain data; [`SymbolDef::instantiate`] builds a fresh node
/// from them on every use, so nothing the parser does to a fragment can leak
/// back into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// A single element with literal text, e.g. `<mi>α</mi>`
    Leaf(MathNodeType, &'static str),
    /// A named function, `<mrow><mo>sin</mo></mrow>`, awaiting its argument
    Function(&'static str),
    /// An accent glyph under a script element, e.g. `<mover><mo>^</mo></mover>`
    Accent(MathNodeType, &'static str),
    /// An empty layout element such as `<msqrt/>`
    Empty(MathNodeType),
}

/// Symbol table entry
///
/// Entries are built with the `const` constructors below so the whole table
/// can live in a static map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDef {
    /// The fragment to instantiate
    pub template: Template,
    /// Parser flags copied onto the instantiated node
    pub markers: Markers,
}

impl SymbolDef {
    const fn from_template(template: Template) -> Self {
        Self {
            template,
            markers: Markers::NONE,
        }
    }

    /// Identifier, `<mi>`
    #[must_use]
    pub const fn mi(text: &'static str) -> Self {
        Self::from_template(Template::Leaf(MathNodeType::Mi, text))
    }

    /// Operator, `<mo>`
    #[must_use]
    pub const fn mo(text: &'static str) -> Self {
        Self::from_template(Template::Leaf(MathNodeType::Mo, text))
    }

    /// Text, `<mtext>`
    #[must_use]
    pub const fn mtext(text: &'static str) -> Self {
        Self::from_template(Template::Leaf(MathNodeType::Mtext, text))
    }

    /// Named function applied to one operand
    #[must_use]
    pub const fn function(name: &'static str) -> Self {
        Self::from_template(Template::Function(name)).unary()
    }

    /// Accent placed over its operand
    #[must_use]
    pub const fn over_accent(glyph: &'static str) -> Self {
        Self::from_template(Template::Accent(MathNodeType::Mover, glyph))
            .unary()
            .operand_first()
    }

    /// Accent placed under its operand
    #[must_use]
    pub const fn under_accent(glyph: &'static str) -> Self {
        Self::from_template(Template::Accent(MathNodeType::Munder, glyph))
            .unary()
            .operand_first()
    }

    /// Empty layout element
    #[must_use]
    pub const fn layout(math: MathNodeType) -> Self {
        Self::from_template(Template::Empty(math))
    }

    /// Free text reader, `text(...)`
    #[must_use]
    pub const fn free_text() -> Self {
        let def = Self::from_template(Template::Empty(MathNodeType::Mtext)).unary();
        Self {
            markers: Markers {
                free_text: true,
                ..def.markers
            },
            ..def
        }
    }

    /// Consume one operand
    #[must_use]
    pub const fn unary(self) -> Self {
        self.with_arity(Arity::Unary)
    }

    /// Consume two operands
    #[must_use]
    pub const fn binary(self) -> Self {
        self.with_arity(Arity::Binary)
    }

    const fn with_arity(self, arity: Arity) -> Self {
        Self {
            markers: Markers {
                arity,
                ..self.markers
            },
            ..self
        }
    }

    /// Operands attach ahead of the operator's own children
    #[must_use]
    pub const fn operand_first(self) -> Self {
        Self {
            markers: Markers {
                operand_first: true,
                ..self.markers
            },
            ..self
        }
    }

    /// Opens a group
    #[must_use]
    pub const fn opening(self) -> Self {
        Self {
            markers: Markers {
                opening: true,
                ..self.markers
            },
            ..self
        }
    }

    /// Closes a group
    #[must_use]
    pub const fn closing(self) -> Self {
        Self {
            markers: Markers {
                closing: true,
                ..self.markers
            },
            ..self
        }
    }

    /// Dropped from the output
    #[must_use]
    pub const fn invisible(self) -> Self {
        Self {
            markers: Markers {
                invisible: true,
                ..self.markers
            },
            ..self
        }
    }

    /// Surrounded by spacing
    #[must_use]
    pub const fn spaced(self) -> Self {
        Self {
            markers: Markers {
                spaced: true,
                ..self.markers
            },
            ..self
        }
    }

    /// Scripts go under and over
    #[must_use]
    pub const fn underover(self) -> Self {
        Self {
            markers: Markers {
                underover: true,
                ..self.markers
            },
            ..self
        }
    }

    /// Applied as an infix rewrite
    #[must_use]
    pub const fn special(self, kind: SpecialBinary) -> Self {
        Self {
            markers: Markers {
                special: Some(kind),
                ..self.markers
            },
            ..self
        }
    }

    /// Build a fresh node for this symbol.
    ///
    /// Spaced symbols come back wrapped in a row with an `1ex` space on each
    /// side.
    #[must_use]
    pub fn instantiate(&self) -> Node {
        let mut node = match self.template {
            Template::Leaf(math, text) => Node::leaf(math, text),
            Template::Function(name) => {
                Node::with_children(MathNodeType::Mrow, vec![Node::leaf(MathNodeType::Mo, name)])
            }
            Template::Accent(math, glyph) => {
                Node::with_children(math, vec![Node::leaf(MathNodeType::Mo, glyph)])
            }
            Template::Empty(math) => Node::new(math),
        };
        node.markers = self.markers;

        if self.markers.spaced {
            Node::with_children(MathNodeType::Mrow, vec![space(), node, space()])
        } else {
            node
        }
    }
}

fn space() -> Node {
    Node::new(MathNodeType::Mspace).attribute("width", "1ex")
}
