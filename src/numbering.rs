//! Heading and equation numbering
//!
//! A single depth-first pass over the finished document:
//!
//! - a heading at level index `d` (`h1` is 0) within the configured maximum
//!   steps counter `d`, zeroes every deeper counter and the equation counter,
//!   and gets the dot-joined nonzero counters up to `d` prepended to its text;
//! - a registered equation row that is still pending steps the equation
//!   counter, receives the section prefix plus that count as its number, and
//!   has its number cell rewritten to `(number)`.
//!
//! Headings deeper than the maximum are left alone. With numbering disabled
//! the pass changes nothing.

use core::iter;

use tracing::{debug, trace};

use crate::block::{EQNUM_CLASS, EQUATION_CLASS};
use crate::mathml_tree::{MathNodeType, Node, NodeType};
use crate::references::{EQUATION_ID_PREFIX, ReferenceTable};
use crate::types::Settings;

/// Section and equation counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counters {
    sections: Vec<u32>,
    equation: u32,
}

fn join(numbers: impl Iterator<Item = u32>) -> String {
    numbers
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

impl Counters {
    /// Counters for levels `0..=max_level`, all zero
    #[must_use]
    pub fn new(max_level: usize) -> Self {
        Self {
            sections: vec![0; max_level + 1],
            equation: 0,
        }
    }

    /// The deepest level index tracked
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.sections.len().saturating_sub(1)
    }

    /// Enter a new section at `level`, clamped to the deepest tracked level.
    pub fn step_section(&mut self, level: usize) {
        let level = level.min(self.max_level());
        if let Some((current, deeper)) = self.sections[level..].split_first_mut() {
            *current += 1;
            deeper.fill(0);
        }
        self.equation = 0;
    }

    /// Count one more equation in the current section.
    pub fn step_equation(&mut self) {
        self.equation += 1;
    }

    /// Number of the current section at `level`, e.g. `2.1`.
    #[must_use]
    pub fn section_number(&self, level: usize) -> String {
        let level = level.min(self.max_level());
        join(self.sections[..=level].iter().copied().filter(|&n| n != 0))
    }

    /// Number of the current equation, e.g. `2.1.3`.
    ///
    /// Before any section has been entered this is the bare count.
    #[must_use]
    pub fn equation_number(&self) -> String {
        join(
            self.sections
                .iter()
                .copied()
                .filter(|&n| n != 0)
                .chain(iter::once(self.equation)),
        )
    }
}

/// Level index of a heading node: `h1` is 0.
fn heading_level(node: &Node) -> Option<usize> {
    match &node.node_type {
        NodeType::Heading(level @ 1..=6) => Some(usize::from(*level - 1)),
        NodeType::Element(tag) => {
            let digit = tag.strip_prefix(['h', 'H'])?;
            match digit.parse::<usize>() {
                Ok(level @ 1..=6) if digit.len() == 1 => Some(level - 1),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Label of an equation row, if `node` is one.
fn equation_label(node: &Node) -> Option<&str> {
    if !node.is(MathNodeType::Mtr) || !node.has_class(EQUATION_CLASS) {
        return None;
    }
    node.attributes.get("id")?.strip_prefix(EQUATION_ID_PREFIX)
}

/// Single-use numbering pass over one document
#[derive(Debug)]
pub struct Numberer<'a> {
    counters: Counters,
    header_num: bool,
    references: &'a mut ReferenceTable,
}

impl<'a> Numberer<'a> {
    /// Prepare a pass, or `None` when `settings` disable numbering.
    #[must_use]
    pub fn new(settings: &Settings, references: &'a mut ReferenceTable) -> Option<Self> {
        let max_level = settings.max_level()?;
        Some(Self {
            counters: Counters::new(max_level),
            header_num: settings.header_num,
            references,
        })
    }

    /// Number every heading and pending equation under `root`.
    pub fn run(mut self, root: &mut Node) {
        self.visit(root);
    }

    fn visit(&mut self, node: &mut Node) {
        if let Some(level) = heading_level(node)
            && level <= self.counters.max_level()
        {
            self.number_heading(node, level);
        }

        if let Some(label) = equation_label(node)
            && self.references.is_pending(label)
        {
            let label = label.to_owned();
            self.number_equation(node, &label);
        }

        for child in &mut node.children {
            self.visit(child);
        }
    }

    fn number_heading(&mut self, node: &mut Node, level: usize) {
        self.counters.step_section(level);
        let number = self.counters.section_number(level);
        trace!(level, %number, "numbered heading");

        if self.header_num {
            node.text = Some(match node.text.take() {
                Some(text) => format!("{number} {text}"),
                None => number,
            });
        }
    }

    fn number_equation(&mut self, row: &mut Node, label: &str) {
        self.counters.step_equation();
        let number = self.counters.equation_number();
        trace!(label, %number, "numbered equation");

        let cell_text = format!("({number})");
        if let Err(err) = self.references.assign(label, number) {
            debug!(%err, "equation number not recorded");
            return;
        }
        if let Some(cell) = find_eqnum_mut(row) {
            cell.text = Some(cell_text);
        }
    }
}

/// First `mtext.eqnum` under `node`, in document order.
fn find_eqnum_mut(node: &mut Node) -> Option<&mut Node> {
    if node.is(MathNodeType::Mtext) && node.has_class(EQNUM_CLASS) {
        return Some(node);
    }
    node.children.iter_mut().find_map(find_eqnum_mut)
}

/// Run the numbering pass over `root` with the given settings.
///
/// Returns `false` without touching anything when numbering is disabled.
pub fn number_document(root: &mut Node, settings: &Settings, references: &mut ReferenceTable) -> bool {
    match Numberer::new(settings, references) {
        Some(numberer) => {
            numberer.run(root);
            true
        }
        None => {
            debug!(level_num = settings.level_num, "numbering disabled");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Equation, build_block};

    fn heading(level: u8, text: &str) -> Node {
        Node::leaf(NodeType::Heading(level), text)
    }

    fn document(children: Vec<Node>) -> Node {
        Node::with_children(NodeType::Element("body".to_owned()), children)
    }

    fn heading_texts(root: &Node) -> Vec<String> {
        root.descendants()
            .filter(|n| heading_level(n).is_some())
            .filter_map(|n| n.text.clone())
            .collect()
    }

    #[test]
    fn test_counters() {
        let mut counters = Counters::new(1);
        counters.step_section(0);
        counters.step_section(1);
        counters.step_section(1);
        assert_eq!(counters.section_number(1), "1.2");
        counters.step_section(0);
        assert_eq!(counters.section_number(0), "2");
        assert_eq!(counters.section_number(1), "2");
        counters.step_equation();
        assert_eq!(counters.equation_number(), "2.1");
    }

    #[test]
    fn test_deeper_counters_reset() {
        let mut counters = Counters::new(3);
        counters.step_section(0);
        counters.step_section(1);
        counters.step_section(2);
        counters.step_section(3);
        counters.step_section(1);
        assert_eq!(counters.section_number(3), "1.2");
    }

    #[test]
    fn test_equation_number_without_sections() {
        let mut counters = Counters::new(1);
        counters.step_equation();
        counters.step_equation();
        assert_eq!(counters.equation_number(), "2");
    }

    #[test]
    fn test_heading_sequence() {
        let mut root = document(vec![
            heading(1, "A"),
            heading(2, "B"),
            heading(2, "C"),
            heading(1, "D"),
            heading(2, "E"),
        ]);
        let mut refs = ReferenceTable::new();
        assert!(number_document(&mut root, &Settings::default(), &mut refs));
        assert_eq!(heading_texts(&root), ["1 A", "1.1 B", "1.2 C", "2 D", "2.1 E"]);
    }

    #[test]
    fn test_deep_headings_are_ignored() {
        let mut root = document(vec![heading(1, "A"), heading(3, "deep")]);
        let mut refs = ReferenceTable::new();
        number_document(&mut root, &Settings::default(), &mut refs);
        assert_eq!(heading_texts(&root), ["1 A", "deep"]);
    }

    #[test]
    fn test_element_headings() {
        let mut root = document(vec![Node::leaf(NodeType::Element("H1".to_owned()), "Intro")]);
        let mut refs = ReferenceTable::new();
        number_document(&mut root, &Settings::default(), &mut refs);
        assert_eq!(root.children[0].text.as_deref(), Some("1 Intro"));
        assert_eq!(heading_level(&Node::new(NodeType::Element("h10".to_owned()))), None);
        assert_eq!(heading_level(&Node::new(NodeType::Element("hr".to_owned()))), None);
    }

    #[test]
    fn test_equations_reset_per_section() {
        let mut refs = ReferenceTable::new();
        let first = build_block(&[Equation::new("a", "x"), Equation::new("b", "y")], &mut refs);
        let second = build_block(&[Equation::new("c", "z")], &mut refs);
        let mut root = document(vec![
            heading(1, "One"),
            first,
            heading(2, "Sub"),
            second,
        ]);

        number_document(&mut root, &Settings::default(), &mut refs);

        assert_eq!(refs.number("a"), Some("1.1"));
        assert_eq!(refs.number("b"), Some("1.2"));
        assert_eq!(refs.number("c"), Some("1.1.1"));
        assert_eq!(root.children[3].children[0].children[1].to_text(), "(1.1.1)");
    }

    #[test]
    fn test_header_num_off_keeps_text_but_counts() {
        let mut refs = ReferenceTable::new();
        let block = build_block(&[Equation::new("a", "x")], &mut refs);
        let mut root = document(vec![heading(1, "A"), heading(1, "B"), block]);
        let settings = Settings::builder().header_num(false).build();

        number_document(&mut root, &settings, &mut refs);
        assert_eq!(heading_texts(&root), ["A", "B"]);
        assert_eq!(refs.number("a"), Some("2.1"));
    }

    #[test]
    fn test_disabled_numbering_changes_nothing() {
        let mut refs = ReferenceTable::new();
        let block = build_block(&[Equation::new("a", "x")], &mut refs);
        let mut root = document(vec![heading(1, "A"), block]);
        let before = root.clone();

        let settings = Settings::builder().level_num(-1).build();
        assert!(!number_document(&mut root, &settings, &mut refs));
        assert_eq!(root, before);
        assert!(refs.is_pending("a"));
    }

    #[test]
    fn test_foreign_equation_rows_are_skipped() {
        let mut refs = ReferenceTable::new();
        let row = Node::new(MathNodeType::Mtr)
            .attribute("id", "eq:ghost")
            .class(EQUATION_CLASS);
        let mut root = document(vec![row]);
        number_document(&mut root, &Settings::default(), &mut refs);
        assert!(refs.is_empty());
    }
}
