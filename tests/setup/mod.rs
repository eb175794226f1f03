#![allow(dead_code)]

use std::panic::{UnwindSafe, catch_unwind};

use asciimathml::{
    DocumentContext, MathNodeType, Node, NodeType, ReferenceError, Settings, VirtualNode as _,
    parse_expression, parse_line,
};
use thiserror::Error;

/// Why an expectation did not hold
#[derive(Debug, Error)]
pub enum TestError {
    #[error("{code} at {file}:{line}: expected {expected}, got {actual}")]
    Mismatch {
        code: &'static str,
        file: &'static str,
        line: u32,
        expected: String,
        actual: String,
    },
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

pub struct TestExpr {
    pub expr: String,
    pub file: &'static str,
    pub line: u32,
    pub code: &'static str,
}

impl TestExpr {
    fn mismatch(&self, expected: impl ToString, actual: impl ToString) -> TestError {
        TestError::Mismatch {
            code: self.code,
            file: self.file,
            line: self.line,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    fn check(&self, ok: bool, expected: impl ToString, actual: impl ToString) -> Result<(), TestError> {
        if ok {
            Ok(())
        } else {
            Err(self.mismatch(expected, actual))
        }
    }

    /// The expression parses to the same cleaned nodes as `other`
    pub fn to_parse_like(self, other: &str) -> Result<(), TestError> {
        let ours = parse_expression(&self.expr);
        let theirs = parse_expression(other);
        self.check(ours == theirs, other.to_markup_line(), ours.as_slice().to_markup())
    }

    /// The expression, as an `mrow`, writes exactly `markup`
    pub fn to_build(self, markup: &str) -> Result<(), TestError> {
        let actual = parse_line(&self.expr).to_markup();
        self.check(actual == markup, markup, actual)
    }

    /// Some node of the parsed line is a `math` element
    pub fn to_contain(self, math: MathNodeType) -> Result<(), TestError> {
        let line = parse_line(&self.expr);
        self.check(
            line.descendants().any(|n| n.is(math)),
            format!("a <{}>", math.as_ref()),
            line.to_markup(),
        )
    }

    /// No node of the parsed line is a `math` element
    pub fn not_to_contain(self, math: MathNodeType) -> Result<(), TestError> {
        let line = parse_line(&self.expr);
        self.check(
            line.descendants().all(|n| !n.is(math)),
            format!("no <{}>", math.as_ref()),
            line.to_markup(),
        )
    }

    /// The parsed line's text content equals `text`
    pub fn to_read(self, text: &str) -> Result<(), TestError> {
        let actual = parse_line(&self.expr).to_text();
        self.check(actual == text, text, actual)
    }
}

trait MarkupLine {
    fn to_markup_line(&self) -> String;
}

impl MarkupLine for str {
    fn to_markup_line(&self) -> String {
        parse_line(self).to_markup()
    }
}

pub fn expect_impl(expr: &str, file: &'static str, line: u32, code: &'static str) -> TestExpr {
    TestExpr {
        expr: expr.to_owned(),
        file,
        line,
        code,
    }
}

#[macro_export]
macro_rules! expect {
    ($e:expr) => {
        $crate::expect_impl($e, file!(), line!(), stringify!($e))
    };
}

pub fn it<F>(desc: &str, test_fn: F)
where
    F: FnOnce() -> Result<(), TestError> + UnwindSafe,
{
    match catch_unwind(test_fn) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test '{desc}' failed with Result::Err: {e}"),
        Err(panic_payload) => {
            let msg = if let Some(s) = panic_payload.downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_owned()
            };
            panic!("Test '{desc}' panicked: {msg}");
        }
    }
}

/// Document helpers
pub fn body(children: Vec<Node>) -> Node {
    Node::with_children(NodeType::Element("body".to_owned()), children)
}

pub fn heading(level: u8, text: &str) -> Node {
    Node::leaf(NodeType::Heading(level), text)
}

pub fn paragraph(text: &str) -> Node {
    Node::leaf(NodeType::Element("p".to_owned()), text)
}

pub fn heading_texts(root: &Node) -> Vec<String> {
    root.descendants()
        .filter(|n| matches!(n.node_type, NodeType::Heading(_)))
        .filter_map(|n| n.text.clone())
        .collect()
}

pub fn context(level_num: i32) -> DocumentContext {
    DocumentContext::new(Settings::builder().level_num(level_num).build())
}
