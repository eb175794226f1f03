//! Markup writing for tree nodes
//!
//! The engine hands trees to the host, which owns final serialization. This
//! trait only gives a stable textual form for tests, logs and debugging.

use core::fmt;

/// A node that can write itself as markup
pub trait VirtualNode {
    /// Write markup into the provided writer.
    fn write_markup(&self, fmt: &mut dyn fmt::Write) -> fmt::Result;

    /// Convenience helper that renders the node into a [`String`].
    fn to_markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_markup(&mut out);
        out
    }
}

impl<T: VirtualNode> VirtualNode for [T] {
    fn write_markup(&self, fmt: &mut dyn fmt::Write) -> fmt::Result {
        self.iter().try_for_each(|node| node.write_markup(fmt))
    }
}
