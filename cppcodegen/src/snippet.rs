//! Leaf nodes holding final text lines.

use std::fmt;

use crate::{Indent, NodeKind, Render};

/// An ordered list of text lines rendered at one shared indent.
///
/// Every line is stored in its final form: text appended with
/// [`push_line`](Self::push_line) is wrapped in the snippet's header and footer
/// right away, so rendering only has to add the indent prefix and a newline.
///
/// # Example
///
/// ```
/// use cppcodegen::{Render, Snippet};
///
/// let includes = Snippet::system_include()
///     .with_line("string")
///     .with_line("vector");
///
/// assert_eq!(includes.render(), "#include <string>\n#include <vector>\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    indent: Indent,
    header: String,
    footer: String,
    kind: NodeKind,
    lines: Vec<String>,
}

impl Snippet {
    fn new(kind: NodeKind, header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            indent: Indent::default(),
            header: header.into(),
            footer: footer.into(),
            kind,
            lines: Vec::new(),
        }
    }

    /// Plain lines, stored as given.
    pub fn line() -> Self {
        Self::new(NodeKind::Line, "", "")
    }

    /// `#include <...>` lines.
    pub fn system_include() -> Self {
        Self::new(NodeKind::SystemInclude, "#include <", ">")
    }

    /// `#include "..."` lines, each prefixed with `base_dir`.
    ///
    /// `base_dir` is pasted in front of every path verbatim, so it should end
    /// with a separator (`"core/"`) unless it is empty.
    pub fn local_include(base_dir: impl AsRef<str>) -> Self {
        Self::new(
            NodeKind::LocalInclude,
            format!("#include \"{}", base_dir.as_ref()),
            "\"",
        )
    }

    /// Render at `indent` instead of the default.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.set_indent(indent);
        self
    }

    pub(crate) fn set_indent(&mut self, indent: Indent) {
        self.indent = indent;
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn indent(&self) -> &Indent {
        &self.indent
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// The stored lines, header and footer already applied.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // =========================================================================
    // Mutable API
    // =========================================================================

    /// Append `header + text + footer` as one line.
    ///
    /// `text` is not inspected. Embedded newlines are kept as they are and
    /// end up between the header and the footer.
    pub fn push_line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let mut line =
            String::with_capacity(self.header.len() + text.as_ref().len() + self.footer.len());
        line.push_str(&self.header);
        line.push_str(text.as_ref());
        line.push_str(&self.footer);
        self.lines.push(line);
        self
    }

    /// Append each item with [`push_line`](Self::push_line), in order.
    pub fn push_lines<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.push_line(line);
        }
        self
    }

    /// Render `node` and append each of its output lines as-is.
    ///
    /// Header and footer are not applied to absorbed lines. The node is
    /// rendered now; later changes to it do not reach this snippet.
    pub fn push_node(&mut self, node: &impl Render) -> &mut Self {
        let rendered = node.render();
        self.lines
            .extend(rendered.split_terminator('\n').map(str::to_string));
        self
    }

    /// Move this snippet `levels` deeper.
    pub fn increment_indent(&mut self, levels: usize) -> &mut Self {
        self.indent.increment(levels);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn with_line(mut self, text: impl AsRef<str>) -> Self {
        self.push_line(text);
        self
    }

    pub fn with_lines<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.push_lines(lines);
        self
    }

    pub fn with_node(mut self, node: &impl Render) -> Self {
        self.push_node(node);
        self
    }
}

impl Render for Snippet {
    fn render(&self) -> String {
        let prefix = self.indent.indenting();
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&prefix);
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(Snippet::line().render(), "");
        assert_eq!(
            Snippet::system_include()
                .with_indent(Indent::new(3, 2))
                .render(),
            ""
        );
    }

    #[test]
    fn test_plain_line() {
        let snippet = Snippet::line().with_line("int x = 0;");
        assert_eq!(snippet.kind(), NodeKind::Line);
        assert_eq!(snippet.render(), "int x = 0;\n");
    }

    #[test]
    fn test_header_and_footer_per_line() {
        let snippet = Snippet::system_include()
            .with_indent(Indent::new(1, 2))
            .with_line("x");
        assert_eq!(
            snippet.render(),
            format!("{}#include <x>\n", snippet.indent().indenting())
        );
        assert_eq!(snippet.lines(), ["#include <x>"]);
    }

    #[test]
    fn test_local_include() {
        let snippet = Snippet::local_include("core/").with_lines(["a.h", "b.h"]);
        assert_eq!(snippet.kind(), NodeKind::LocalInclude);
        assert_eq!(
            snippet.render(),
            "#include \"core/a.h\"\n#include \"core/b.h\"\n"
        );
    }

    #[test]
    fn test_push_lines_keeps_order() {
        let mut snippet = Snippet::line();
        snippet.push_lines(vec!["a".to_string(), "b".to_string()]);
        snippet.push_line("c");
        assert_eq!(snippet.lines(), ["a", "b", "c"]);
        snippet.push_lines(Vec::<String>::new());
        assert_eq!(snippet.lines().len(), 3);
    }

    #[test]
    fn test_push_node_skips_header_and_footer() {
        let inner = Snippet::line().with_lines(["one", "", "two"]);
        let outer = Snippet::system_include()
            .with_indent(Indent::new(1, 2))
            .with_node(&inner);
        assert_eq!(outer.lines(), ["one", "", "two"]);
        assert_eq!(outer.render(), "  one\n  \n  two\n");
    }

    #[test]
    fn test_push_node_snapshots_output() {
        let mut inner = Snippet::line().with_line("x");
        let outer = Snippet::line().with_node(&inner);
        inner.push_line("y");
        inner.increment_indent(2);
        assert_eq!(outer.render(), "x\n");
    }

    #[test]
    fn test_increment_indent() {
        let mut snippet = Snippet::line().with_lines(["a", "b"]);
        snippet.increment_indent(1).increment_indent(1);
        assert_eq!(snippet.indent().level(), 2);
        assert_eq!(snippet.render(), "    a\n    b\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let snippet = Snippet::line().with_line("return 0;");
        assert_eq!(snippet.render(), snippet.render());
        assert_eq!(snippet.to_string(), snippet.render());
    }

    #[test]
    fn test_embedded_newline_is_stored_verbatim() {
        let snippet = Snippet::system_include().with_line("a\nb");
        assert_eq!(snippet.lines(), ["#include <a\nb>"]);
    }
}
