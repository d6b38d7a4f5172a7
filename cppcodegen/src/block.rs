//! Braced blocks: bare code blocks, definitions and namespaces.

use std::fmt;

use tracing::trace;

use crate::{Indent, NodeKind, Render, Snippet};

const BLOCK_OPEN: &str = " {\n";
const BLOCK_CLOSE: &str = "}\n";

/// A header, a sequence of child snippets one level deeper, and a footer.
///
/// Every append creates a new child [`Snippet`]; nested nodes are flattened
/// into the child's lines when they are appended.
///
/// # Example
///
/// ```
/// use cppcodegen::{Block, Render};
///
/// let main = Block::definition("int main()").with_line("return 0;");
///
/// assert_eq!(main.render(), "int main() {\n  return 0;\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    indent: Indent,
    header: String,
    footer: String,
    kind: NodeKind,
    snippets: Vec<Snippet>,
}

impl Block {
    fn new(kind: NodeKind, header: String) -> Self {
        Self {
            indent: Indent::default(),
            header,
            footer: BLOCK_CLOSE.to_string(),
            kind,
            snippets: Vec::new(),
        }
    }

    /// A bare `{ ... }` scope.
    pub fn code_block() -> Self {
        Self::new(NodeKind::CodeBlock, "{\n".to_string())
    }

    /// `declaration { ... }`, e.g. a function or method body.
    pub fn definition(declaration: impl AsRef<str>) -> Self {
        Self::new(
            NodeKind::Definition,
            format!("{}{BLOCK_OPEN}", declaration.as_ref()),
        )
    }

    /// `namespace name { ... }`.
    pub fn namespace(name: impl AsRef<str>) -> Self {
        Self::new(
            NodeKind::Namespace,
            format!("namespace {}{BLOCK_OPEN}", name.as_ref()),
        )
    }

    /// Render at `indent` instead of the default.
    ///
    /// Children already appended are moved to one level below `indent`.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        for snippet in &mut self.snippets {
            snippet.set_indent(indent.child());
        }
        self
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

    /// Child snippets in append order.
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    fn child(&self) -> Snippet {
        Snippet::line().with_indent(self.indent.child())
    }

    // =========================================================================
    // Mutable API
    // =========================================================================

    /// Append `text` as a new child line.
    pub fn push_line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let mut snippet = self.child();
        snippet.push_line(text);
        self.snippets.push(snippet);
        self
    }

    /// Append each item as its own child, in order.
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

    /// Append the current output of `node` as a new child.
    pub fn push_node(&mut self, node: &impl Render) -> &mut Self {
        let mut snippet = self.child();
        snippet.push_node(node);
        self.snippets.push(snippet);
        self
    }

    /// Move this block and all of its children `levels` deeper.
    pub fn increment_indent(&mut self, levels: usize) -> &mut Self {
        self.indent.increment(levels);
        for snippet in &mut self.snippets {
            snippet.increment_indent(levels);
        }
        trace!(
            kind = ?self.kind,
            levels,
            children = self.snippets.len(),
            "propagated block indent"
        );
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

impl Render for Block {
    fn render(&self) -> String {
        let prefix = self.indent.indenting();
        let mut out = String::new();
        out.push_str(&prefix);
        out.push_str(&self.header);
        for snippet in &self.snippets {
            out.push_str(&snippet.render());
        }
        out.push_str(&prefix);
        out.push_str(&self.footer);
        out
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
