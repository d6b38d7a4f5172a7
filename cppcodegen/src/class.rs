//! Class bodies with members bucketed by access specifier.

use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::{AccessSpecifier, Indent, NodeKind, Render, Snippet};

const CLASS_OPEN: &str = " {\n";
const CLASS_CLOSE: &str = "};\n";

/// A C++ class with public, protected and private member sections.
///
/// Sections are always rendered public, then protected, then private, no
/// matter in which order members were added; empty sections are left out.
/// Within a section members keep their append order.
///
/// # Example
///
/// ```
/// use cppcodegen::{AccessSpecifier, Class, Render};
///
/// let foo = Class::new("Foo")
///     .with_line("int y;", AccessSpecifier::Private)
///     .with_line("int x;", AccessSpecifier::Public);
///
/// assert_eq!(
///     foo.render(),
///     "class Foo {\n public:\n  int x;\n private:\n  int y;\n};\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    indent: Indent,
    name: String,
    members: IndexMap<AccessSpecifier, Vec<Snippet>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            indent: Indent::default(),
            name: name.into(),
            members: AccessSpecifier::ALL
                .into_iter()
                .map(|access| (access, Vec::new()))
                .collect(),
        }
    }

    /// Render at `indent` instead of the default.
    ///
    /// Members already appended are moved to one level below `indent`.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        for snippet in self.members.values_mut().flatten() {
            snippet.set_indent(indent.child());
        }
        self
    }

    /// Classes share the code block kind.
    pub fn kind(&self) -> NodeKind {
        NodeKind::CodeBlock
    }

    pub fn indent(&self) -> &Indent {
        &self.indent
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> String {
        format!("class {}{CLASS_OPEN}", self.name)
    }

    pub fn footer(&self) -> &str {
        CLASS_CLOSE
    }

    /// Members of one section in append order.
    pub fn members(&self, access: AccessSpecifier) -> &[Snippet] {
        self.members
            .get(&access)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.members.values().all(Vec::is_empty)
    }

    fn push_snippet(&mut self, snippet: Snippet, access: AccessSpecifier) {
        self.members.entry(access).or_default().push(snippet);
    }

    fn child(&self) -> Snippet {
        Snippet::line().with_indent(self.indent.child())
    }

    // =========================================================================
    // Mutable API
    // =========================================================================

    /// Append `text` as a new member of the default (private) section.
    pub fn push_member(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.push_line(text, AccessSpecifier::default())
    }

    /// Append `text` as a new member of the `access` section.
    ///
    /// Pass `AccessSpecifier::default()` for private, as C++ does.
    pub fn push_line(&mut self, text: impl AsRef<str>, access: AccessSpecifier) -> &mut Self {
        let mut snippet = self.child();
        snippet.push_line(text);
        self.push_snippet(snippet, access);
        self
    }

    /// Append each item as its own member of the `access` section, in order.
    pub fn push_lines<I>(&mut self, lines: I, access: AccessSpecifier) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.push_line(line, access);
        }
        self
    }

    /// Append the current output of `node` as a new member of `access`.
    pub fn push_node(&mut self, node: &impl Render, access: AccessSpecifier) -> &mut Self {
        let mut snippet = self.child();
        snippet.push_node(node);
        self.push_snippet(snippet, access);
        self
    }

    /// Move this class and every member `levels` deeper.
    pub fn increment_indent(&mut self, levels: usize) -> &mut Self {
        self.indent.increment(levels);
        for snippet in self.members.values_mut().flatten() {
            snippet.increment_indent(levels);
        }
        trace!(class = %self.name, levels, "propagated class indent");
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    pub fn with_member(mut self, text: impl AsRef<str>) -> Self {
        self.push_member(text);
        self
    }

    pub fn with_line(mut self, text: impl AsRef<str>, access: AccessSpecifier) -> Self {
        self.push_line(text, access);
        self
    }

    pub fn with_lines<I>(mut self, lines: I, access: AccessSpecifier) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.push_lines(lines, access);
        self
    }

    pub fn with_node(mut self, node: &impl Render, access: AccessSpecifier) -> Self {
        self.push_node(node, access);
        self
    }
}

impl Render for Class {
    fn render(&self) -> String {
        let prefix = self.indent.indenting();
        let mut out = String::new();
        out.push_str(&prefix);
        out.push_str(&self.header());
        for access in AccessSpecifier::ALL {
            let members = self.members(access);
            if members.is_empty() {
                continue;
            }
            out.push_str(&prefix);
            out.push_str(access.label());
            for snippet in members {
                out.push_str(&snippet.render());
            }
        }
        out.push_str(&prefix);
        out.push_str(CLASS_CLOSE);
        out
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
