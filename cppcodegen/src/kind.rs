//! Node kind tags and class access specifiers.

use std::{fmt, str::FromStr};

use crate::Error;

/// What a node was constructed as.
///
/// The kind decides the header and footer text a node wraps around its
/// content; it carries no behavior of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Plain lines, no header or footer.
    Line,
    /// `#include <...>` lines.
    SystemInclude,
    /// `#include "..."` lines relative to a base directory.
    LocalInclude,
    /// A bare `{ ... }` block. Classes report this kind as well.
    CodeBlock,
    /// `<declaration> { ... }`, e.g. a function definition.
    Definition,
    /// `namespace <name> { ... }`.
    Namespace,
}

/// Access level of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessSpecifier {
    Public,
    Protected,
    /// Members land here unless told otherwise, as in C++.
    #[default]
    Private,
}

impl AccessSpecifier {
    /// All specifiers in the order class sections are rendered.
    pub const ALL: [Self; 3] = [Self::Public, Self::Protected, Self::Private];

    /// The C++ keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }

    /// The section label emitted before a non-empty bucket.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => " public:\n",
            Self::Protected => " protected:\n",
            Self::Private => " private:\n",
        }
    }
}

impl fmt::Display for AccessSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessSpecifier {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim();
        Self::ALL
            .into_iter()
            .find(|access| access.as_str().eq_ignore_ascii_case(keyword))
            .ok_or_else(|| {
                Box::new(Error::UnknownAccessSpecifier {
                    value: keyword.to_string(),
                })
            })
    }
}
