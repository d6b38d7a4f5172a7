//! Composable C++ source generation with automatically propagated indentation.
//!
//! Callers build a tree of [`Snippet`], [`Block`] and [`Class`] nodes, append
//! literal lines or other nodes, and render the tree to a single string.
//!
//! # Module Organization
//!
//! - [`indent`] - Indentation level, width and fill character
//! - [`render`] - The [`Render`] capability shared by every node
//! - [`snippet`] - Leaf nodes holding final text lines (plain lines, includes)
//! - [`block`] - Code blocks, definitions and namespaces
//! - [`class`] - Class bodies bucketed by access specifier
//! - [`config`] - Indentation style loaded from TOML
//!
//! # Example
//!
//! ```
//! use cppcodegen::{AccessSpecifier, Block, Class, Render};
//!
//! let class = Class::new("Foo")
//!     .with_line("int x;", AccessSpecifier::Public)
//!     .with_line("int y;", AccessSpecifier::Private);
//!
//! let code = Block::namespace("app").with_node(&class).render();
//!
//! assert_eq!(
//!     code,
//!     "namespace app {\n  class Foo {\n   public:\n    int x;\n   private:\n    int y;\n  };\n}\n"
//! );
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod block;
pub mod class;
pub mod config;
mod error;
pub mod indent;
mod kind;
pub mod render;
pub mod snippet;

pub use block::Block;
pub use class::Class;
pub use config::Config;
pub use error::{Error, Result};
pub use indent::{DEFAULT_INDENT_WIDTH, Indent};
pub use kind::{AccessSpecifier, NodeKind};
pub use render::Render;
pub use snippet::Snippet;
