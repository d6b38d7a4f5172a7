//! Indentation configuration for generated code.

/// Number of fill characters per nesting level when none is given.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Nesting level, per-level width and fill character of a node.
///
/// The prefix for a line is `fill` repeated `width * level` times. Only the
/// owning node changes the level, through its `increment_indent` operation,
/// so that a node and its children stay one level apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indent {
    level: usize,
    width: usize,
    fill: char,
}

impl Indent {
    /// Create an indent at `level` with `width` spaces per level.
    pub const fn new(level: usize, width: usize) -> Self {
        Self {
            level,
            width,
            fill: ' ',
        }
    }

    /// One tab per level.
    pub const fn tabs() -> Self {
        Self::new(0, 1).with_fill('\t')
    }

    /// Replace the fill character.
    pub const fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Fill characters per level.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn fill(&self) -> char {
        self.fill
    }

    /// The whitespace prefix for the current level.
    pub fn indenting(&self) -> String {
        std::iter::repeat_n(self.fill, self.width.saturating_mul(self.level)).collect()
    }

    /// The indent of a direct child: one level deeper, same width.
    ///
    /// Children always fill with spaces; a custom fill only applies to the
    /// node it was set on.
    pub(crate) fn child(&self) -> Self {
        Self::new(self.level.saturating_add(1), self.width)
    }

    /// Levels saturate at `usize::MAX`.
    pub(crate) fn increment(&mut self, levels: usize) {
        self.level = self.level.saturating_add(levels);
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::new(0, DEFAULT_INDENT_WIDTH)
    }
}
