//! The capability shared by every node: turning itself into text.

/// Trait for nodes that can be rendered to source text.
///
/// A node absorbed through `push_node` is rendered once, at the moment it is
/// added; later changes to it are not seen by its new parent.
pub trait Render {
    /// Render this node, indentation included.
    fn render(&self) -> String;
}

/// Blanket implementation for references.
impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (*self).render()
    }
}

/// Blanket implementation for Box.
impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        self.as_ref().render()
    }
}
