//! Defines the contract shared by every emitted node.

/// Anything that can be rendered into the native form of a retrieval back end.
///
/// Rendering borrows the receiver immutably and is a pure function of its
/// current state: two calls without an intervening mutation return equal
/// values, and nothing is cached between calls.
pub trait NativeQuery {
    /// `String` for the relational and raw SQL targets, a structured request
    /// for the search-engine target.
    type Native;

    fn render_native(&self) -> Self::Native;
}

impl<N: NativeQuery + ?Sized> NativeQuery for Box<N> {
    type Native = N::Native;

    fn render_native(&self) -> Self::Native {
        (**self).render_native()
    }
}
