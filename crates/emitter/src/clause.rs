use crate::native::NativeQuery;

/// A connective paired with the child it introduces inside a composite.
///
/// The connective is opaque text for the string targets and is rendered
/// exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanClause<N> {
    connective: String,
    child: N,
}

impl<N: NativeQuery<Native = String>> BooleanClause<N> {
    pub fn new(connective: &str, child: N) -> Self {
        Self {
            connective: connective.to_string(),
            child,
        }
    }

    pub fn connective(&self) -> &str {
        &self.connective
    }

    pub fn child(&self) -> &N {
        &self.child
    }

    /// Renders ` <connective> (<child>)` onto `out`.
    pub(crate) fn render_into(&self, out: &mut String) {
        out.push(' ');
        out.push_str(&self.connective);
        out.push_str(" (");
        out.push_str(&self.child.render_native());
        out.push(')');
    }
}
