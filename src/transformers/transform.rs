//! Transform trait.

pub trait Transform {
    /// Transforms the provided text, returning [None] if the text is rejected.
    fn transform(&self, text: &str) -> Option<String>;
}
