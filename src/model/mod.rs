//! Rendered-object model consumed by the render context.
//!
//! The render context never inspects rendered objects; it only needs their
//! textual form. Anything able to print itself as a (possibly unbraced)
//! object literal can be used as an [`Instance`].

pub mod value;

use std::fmt;

pub use value::{Value, ValueMap};

/// A rendered object instance.
///
/// Implementations return the instance's textual representation, which is
/// embedded verbatim (after brace normalization) in the context block.
pub trait Instance: fmt::Debug + Send + Sync {
    /// Textual representation of the rendered object.
    fn to_text(&self) -> String;
}

/// An instance whose text has already been rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInstance {
    text: String,
}

impl TextInstance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Instance for TextInstance {
    fn to_text(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for TextInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for TextInstance {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextInstance {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
