use serde::Serialize;

/// The compiled form of a runo document, handed to the page template.
///
/// `body` only ever grows during compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an HTML fragment to the body.
    pub fn write(&mut self, fragment: &str) {
        self.body.push_str(fragment);
    }
}
