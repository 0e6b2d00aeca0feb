//! Page template boundary: interpolates a compiled [`Document`] into a
//! caller-supplied template.
//!
//! Templates use minijinja syntax and see two variables, `title` and `body`.
//! Neither is escaped: `body` is already HTML, and `title` is inserted as
//! written (use `{{ title | escape }}` where that matters).

use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::{
    document::Document,
    io::{IoError, read_file},
};

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error(transparent)]
    File(#[from] IoError),
    #[error("Invalid template {name}: {source}")]
    Parse {
        name: String,
        source: minijinja::Error,
    },
    #[error("Failed to render template: {0}")]
    Render(minijinja::Error),
}

/// A syntax-checked page template.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    name: String,
    source: String,
}

impl PageTemplate {
    /// Reads and validates the template at `path`.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = read_file(path)?;
        Self::from_source(path.display().to_string(), source)
    }

    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        let template = Self {
            name: name.into(),
            source: source.into(),
        };
        template.environment()?;
        Ok(template)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders `doc` fully in memory; nothing is produced on failure.
    pub fn render(&self, doc: &Document) -> Result<String, TemplateError> {
        let env = self.environment()?;
        let template = env.get_template(&self.name).map_err(TemplateError::Render)?;
        template.render(doc).map_err(TemplateError::Render)
    }

    fn environment(&self) -> Result<Environment<'_>, TemplateError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_template(&self.name, &self.source)
            .map_err(|source| TemplateError::Parse {
                name: self.name.clone(),
                source,
            })?;
        Ok(env)
    }
}
