//! # Runo Compiler
//!
//! Single pass over the input lines, appending HTML fragments to a
//! [`Document`] body.
//!
//! ## Modules
//!
//! - **`classify`**: `LineClassifier` sorts each line into blank, list item, directive or text
//! - **`lists`**: `ListStack` opens and closes nested `<ul>`/`<ol>` levels
//! - **`directive`**: `.title`, `.h1`-`.h5`, `.hr`, `.code` and `.quote`
//! - **`fence`**: `read_block` for the fenced bodies of `.code` and `.quote`
//! - **`inline`**: escaping, links, dashes and `strong`/`em`/`code` spans
//!
//! ## Key Invariants
//!
//! - Every list level opened is closed by the end of the document
//! - Blank lines never close a list; directives and paragraphs do
//! - Any error aborts the compilation and no document is returned

pub mod classify;
pub mod directive;
pub mod fence;
pub mod inline;
pub mod lists;

use std::io::{self, BufRead};

use crate::{document::Document, error::CompileError};

use classify::{LineClass, LineClassifier};
use directive::Directive;
use inline::{InlineOptions, render_inline};
use lists::ListStack;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub inline: InlineOptions,
}

/// Drives the line-by-line compilation of one document.
pub struct Compiler {
    options: CompileOptions,
    classifier: LineClassifier,
    lists: ListStack,
    doc: Document,
}

impl Compiler {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            options,
            classifier: LineClassifier,
            lists: ListStack::new(),
            doc: Document::new(),
        }
    }

    /// Compiles everything `reader` yields into a [`Document`].
    pub fn compile<R: BufRead>(mut self, reader: R) -> Result<Document, CompileError> {
        let mut lines = reader.lines();
        while let Some(line) = lines.next() {
            let line = line?;
            self.push_line(&line, &mut lines)?;
        }
        Ok(self.finish())
    }

    fn push_line<I>(&mut self, line: &str, lines: &mut I) -> Result<(), CompileError>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        match self.classifier.classify(line) {
            LineClass::Blank => {}
            LineClass::ListItem {
                kind,
                depth,
                content,
            } => {
                self.lists.push_item(kind, depth, &mut self.doc.body);
                render_inline(content, self.options.inline, &mut self.doc.body);
            }
            LineClass::Directive(text) => {
                self.close_lists();
                Directive::parse(text).apply(&mut self.doc, lines, self.options.inline)?;
            }
            LineClass::Text(text) => {
                self.close_lists();
                self.doc.write("<p>");
                render_inline(text, self.options.inline, &mut self.doc.body);
                self.doc.write("</p>");
            }
        }
        Ok(())
    }

    fn close_lists(&mut self) {
        self.lists.close_all(&mut self.doc.body);
    }

    fn finish(mut self) -> Document {
        self.close_lists();
        log::debug!(
            "compiled document {:?} ({} bytes of body)",
            self.doc.title,
            self.doc.body.len()
        );
        self.doc
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompileOptions::default())
    }
}

/// Compiles an in-memory document with default options.
pub fn compile_str(input: &str) -> Result<Document, CompileError> {
    Compiler::default().compile(input.as_bytes())
}
