use std::io;

use super::{
    fence::read_block,
    inline::{InlineOptions, render_inline},
};
use crate::{
    document::Document,
    error::{Arity, CompileError},
};

/// A parsed `.name[ argument]` line.
///
/// The argument is whatever follows the first space, trimmed. A line like
/// `.hr ` still counts as having an (empty) argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub argument: Option<&'a str>,
}

/// The recognised directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Title,
    Heading(u8),
    Rule,
    Code,
    Quote,
}

impl DirectiveKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(DirectiveKind::Title),
            "h1" => Some(DirectiveKind::Heading(1)),
            "h2" => Some(DirectiveKind::Heading(2)),
            "h3" => Some(DirectiveKind::Heading(3)),
            "h4" => Some(DirectiveKind::Heading(4)),
            "h5" => Some(DirectiveKind::Heading(5)),
            "hr" => Some(DirectiveKind::Rule),
            "code" => Some(DirectiveKind::Code),
            "quote" => Some(DirectiveKind::Quote),
            _ => None,
        }
    }

    /// The argument requirement, or `None` when an argument is optional.
    pub fn arity(self) -> Option<Arity> {
        match self {
            DirectiveKind::Title | DirectiveKind::Heading(_) => Some(Arity::Required),
            DirectiveKind::Rule => Some(Arity::Forbidden),
            DirectiveKind::Code | DirectiveKind::Quote => None,
        }
    }
}

impl<'a> Directive<'a> {
    /// Parses the text following the leading `.` of a directive line.
    pub fn parse(text: &'a str) -> Self {
        match text.split_once(' ') {
            Some((name, argument)) => Self {
                name,
                argument: Some(argument.trim()),
            },
            None => Self {
                name: text,
                argument: None,
            },
        }
    }

    /// Resolves the directive name and checks the argument against its arity.
    pub fn kind(&self) -> Result<DirectiveKind, CompileError> {
        let kind = DirectiveKind::from_name(self.name)
            .ok_or_else(|| CompileError::UnknownDirective(self.name.to_string()))?;

        if let Some(arity) = kind.arity()
            && self.argument.is_some() != (arity == Arity::Required)
        {
            return Err(CompileError::ArgumentArityMismatch {
                directive: self.name.to_string(),
                arity,
            });
        }

        Ok(kind)
    }

    /// Runs the directive against `doc`, pulling a fenced block from `lines`
    /// when the directive takes one.
    pub fn apply<I>(
        &self,
        doc: &mut Document,
        lines: &mut I,
        inline: InlineOptions,
    ) -> Result<(), CompileError>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let kind = self.kind()?;
        let argument = self.argument.unwrap_or_default();
        log::debug!("directive .{} ({kind:?})", self.name);

        match kind {
            DirectiveKind::Title => {
                if !doc.title.is_empty() {
                    log::warn!("title {:?} replaced by {argument:?}", doc.title);
                }
                doc.title = argument.to_string();
            }
            DirectiveKind::Heading(level) => {
                doc.write(&format!("<h{level}>"));
                render_inline(argument, inline, &mut doc.body);
                doc.write(&format!("</h{level}>"));
            }
            DirectiveKind::Rule => doc.write("<hr>"),
            DirectiveKind::Code => {
                if self.argument.is_some() {
                    log::debug!("ignoring .code argument {argument:?}");
                }
                let block = read_block(lines)?;
                let block = block.strip_suffix('\n').unwrap_or(&block);
                doc.write("<pre><code>");
                doc.write(&html_escape::encode_quoted_attribute(block));
                doc.write("</code></pre>");
            }
            DirectiveKind::Quote => {
                let block = read_block(lines)?;
                doc.write("<figure class='quote'><blockquote>");
                render_inline(&block, inline, &mut doc.body);
                doc.write("</blockquote>");
                if let Some(caption) = self.argument {
                    doc.write("<figcaption>&mdash;");
                    render_inline(caption, inline, &mut doc.body);
                    doc.write("</figcaption>");
                }
                doc.write("</figure>");
            }
        }

        Ok(())
    }
}
