use super::lists::ListKind;

/// Classification of a single input line, using only local facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// An empty line. Skipped, and does not close an open list.
    Blank,
    /// A `-` or `#` item. `depth` is the length of the leading marker run.
    ListItem {
        kind: ListKind,
        depth: usize,
        /// Item text after the marker run, leading whitespace trimmed.
        content: &'a str,
    },
    /// A `.name[ argument]` line, holding everything after the dot.
    Directive(&'a str),
    /// Anything else: a paragraph.
    Text(&'a str),
}

/// Classifies individual lines for the document driver.
pub struct LineClassifier;

impl LineClassifier {
    pub const DIRECTIVE_PREFIX: char = '.';

    /// Classifies a line (without its line terminator) into a [`LineClass`].
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let Some(first) = line.chars().next() else {
            return LineClass::Blank;
        };

        if let Some(kind) = ListKind::from_marker(first) {
            let content = line.trim_start_matches(first);
            let depth = line.len() - content.len();
            return LineClass::ListItem {
                kind,
                depth,
                content: content.trim_start(),
            };
        }

        match line.strip_prefix(Self::DIRECTIVE_PREFIX) {
            Some(directive) => LineClass::Directive(directive),
            None => LineClass::Text(line),
        }
    }
}
