/// The two list flavours, each owning its marker character and HTML tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-` items, rendered as `<ul>`.
    Unordered,
    /// `#` items, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '-' => Some(ListKind::Unordered),
            '#' => Some(ListKind::Ordered),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            ListKind::Unordered => '-',
            ListKind::Ordered => '#',
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// The stack of currently open list levels.
///
/// Its length is the nesting depth. Each level's `<li>` stays open until the
/// next item at the same depth, a shallower item, or [`ListStack::close_all`].
#[derive(Debug, Default)]
pub struct ListStack {
    levels: Vec<ListKind>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Opens the tags for a new item of `kind` at `depth`, ending with an
    /// open `<li>`. The caller writes the item text afterwards.
    ///
    /// Every nested list sits inside an `<li>` of its parent, including the
    /// intermediate levels of a jump several levels deeper. When the level the
    /// item lands on was opened with the other marker, that level is closed
    /// and reopened with `kind`.
    pub fn push_item(&mut self, kind: ListKind, depth: usize, out: &mut String) {
        if !self.levels.is_empty() && self.levels.len() == depth {
            out.push_str("</li>");
        }

        // true while the top level has no open <li> yet
        let mut fresh = false;
        if self.levels.is_empty() {
            self.open_level(kind, out);
            fresh = true;
        }

        while self.levels.len() < depth {
            if fresh {
                out.push_str("<li>");
            }
            self.open_level(kind, out);
            fresh = true;
        }

        if self.levels.len() > depth {
            while self.levels.len() > depth {
                self.close_level(out);
            }
            out.push_str("</li>");
        }

        if let Some(&current) = self.levels.last()
            && current != kind
        {
            log::debug!(
                "list marker switched from '{}' to '{}' at depth {}",
                current.marker(),
                kind.marker(),
                self.levels.len()
            );
            self.levels.pop();
            out.push_str("</");
            out.push_str(current.tag());
            out.push('>');
            self.open_level(kind, out);
        }

        out.push_str("<li>");
    }

    /// Closes every open level, leaving the stack empty.
    pub fn close_all(&mut self, out: &mut String) {
        while !self.levels.is_empty() {
            self.close_level(out);
        }
    }

    /// Closes the open item of the top level and the level itself.
    fn close_level(&mut self, out: &mut String) {
        if let Some(level) = self.levels.pop() {
            out.push_str("</li></");
            out.push_str(level.tag());
            out.push('>');
        }
    }

    fn open_level(&mut self, kind: ListKind, out: &mut String) {
        self.levels.push(kind);
        out.push('<');
        out.push_str(kind.tag());
        out.push('>');
    }
}
