use std::sync::OnceLock;

use regex::Regex;

/// An inline span that is switched on and off by a single marker character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// `*strong*`
    Strong,
    /// `/emphasis/`
    Emphasis,
    /// `` `code` `` - a raw zone: the other markers are literal inside it.
    Code,
}

impl SpanKind {
    pub const ALL: [SpanKind; 3] = [SpanKind::Strong, SpanKind::Emphasis, SpanKind::Code];

    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '*' => Some(SpanKind::Strong),
            '/' => Some(SpanKind::Emphasis),
            '`' => Some(SpanKind::Code),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            SpanKind::Strong => '*',
            SpanKind::Emphasis => '/',
            SpanKind::Code => '`',
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            SpanKind::Strong => "strong",
            SpanKind::Emphasis => "em",
            SpanKind::Code => "code",
        }
    }
}

/// `[label](url)` links, rewritten into anchors.
pub struct Link;

impl Link {
    pub const ANCHOR: &'static str = "<a href='${2}'>${1}</a>";

    pub fn pattern() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"))
    }
}

/// Hyphen runs replaced by dash entities. Longest first.
pub const DASHES: [(&str, &str); 2] = [("---", "&mdash;"), ("--", "&ndash;")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_round_trip() {
        for kind in SpanKind::ALL {
            assert_eq!(SpanKind::from_marker(kind.marker()), Some(kind));
        }
        assert_eq!(SpanKind::from_marker('_'), None);
    }

    #[test]
    fn link_pattern_is_non_greedy() {
        let out = Link::pattern().replace_all("[a](b) and [c](d)", Link::ANCHOR);
        assert_eq!(out, "<a href='b'>a</a> and <a href='d'>c</a>");
    }
}
