use std::borrow::Cow;

use super::{
    cursor::Cursor,
    kinds::{DASHES, Link, SpanKind},
};

/// Tuning knobs for the inline toggle scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    /// Only open a span when the marker is followed by a non-whitespace
    /// character. End of text counts as whitespace.
    pub open_lookahead: bool,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            open_lookahead: true,
        }
    }
}

/// Which inline spans are currently open.
///
/// Scoped to a single call of [`render_inline`]: every call starts from the
/// default (all closed) state and returns whatever is left open at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineState {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl InlineState {
    pub fn is_open(&self, kind: SpanKind) -> bool {
        match kind {
            SpanKind::Strong => self.bold,
            SpanKind::Emphasis => self.italic,
            SpanKind::Code => self.code,
        }
    }

    /// True when no span was left open.
    pub fn is_balanced(&self) -> bool {
        !(self.bold || self.italic || self.code)
    }

    fn flag_mut(&mut self, kind: SpanKind) -> &mut bool {
        match kind {
            SpanKind::Strong => &mut self.bold,
            SpanKind::Emphasis => &mut self.italic,
            SpanKind::Code => &mut self.code,
        }
    }
}

/// Renders one unit of raw text into HTML, appending it to `out`.
///
/// The text is HTML-escaped first, then links and dash runs are substituted,
/// then a single left-to-right scan toggles `strong`, `em` and `code` spans.
/// Spans still open at the end are left unclosed; the returned state says
/// which.
pub fn render_inline(text: &str, options: InlineOptions, out: &mut String) -> InlineState {
    let escaped = html_escape::encode_quoted_attribute(text);
    let mut s = Link::pattern().replace_all(&escaped, Link::ANCHOR);
    for (run, entity) in DASHES {
        if s.contains(run) {
            s = Cow::Owned(s.replace(run, entity));
        }
    }

    let mut state = InlineState::default();
    let mut cur = Cursor::new(&s);

    while let Some(c) = cur.bump() {
        // Raw `<` was escaped above, so any tag here is a generated anchor.
        if c == '<' {
            out.push(c);
            if let Some(tag) = cur.bump_through('>') {
                out.push_str(tag);
            }
            continue;
        }

        match SpanKind::from_marker(c) {
            Some(kind) if kind == SpanKind::Code || !state.code => {
                toggle(kind, &mut state, &cur, options, out);
            }
            _ => out.push(c),
        }
    }

    state
}

fn toggle(
    kind: SpanKind,
    state: &mut InlineState,
    cur: &Cursor<'_>,
    options: InlineOptions,
    out: &mut String,
) {
    let open = state.flag_mut(kind);
    if *open {
        out.push_str("</");
        out.push_str(kind.tag());
        out.push('>');
        *open = false;
    } else if cur.before().is_whitespace()
        && (!options.open_lookahead || cur.peek().is_some_and(|next| !next.is_whitespace()))
    {
        out.push('<');
        out.push_str(kind.tag());
        out.push('>');
        *open = true;
    } else {
        out.push(kind.marker());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(text: &str) -> String {
        let mut out = String::new();
        render_inline(text, InlineOptions::default(), &mut out);
        out
    }

    #[rstest]
    #[case("plain words", "plain words")]
    #[case("a < b", "a &lt; b")]
    #[case("fish & chips > salad", "fish &amp; chips &gt; salad")]
    #[case("*bold*", "<strong>bold</strong>")]
    #[case("some /italic/ text", "some <em>italic</em> text")]
    #[case("`code`", "<code>code</code>")]
    #[case("`a*b*c`", "<code>a*b*c</code>")]
    #[case("`a/b/c`", "<code>a/b/c</code>")]
    #[case("*bold /and italic/*", "<strong>bold <em>and italic</em></strong>")]
    #[case("and/or", "and/or")]
    #[case("2*3*4", "2*3*4")]
    #[case("wait---what", "wait&mdash;what")]
    #[case("pages 3--5", "pages 3&ndash;5")]
    #[case("four ----", "four &mdash;-")]
    #[case("see [docs](http://x.org/a)", "see <a href='http://x.org/a'>docs</a>")]
    #[case("[a](b) then [c](d)", "<a href='b'>a</a> then <a href='d'>c</a>")]
    fn renders_inline_markup(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render(input), expected);
    }

    #[test]
    fn escaping_happens_before_markup() {
        let out = render("<b>*x*</b>");
        assert!(!out.contains("<b>"));
        assert!(out.starts_with("&lt;b&gt;"));
    }

    #[test]
    fn escaped_quotes_never_survive_raw() {
        let out = render("say \"hi\" it's");
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
    }

    #[test]
    fn unclosed_span_is_abandoned() {
        let mut out = String::new();
        let state = render_inline("*bold", InlineOptions::default(), &mut out);
        assert_eq!(out, "<strong>bold");
        assert!(state.bold);
        assert!(!state.is_balanced());
    }

    #[test]
    fn trailing_marker_stays_literal_with_lookahead() {
        let mut out = String::new();
        let state = render_inline("a *", InlineOptions::default(), &mut out);
        assert_eq!(out, "a *");
        assert!(state.is_balanced());
    }

    #[test]
    fn marker_before_space_stays_literal_with_lookahead() {
        assert_eq!(render("5 * 3"), "5 * 3");
    }

    #[test]
    fn without_lookahead_marker_before_space_opens() {
        let options = InlineOptions {
            open_lookahead: false,
        };
        let mut out = String::new();
        let state = render_inline("5 * 3", options, &mut out);
        assert_eq!(out, "5 <strong> 3");
        assert!(state.bold);
    }

    #[test]
    fn state_resets_between_calls() {
        let mut out = String::new();
        let first = render_inline("*open", InlineOptions::default(), &mut out);
        assert!(first.bold);

        out.clear();
        let second = render_inline("close*", InlineOptions::default(), &mut out);
        assert_eq!(out, "close*");
        assert!(second.is_balanced());
    }

    #[test]
    fn slashes_inside_anchor_do_not_toggle_italics() {
        assert_eq!(
            render("/see [here](https://a.b/c)/"),
            "<em>see <a href='https://a.b/c'>here</a></em>"
        );
    }

    #[test]
    fn newline_counts_as_boundary() {
        assert_eq!(render("line\n*next*\n"), "line\n<strong>next</strong>\n");
    }

    #[test]
    fn code_state_is_reported_per_kind() {
        let mut out = String::new();
        let state = render_inline("`open *x*", InlineOptions::default(), &mut out);
        assert_eq!(out, "<code>open *x*");
        assert!(state.is_open(SpanKind::Code));
        assert!(!state.is_open(SpanKind::Strong));
    }
}
