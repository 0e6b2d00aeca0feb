/// A cursor for character-by-character inline scanning.
///
/// Besides the position it remembers the character that preceded the one
/// most recently consumed, which is what span markers test against. Before
/// anything is consumed that character is a space: the start of the text
/// behaves like a word boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
    before: char,
    current: char,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self {
            s,
            i: 0,
            before: ' ',
            current: ' ',
        }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the next character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The unconsumed remainder of the string.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// The character preceding the most recently consumed one.
    pub fn before(&self) -> char {
        self.before
    }

    /// Advances by one character, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        self.before = self.current;
        self.current = c;
        Some(c)
    }

    /// Consumes everything up to and including `end`, returning the consumed
    /// text. Returns `None` and leaves the cursor untouched if `end` never
    /// occurs.
    pub fn bump_through(&mut self, end: char) -> Option<&'a str> {
        let rest = self.rest();
        let idx = rest.find(end)? + end.len_utf8();
        self.i += idx;
        self.before = self.current;
        self.current = end;
        Some(&rest[..idx])
    }
}
