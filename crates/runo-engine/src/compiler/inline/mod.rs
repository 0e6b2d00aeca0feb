//! # Inline Markup
//!
//! Turns one unit of raw text (a paragraph line, list item, heading argument
//! or a whole quote block) into HTML.
//!
//! ## Pipeline
//!
//! 1. HTML-escape the text so user content can never inject markup
//! 2. Rewrite `[label](url)` links into anchors
//! 3. Replace `---` and `--` with dash entities
//! 4. Scan left to right, toggling `*strong*`, `/em/` and `` `code` `` spans
//!
//! ## Modules
//!
//! - **`kinds`**: span kinds with their owned markers and tags, link pattern, dashes
//! - **`cursor`**: `Cursor` for character-by-character scanning with boundary tracking
//! - **`render`**: `render_inline()` entry point and the per-call `InlineState`
//!
//! ## Raw Zone Precedence
//!
//! Inside a code span `*` and `/` are literal characters. Toggle state never
//! crosses calls, so a span left open at the end of the text is abandoned.

pub mod cursor;
pub mod kinds;
pub mod render;

pub use kinds::SpanKind;
pub use render::{InlineOptions, InlineState, render_inline};
