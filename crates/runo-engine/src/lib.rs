pub mod compiler;
pub mod document;
pub mod error;
pub mod io;
pub mod template;

// Re-export key types for easier usage
pub use compiler::{
    CompileOptions, Compiler, compile_str,
    inline::{InlineOptions, InlineState, render_inline},
};
pub use document::Document;
pub use error::{Arity, CompileError};
pub use io::IoError;
pub use template::{PageTemplate, TemplateError};
