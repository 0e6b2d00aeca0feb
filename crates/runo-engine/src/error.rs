use std::{fmt, io};

/// Fatal conditions raised while compiling a document.
///
/// Every variant aborts the whole compilation; no partial document is
/// ever produced.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("unexpected end of input while reading the fence line of a block")]
    MissingFenceLine,
    #[error("could not find ending fence '{fence}' of block")]
    UnterminatedBlock { fence: String },
    #[error("unknown directive '{0}'")]
    UnknownDirective(String),
    #[error("{directive} {arity}")]
    ArgumentArityMismatch { directive: String, arity: Arity },
    #[error("failed to read input: {0}")]
    StreamRead(#[from] io::Error),
}

/// Whether a directive demands or refuses an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Required,
    Forbidden,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Required => f.write_str("requires an argument"),
            Arity::Forbidden => f.write_str("must not have an argument"),
        }
    }
}
