use std::io;

use crate::error::CompileError;

/// Reads a fenced block from `lines`, positioned just after the directive.
///
/// The first line is taken as the fence. Every following line up to the next
/// line exactly equal to the fence is returned verbatim, each terminated by
/// `\n`. The closing fence itself is consumed but not returned.
pub fn read_block<I>(lines: &mut I) -> Result<String, CompileError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let fence = match lines.next() {
        Some(line) => line?,
        None => return Err(CompileError::MissingFenceLine),
    };

    let mut block = String::new();
    for line in lines.by_ref() {
        let line = line?;
        if line == fence {
            log::trace!("closed block fenced by {fence:?} ({} bytes)", block.len());
            return Ok(block);
        }
        block.push_str(&line);
        block.push('\n');
    }

    Err(CompileError::UnterminatedBlock { fence })
}
