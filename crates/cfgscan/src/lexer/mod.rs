//! Comment-block lexer.
//!
//! A comment block is a run of lines that each start with the comment marker
//! (`#` by default). Blank lines and indentation between two comment lines do
//! not end the block. Each line's content is the raw bytes between the marker
//! and the line terminator, with nothing trimmed.
//!
//! ```text
//! # first          -> " first"
//! #                -> ""
//!     # indented   -> " indented"
//! key = value      <- block ends, `k` is left unread
//! ```

use alloc::vec::Vec;
use core::{fmt, ops::Index, slice};

use bstr::BString;
use tracing::trace;

use crate::{CharStream, TextAccumulator};

mod scan;

pub use scan::{check_end_of_input, parse_newline, skip_whitespace};
use scan::push_back;

/// Configuration for [`CommentLexer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Byte that opens a comment line.
    ///
    /// # Default
    ///
    /// `b'#'`
    pub comment_marker: u8,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            comment_marker: b'#',
        }
    }
}

/// The lines of one comment block, in source order.
///
/// A block always holds at least one line; input that does not start a
/// comment produces no block at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    lines: Vec<BString>,
}

impl CommentBlock {
    /// Line contents, without markers or terminators.
    #[must_use]
    pub fn lines(&self) -> &[BString] {
        &self.lines
    }

    /// Number of lines in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false`; kept for symmetry with [`len`](CommentBlock::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> slice::Iter<'_, BString> {
        self.lines.iter()
    }

    /// Hands the lines over to the caller.
    #[must_use]
    pub fn into_lines(self) -> Vec<BString> {
        self.lines
    }
}

impl Index<usize> for CommentBlock {
    type Output = BString;

    fn index(&self, index: usize) -> &BString {
        &self.lines[index]
    }
}

impl IntoIterator for CommentBlock {
    type Item = BString;
    type IntoIter = alloc::vec::IntoIter<BString>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a CommentBlock {
    type Item = &'a BString;
    type IntoIter = slice::Iter<'a, BString>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Lines joined with `\n`; invalid UTF-8 is shown as U+FFFD.
impl fmt::Display for CommentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(line, f)?;
        }
        Ok(())
    }
}

/// Recognizes comment blocks on a [`CharStream`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentLexer {
    options: LexerOptions,
}

impl CommentLexer {
    /// Creates a lexer with the given options.
    #[must_use]
    pub const fn new(options: LexerOptions) -> Self {
        Self { options }
    }

    /// Options this lexer was built with.
    #[must_use]
    pub const fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Reads the comment block starting at the stream's current position.
    ///
    /// Returns `None` if the next byte is not the comment marker (that byte
    /// is left unread) or if the stream is exhausted or failing. Otherwise the
    /// stream is left on the first byte after the block and any whitespace
    /// following it.
    pub fn parse_comment_block<S: CharStream + ?Sized>(
        &self,
        stream: &mut S,
    ) -> Option<CommentBlock> {
        let marker = self.options.comment_marker;
        match stream.next_char() {
            Some(byte) if byte == marker => {}
            Some(_) => {
                push_back(stream, 1);
                return None;
            }
            None => return None,
        }

        let mut scratch = TextAccumulator::new();
        let mut lines = Vec::new();
        loop {
            read_line(stream, &mut scratch);
            let line = scratch.finish();
            trace!(index = lines.len(), len = line.len(), "comment line");
            lines.push(line);

            skip_whitespace(stream);
            match stream.next_char() {
                Some(byte) if byte == marker => {}
                Some(_) => {
                    push_back(stream, 1);
                    break;
                }
                None => break,
            }
        }

        trace!(lines = lines.len(), "comment block");
        Some(CommentBlock { lines })
    }
}

/// Accumulates bytes up to a line terminator (consumed, not stored) or the
/// end of input.
fn read_line<S: CharStream + ?Sized>(stream: &mut S, scratch: &mut TextAccumulator) {
    loop {
        if parse_newline(stream) {
            return;
        }
        match stream.next_char() {
            Some(byte) => scratch.push_byte(byte),
            None => return,
        }
    }
}

/// Reads a `#` comment block with [`LexerOptions::default`].
///
/// See [`CommentLexer::parse_comment_block`].
pub fn parse_comment_block<S: CharStream + ?Sized>(stream: &mut S) -> Option<CommentBlock> {
    CommentLexer::default().parse_comment_block(stream)
}
