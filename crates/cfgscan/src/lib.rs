//! Text-scanning primitives for configuration and command-line parsers.
//!
//! The crate provides three building blocks:
//!
//! - [`TextAccumulator`], an append-only byte buffer made of a chain of
//!   segments, finished into one owned [`BString`](bstr::BString).
//! - [`CharStream`], a pull-based byte source with relative seeking used for
//!   one or two bytes of pushback, with [`MemoryCharStream`] and (with the
//!   `std` feature) [`FileCharStream`] backends.
//! - [`CommentLexer`], which recognizes a block of `#`-prefixed comment lines
//!   on top of any [`CharStream`].
//!
//! ```rust
//! use cfgscan::{CharStream, MemoryCharStream, parse_comment_block};
//!
//! let mut stream = MemoryCharStream::from("# listen address\n\n# port\nport = 80");
//! let block = parse_comment_block(&mut stream).expect("comment block");
//! assert_eq!(block.lines(), [" listen address", " port"]);
//! assert_eq!(stream.next_char(), Some(b'p'));
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod accumulator;
mod error;
mod lexer;
mod stream;

#[cfg(test)]
mod tests;

pub use accumulator::TextAccumulator;
pub use error::{EINVAL, EIO, StreamError};
pub use lexer::{
    CommentBlock, CommentLexer, LexerOptions, check_end_of_input, parse_comment_block,
    parse_newline, skip_whitespace,
};
#[cfg(feature = "std")]
pub use stream::FileCharStream;
pub use stream::{CharStream, MemoryCharStream, Whence};
