//! Pull-based byte sources with limited repositioning.
//!
//! A [`CharStream`] hands out one byte at a time and supports `seek` so that a
//! scanner can look ahead and then push one or two bytes back. Two status
//! values are kept next to the read cursor:
//!
//! - the error status, replaced by every read and cleared at the start of every
//!   seek. Both backends do this on reads too: a successful read or a read at
//!   end of input clears an error left by an earlier operation;
//! - the end-of-input flag.
//!
//! `next_char` returning `None` does not say which of the two happened, so
//! callers check [`CharStream::is_eof`] to tell an exhausted stream from a
//! failed read.

use alloc::boxed::Box;

use crate::StreamError;

#[cfg(feature = "std")]
mod file;
mod memory;

#[cfg(feature = "std")]
pub use file::FileCharStream;
pub use memory::MemoryCharStream;

/// Reference point of a seek offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Whence {
    /// Offset from the first byte.
    Start,
    /// Offset from the read cursor.
    Current,
    /// Offset from the end of input.
    End,
}

impl Whence {
    /// Converts the C `SEEK_SET` / `SEEK_CUR` / `SEEK_END` numbering.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidArgument`] for any other value.
    pub const fn from_raw(raw: i32) -> Result<Self, StreamError> {
        match raw {
            0 => Ok(Whence::Start),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            _ => Err(StreamError::InvalidArgument),
        }
    }
}

/// A byte source with relative seeking.
///
/// Implementors must keep [`error`](CharStream::error) and
/// [`is_eof`](CharStream::is_eof) in step with every `next_char` and `seek`
/// call. A failed seek leaves the read position where it was.
pub trait CharStream {
    /// Reads the next byte, or returns `None` at end of input or on failure.
    fn next_char(&mut self) -> Option<u8>;

    /// Moves the read position to `offset` relative to `whence`.
    ///
    /// The previous error status is cleared before the move is attempted.
    ///
    /// # Errors
    ///
    /// Returns the error that was also recorded in the stream status, e.g.
    /// [`StreamError::InvalidArgument`] when the target would be negative.
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), StreamError>;

    /// Error status left by the last operation.
    fn error(&self) -> Option<StreamError>;

    /// Whether the last read ran into the end of input.
    fn is_eof(&self) -> bool;

    /// Numeric form of [`error`](CharStream::error); `0` means no error.
    fn error_code(&self) -> i32 {
        self.error().map_or(0, StreamError::code)
    }

    /// Steps the read position back by `n` bytes.
    ///
    /// # Errors
    ///
    /// Same as [`seek`](CharStream::seek).
    fn unread(&mut self, n: u8) -> Result<(), StreamError> {
        self.seek(-i64::from(n), Whence::Current)
    }
}

impl<S: CharStream + ?Sized> CharStream for &mut S {
    #[inline]
    fn next_char(&mut self) -> Option<u8> {
        (**self).next_char()
    }

    #[inline]
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), StreamError> {
        (**self).seek(offset, whence)
    }

    #[inline]
    fn error(&self) -> Option<StreamError> {
        (**self).error()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        (**self).is_eof()
    }
}

impl<S: CharStream + ?Sized> CharStream for Box<S> {
    #[inline]
    fn next_char(&mut self) -> Option<u8> {
        (**self).next_char()
    }

    #[inline]
    fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), StreamError> {
        (**self).seek(offset, whence)
    }

    #[inline]
    fn error(&self) -> Option<StreamError> {
        (**self).error()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        (**self).is_eof()
    }
}
