use alloc::{boxed::Box, vec::Vec};

use super::{CharStream, Whence};
use crate::StreamError;

/// A [`CharStream`] over an owned, fixed-length byte buffer.
///
/// Seeking past the end clamps to the end instead of failing; seeking before
/// the start fails with [`StreamError::InvalidArgument`].
#[derive(Debug, Clone)]
pub struct MemoryCharStream {
    bytes: Box<[u8]>,
    offset: usize,
    eof: bool,
    error: Option<StreamError>,
}

impl MemoryCharStream {
    /// Wraps a copy of `bytes`.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self::from(Vec::from(bytes))
    }

    /// Current read offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Length of the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes between the read offset and the end.
    #[must_use]
    pub fn remaining(&self) -> &[u8] {
        &self.bytes[self.offset..]
    }
}

impl From<Vec<u8>> for MemoryCharStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
            offset: 0,
            eof: false,
            error: None,
        }
    }
}

impl From<&[u8]> for MemoryCharStream {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for MemoryCharStream {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl CharStream for MemoryCharStream {
    fn next_char(&mut self) -> Option<u8> {
        self.error = None;
        let Some(&byte) = self.bytes.get(self.offset) else {
            self.eof = true;
            return None;
        };
        self.offset += 1;
        Some(byte)
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), StreamError> {
        self.error = None;
        let len = i64::try_from(self.bytes.len()).unwrap_or(i64::MAX);
        let base = match whence {
            Whence::Start => 0,
            Whence::Current => i64::try_from(self.offset).unwrap_or(i64::MAX),
            Whence::End => len,
        };

        let target = base.saturating_add(offset);
        if target < 0 {
            self.error = Some(StreamError::InvalidArgument);
            return Err(StreamError::InvalidArgument);
        }

        // `target` is non-negative and clamped to the buffer length here.
        self.offset = usize::try_from(target.min(len)).unwrap_or(self.bytes.len());
        self.eof = false;
        Ok(())
    }

    fn error(&self) -> Option<StreamError> {
        self.error
    }

    fn is_eof(&self) -> bool {
        self.eof
    }
}
