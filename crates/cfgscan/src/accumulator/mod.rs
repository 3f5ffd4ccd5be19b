//! Append-only byte accumulator.
//!
//! Bytes are written into a chain of segments. A segment is never resized: a
//! push fills whatever room the last segment has left and, if bytes remain,
//! allocates exactly one new segment large enough for all of them (but never
//! smaller than [`TextAccumulator::MIN_SEGMENT`]). Appending is therefore
//! amortized O(1) and never copies previously written data; the only full copy
//! happens once, in [`TextAccumulator::finish`].
//!
//! The chain is stored in order in a `Vec`, so the segment after `segments[i]`
//! is `segments[i + 1]` and the last segment is the one receiving writes.
//! Dropping the accumulator releases every segment, which makes a local
//! accumulator safe to abandon on any early return.

use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;

use bstr::BString;

/// Chain consistency assertions, on in debug and fuzzing builds.
const CHECKED: bool = cfg!(any(debug_assertions, feature = "fuzzing"));

/// One fixed-capacity chunk of the chain.
#[derive(Debug)]
struct Segment {
    data: Box<[u8]>,
    len: usize,
}

impl Segment {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn room(&self) -> usize {
        self.capacity() - self.len
    }

    #[inline]
    fn filled(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Copies as much of `bytes` as fits and returns how many were taken.
    fn fill(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.room());
        self.data[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        n
    }
}

/// An append-only buffer that assembles text from many small writes.
///
/// ```rust
/// use cfgscan::TextAccumulator;
///
/// let mut acc = TextAccumulator::new();
/// acc.push(b"key");
/// acc.push(b" = ");
/// acc.push(b"value");
/// assert_eq!(acc.finish(), "key = value");
/// assert!(acc.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TextAccumulator {
    segments: Vec<Segment>,
    len: usize,
}

impl TextAccumulator {
    /// Smallest capacity a segment is allocated with.
    pub const MIN_SEGMENT: usize = 64;

    /// Creates an empty accumulator. No segment is allocated until the first
    /// non-empty push.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
            len: 0,
        }
    }

    /// Total number of bytes pushed since the last `finish` or `destroy`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been pushed since the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of segments currently in the chain.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Capacities of the segments in chain order.
    pub fn segment_capacities(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.segments.iter().map(Segment::capacity)
    }

    /// Appends `bytes`. An empty slice leaves the accumulator untouched.
    pub fn push(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let before = self.len;
        self.len += bytes.len();

        let rest = match self.segments.last_mut() {
            Some(last) => {
                let taken = last.fill(bytes);
                &bytes[taken..]
            }
            None => bytes,
        };

        if !rest.is_empty() {
            if CHECKED {
                // Only the last segment may have room left.
                assert!(
                    self.segments.last().is_none_or(|s| s.room() == 0),
                    "gap inside chain"
                );
            }
            // Sized to hold the whole remainder, so one segment always suffices.
            let mut segment = Segment::with_capacity(rest.len().max(Self::MIN_SEGMENT));
            segment.fill(rest);
            self.segments.push(segment);
        }

        if CHECKED {
            assert_eq!(self.len - before, bytes.len(), "total out of step with push");
        }
    }

    /// Appends a single byte.
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.push(&[byte]);
    }

    /// Concatenates every segment into one owned buffer and resets the
    /// accumulator so it can be reused.
    ///
    /// Finishing an empty accumulator returns an empty buffer.
    pub fn finish(&mut self) -> BString {
        if CHECKED {
            self.check_chain();
        }
        let mut out = Vec::with_capacity(self.len);
        for segment in self.segments.drain(..) {
            out.extend_from_slice(segment.filled());
        }
        self.len = 0;
        BString::from(out)
    }

    /// Releases every segment without producing output.
    pub fn destroy(&mut self) {
        self.segments.clear();
        self.len = 0;
    }

    /// Walks the whole chain; only run once per `finish`.
    fn check_chain(&self) {
        let used: usize = self.segments.iter().map(|s| s.len).sum();
        assert_eq!(used, self.len, "segment lengths out of sync with total");
        if let Some((_, full)) = self.segments.split_last() {
            assert!(full.iter().all(|s| s.room() == 0), "gap inside chain");
        }
    }
}

impl Extend<u8> for TextAccumulator {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.push_byte(byte);
        }
    }
}

impl<'a> Extend<&'a [u8]> for TextAccumulator {
    fn extend<I: IntoIterator<Item = &'a [u8]>>(&mut self, iter: I) {
        for chunk in iter {
            self.push(chunk);
        }
    }
}

impl fmt::Write for TextAccumulator {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests;
