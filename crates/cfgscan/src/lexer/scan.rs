//! Whitespace and line-terminator recognizers shared by the lexers.

use crate::CharStream;

/// Bytes skipped by [`skip_whitespace`]: space, tab, CR, LF, form feed and
/// vertical tab.
#[inline]
pub(crate) const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | 0x0c | 0x0b)
}

/// Steps back `n` bytes after a speculative read.
///
/// A failed pushback is left in the stream's error status.
#[inline]
pub(crate) fn push_back<S: CharStream + ?Sized>(stream: &mut S, n: u8) {
    let _ = stream.unread(n);
}

/// Consumes whitespace up to the next non-whitespace byte, which is left
/// unread.
pub fn skip_whitespace<S: CharStream + ?Sized>(stream: &mut S) {
    while let Some(byte) = stream.next_char() {
        if !is_space(byte) {
            push_back(stream, 1);
            return;
        }
    }
}

/// Consumes one line terminator (`\n`, `\r\n`) if the stream is positioned on
/// one.
///
/// Returns `false` and leaves the stream where it was otherwise, with one
/// exception: a `\r` that is the very last byte of the input stays consumed.
pub fn parse_newline<S: CharStream + ?Sized>(stream: &mut S) -> bool {
    match stream.next_char() {
        Some(b'\n') => true,
        Some(b'\r') => match stream.next_char() {
            Some(b'\n') => true,
            Some(_) => {
                push_back(stream, 2);
                false
            }
            // Only a failed read gives the `\r` back; at end of input it
            // stays consumed.
            None => {
                if !stream.is_eof() {
                    push_back(stream, 1);
                }
                false
            }
        },
        Some(_) => {
            push_back(stream, 1);
            false
        }
        None => false,
    }
}

/// Returns `true` if the stream is exhausted. Otherwise the peeked byte is
/// left unread.
pub fn check_end_of_input<S: CharStream + ?Sized>(stream: &mut S) -> bool {
    match stream.next_char() {
        Some(_) => {
            push_back(stream, 1);
            false
        }
        None => stream.is_eof(),
    }
}
