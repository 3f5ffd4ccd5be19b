use thiserror::Error;

/// Error code reported for read failures that carry no OS error number.
pub const EIO: i32 = 5;
/// Error code reported for rejected seek arguments.
pub const EINVAL: i32 = 22;

/// Error status of a [`CharStream`](crate::CharStream).
///
/// A stream keeps at most one of these at a time; it is replaced (or cleared)
/// by the next read or seek. End of input is not an error and is tracked
/// separately through [`CharStream::is_eof`](crate::CharStream::is_eof).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// The seek target was negative or the whence value was not recognized.
    #[error("invalid argument")]
    InvalidArgument,
    /// The backend failed to read and did not report an OS error number.
    #[error("input/output error")]
    Io,
    /// The operating system rejected the operation with this error number.
    #[error("os error {0}")]
    Os(i32),
}

impl StreamError {
    /// Numeric code of this error. A stream without an error reports `0`
    /// through [`CharStream::error_code`](crate::CharStream::error_code).
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            StreamError::InvalidArgument => EINVAL,
            StreamError::Io => EIO,
            StreamError::Os(code) => code,
        }
    }
}

#[cfg(feature = "std")]
impl From<&std::io::Error> for StreamError {
    fn from(err: &std::io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) => StreamError::Os(code),
            None if err.kind() == std::io::ErrorKind::InvalidInput => {
                StreamError::InvalidArgument
            }
            None => StreamError::Io,
        }
    }
}
