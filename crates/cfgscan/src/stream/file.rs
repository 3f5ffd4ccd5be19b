use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use tracing::debug;

use super::{CharStream, Whence};
use crate::StreamError;

/// A [`CharStream`] reading from a buffered file handle.
///
/// [`open`](FileCharStream::open) never fails outright: if the file cannot be
/// opened the stream carries the failure in [`error`](CharStream::error), every
/// read returns `None` and every seek returns that same error. Check
/// [`is_open`](FileCharStream::is_open) before use.
#[derive(Debug)]
pub struct FileCharStream {
    reader: Option<BufReader<File>>,
    eof: bool,
    error: Option<StreamError>,
}

impl FileCharStream {
    /// Opens `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Self::from_file(file),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "failed to open char stream");
                Self {
                    reader: None,
                    eof: false,
                    error: Some(StreamError::from(&err)),
                }
            }
        }
    }

    /// Wraps an already open file, reading from its current position.
    #[must_use]
    pub fn from_file(file: File) -> Self {
        Self {
            reader: Some(BufReader::new(file)),
            eof: false,
            error: None,
        }
    }

    /// Returns `false` if the file failed to open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }
}

impl CharStream for FileCharStream {
    fn next_char(&mut self) -> Option<u8> {
        let reader = self.reader.as_mut()?;
        let mut byte = [0u8; 1];
        loop {
            match reader.read(&mut byte) {
                Ok(0) => {
                    self.eof = true;
                    self.error = None;
                    return None;
                }
                Ok(_) => {
                    self.eof = false;
                    self.error = None;
                    return Some(byte[0]);
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    debug!(error = %err, "char stream read failed");
                    self.eof = false;
                    self.error = Some(StreamError::from(&err));
                    return None;
                }
            }
        }
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> Result<(), StreamError> {
        let Some(reader) = self.reader.as_mut() else {
            return Err(self.error.unwrap_or(StreamError::Io));
        };
        self.error = None;

        let moved = match whence {
            // Relative moves stay inside the read buffer when they can.
            Whence::Current => reader.seek_relative(offset),
            Whence::Start => match u64::try_from(offset) {
                Ok(offset) => reader.seek(SeekFrom::Start(offset)).map(drop),
                Err(_) => Err(io::ErrorKind::InvalidInput.into()),
            },
            Whence::End => reader.seek(SeekFrom::End(offset)).map(drop),
        };

        match moved {
            Ok(()) => {
                self.eof = false;
                Ok(())
            }
            Err(err) => {
                debug!(offset, ?whence, error = %err, "char stream seek failed");
                let err = StreamError::from(&err);
                self.error = Some(err);
                Err(err)
            }
        }
    }

    fn error(&self) -> Option<StreamError> {
        self.error
    }

    fn is_eof(&self) -> bool {
        self.eof
    }
}
