//! Errors returned by the fallible `CircularBuffer` operations.

#[cfg(feature = "std")]
use std::error;
use std::fmt;

/// Broad category of an [`Error`](enum.Error.html).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The caller passed an argument the operation cannot work with.
    InvalidArgument,
    /// A searched pattern does not occur in the buffer.
    NotFound,
    /// A logical index falls outside `[-len, len)`.
    OutOfRange,
}

/// Error value returned by the fallible `CircularBuffer` operations.
///
/// Truncated writes, short reads and shrinking resizes are not errors; they
/// are reported through the return value of the respective operation.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub enum Error {
    /// An empty pattern was passed to a search operation.
    EmptyPattern,
    /// A slice was requested with a step of zero.
    ZeroStep,
    /// `index` did not find the pattern.
    NotFound,
    /// An indexed access was outside the logical content.
    OutOfRange {
        /// The index as given by the caller, before negative translation.
        index: isize,
        /// The buffer length at the time of the access.
        len: usize,
    },
}

const EMPTY_PATTERN: &str = "invalid search string length";
const ZERO_STEP: &str = "slice step cannot be zero";
const NOT_FOUND: &str = "substring not found";
const OUT_OF_RANGE: &str = "index out of range";

impl Error {
    /// Returns the category of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::EmptyPattern | Error::ZeroStep => ErrorKind::InvalidArgument,
            Error::NotFound => ErrorKind::NotFound,
            Error::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    fn message(&self) -> &'static str {
        match *self {
            Error::EmptyPattern => EMPTY_PATTERN,
            Error::ZeroStep => ZERO_STEP,
            Error::NotFound => NOT_FOUND,
            Error::OutOfRange { .. } => OUT_OF_RANGE,
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange { index, len } => {
                write!(f, "{}: the len is {} but the index is {}", OUT_OF_RANGE, len, index)
            }
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind(), self)
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    #[inline]
    fn from(value: Error) -> Self {
        let kind = match value.kind() {
            ErrorKind::NotFound => std::io::ErrorKind::NotFound,
            ErrorKind::InvalidArgument | ErrorKind::OutOfRange => std::io::ErrorKind::InvalidInput,
        };
        Self::new(kind, value)
    }
}
