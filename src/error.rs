use std::fmt;

/// The error type for index-addressed operations that reject their input
/// instead of panicking.
///
/// An operation that returns an `Error` has left the deque untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A single index was outside the valid range of the operation.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The deque length at the time of the call.
        len: usize,
    },

    /// A range was empty, reversed, or reached past the end of the deque.
    InvalidRange {
        /// The resolved start of the rejected range.
        start: usize,
        /// The resolved end (exclusive) of the rejected range.
        end: usize,
        /// The deque length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for deque of length {len}")
            }
            Error::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for deque of length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        let error = Error::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(
            error.to_string(),
            "index 7 out of bounds for deque of length 3"
        );

        let error = Error::InvalidRange {
            start: 4,
            end: 2,
            len: 10,
        };
        assert_eq!(
            error.to_string(),
            "invalid range 4..2 for deque of length 10"
        );
    }
}
