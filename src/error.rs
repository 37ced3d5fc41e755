use std::sync::Arc;

use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers the failure modes of both buffer cursors: capacity violations, deferred
/// update mismatches, seek targets outside the allocated region, stream exhaustion, and I/O
/// errors propagated from the underlying transport.
///
/// The enum is [`Clone`] because buffers keep the *first* error they encounter in a sticky
/// fault slot while some operations (`seek`, `fill_from`, `flush_to`) also hand the same error
/// back to the caller directly.
///
/// # Error Categories
///
/// ## Cursor Errors
/// - [`Error::OutOfBounds`] - Read or write past the available bytes
/// - [`Error::SeekOutOfRange`] - Seek target beyond the allocated capacity
///
/// ## Deferred Write Errors
/// - [`Error::LengthMismatch`] - Span update with data of the wrong length
///
/// ## Stream Errors
/// - [`Error::ShortRead`] - Stream ended before the requested byte count
/// - [`Error::WrappedStorage`] - Refill attempted on externally owned memory
/// - [`Error::Io`] - I/O errors from the underlying stream
///
/// ## Decode Errors
/// - [`Error::InvalidUtf8`] - String read over bytes that are not valid UTF-8
/// - [`Error::VarintOverflow`] - Variable-length integer wider than 64 bits
///
/// # Examples
///
/// ```rust
/// use wirebuf::{Error, ReadBuffer};
///
/// let mut buffer = ReadBuffer::wrap(&[0x01, 0x02]);
/// let value = buffer.read::<u32>(); // only 2 bytes available
/// assert_eq!(value, 0);
/// assert!(matches!(buffer.err(), Some(Error::OutOfBounds)));
/// ```
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// An out of bound access was attempted on the buffer.
    ///
    /// This error occurs when a read or write would extend past the bytes available to the
    /// cursor - past the fill limit of a [`crate::ReadBuffer`], or past the fixed bound of a
    /// wrapped [`crate::WriteBuffer`] that cannot grow.
    #[error("Out of bound access would have occurred!")]
    OutOfBounds,

    /// A deferred span update was called with data of the wrong length.
    ///
    /// [`crate::DeferredBytes::update`] requires data of exactly the reserved length; the
    /// mismatch is recorded when `update` is called, not deferred to flush time.
    #[error("Deferred update length mismatch - reserved {expected} bytes, got {actual}")]
    LengthMismatch {
        /// The byte width reserved when the handle was created
        expected: usize,
        /// The length of the data supplied to the update
        actual: usize,
    },

    /// A seek target lies beyond the buffer's allocated capacity.
    #[error("Seek target {pos} is beyond the allocated capacity {capacity}")]
    SeekOutOfRange {
        /// The requested cursor position
        pos: usize,
        /// The capacity the buffer had when the seek was attempted
        capacity: usize,
    },

    /// The stream was exhausted before the requested number of bytes arrived.
    ///
    /// Returned (and recorded) by [`crate::ReadBuffer::fill_from`] when the source ends early.
    #[error("Short read - wanted {wanted} bytes, stream ended after {got}")]
    ShortRead {
        /// The number of bytes requested from the stream
        wanted: usize,
        /// The number of bytes actually delivered before exhaustion
        got: usize,
    },

    /// A string read hit bytes that are not valid UTF-8.
    #[error("Invalid UTF-8 in string read - {0}")]
    InvalidUtf8(std::str::Utf8Error),

    /// A variable-length integer carried continuation bits past the u64 range.
    #[error("Varint continuation exceeds the u64 range")]
    VarintOverflow,

    /// The operation requires owned storage, but the buffer wraps external memory.
    ///
    /// Wrapped buffers share a caller-owned slice and can neither grow nor be refilled.
    #[error("Operation requires owned storage, buffer wraps external memory")]
    WrappedStorage,

    /// I/O error from the underlying stream.
    ///
    /// Wraps errors surfaced by `fill_from`/`flush_to`. The [`Arc`] keeps the variant
    /// cloneable so the sticky fault slot and the direct return can carry the same error.
    #[error("{0}")]
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(Arc::new(err))
    }
}
