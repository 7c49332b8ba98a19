//! Error types for byte tree serialization.
//!
//! Two tiers never mix. [`Error`] covers conditions of the sink or the data
//! (capacity, I/O, lengths the wire format cannot represent) and is returned
//! to the caller. [`Violation`] covers defects in a type's serialization
//! definition; those abort the operation by panicking.

use snafu::Snafu;

/// Recoverable failure while writing a byte tree.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The sink has no room for the next write.
    #[snafu(display("sink exhausted: needed {needed} bytes, only {available} available"))]
    Exhausted {
        /// Bytes needed.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// A field count or scalar length does not fit the 4-byte length prefix.
    #[snafu(display("length {len} exceeds the 4-byte length prefix"))]
    LengthOverflow {
        /// The unrepresentable length.
        len: usize,
    },

    /// The underlying writer failed.
    #[snafu(display("sink I/O failure: {source}"), context(false))]
    Io {
        /// Error reported by the writer.
        source: std::io::Error,
    },
}

/// Result type for byte tree operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Broken invariant of the writer protocol.
///
/// A violation means a `Object`, `Scalar` or `Wrapper` implementation is
/// wrong. The stream is no longer self-describing at that point, so the
/// writer panics with the violation's message instead of returning it.
///
/// `CountRedeclared` and `CountUndeclared` guard the frame itself. Frames
/// handed to `write_fields` always have their count declared already, so
/// only the writer's own frame handling can trigger them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Violation {
    /// The field count of a frame was declared twice.
    #[snafu(display("field count already declared as {declared}"))]
    CountRedeclared {
        /// Count declared first.
        declared: u32,
    },

    /// A field was written before the frame declared its field count.
    #[snafu(display("field {index} written before the field count was declared"))]
    CountUndeclared {
        /// Index of the offending field.
        index: u32,
    },

    /// A field index skipped ahead or repeated.
    #[snafu(display("field {index} written out of order, expected field {expected}"))]
    OutOfOrder {
        /// Index the frame expected next.
        expected: u32,
        /// Index that was written.
        index: u32,
    },

    /// More fields were written than the frame declared.
    #[snafu(display("field {index} exceeds the declared field count {declared}"))]
    TooManyFields {
        /// Declared field count.
        declared: u32,
        /// Index of the excess field.
        index: u32,
    },

    /// The frame was closed with fields still missing.
    #[snafu(display("frame closed after {written} of {declared} declared fields"))]
    TooFewFields {
        /// Declared field count.
        declared: u32,
        /// Fields actually written.
        written: u32,
    },

    /// A scalar wrote a different number of bytes than its size reported.
    #[snafu(display("scalar declared {declared} bytes but wrote {written}"))]
    SizeMismatch {
        /// Size reported by `Scalar::size`.
        declared: u32,
        /// Bytes the sink received.
        written: usize,
    },

    /// A wrapper did not perform exactly one nested field write.
    #[snafu(display("wrapper performed {writes} nested field writes, expected exactly one"))]
    WrapperDelegation {
        /// Nested writes observed.
        writes: u32,
    },
}

impl Violation {
    /// Abort the current serialization.
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("byte tree usage violation: {self}")
    }
}
