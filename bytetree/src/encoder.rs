use std::io;

use crate::{ByteSink, ByteTreeWriter, Classify, CountingSink, IoSink, Result};

/// Writes versioned byte tree streams.
///
/// Holds the settings shared by every stream it writes: the format version
/// that prefixes the output and the initial buffer capacity for
/// [`encode`](Encoder::encode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    version: u32,
    capacity_hint: usize,
}

impl Encoder {
    /// Buffer capacity used by [`encode`](Encoder::encode) unless overridden.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create an encoder writing format `version`.
    pub const fn new(version: u32) -> Self {
        Self {
            version,
            capacity_hint: Self::DEFAULT_CAPACITY,
        }
    }

    /// Set the initial capacity of buffers returned by
    /// [`encode`](Encoder::encode).
    #[must_use]
    pub const fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// Format version written at the start of every stream.
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Initial capacity of buffers returned by [`encode`](Encoder::encode).
    pub const fn capacity_hint(&self) -> usize {
        self.capacity_hint
    }

    /// Encode `root` into a new buffer.
    ///
    /// # Errors
    /// Returns [`Error::LengthOverflow`](crate::Error::LengthOverflow) if a
    /// length does not fit its prefix.
    pub fn encode<T: Classify + ?Sized>(&self, root: &T) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.capacity_hint);
        self.encode_into(&mut out, root)?;
        Ok(out)
    }

    /// Encode `root` into `sink`.
    ///
    /// # Errors
    /// Returns the first sink failure. The sink keeps whatever was written
    /// before it, which is not a valid stream.
    pub fn encode_into<T: Classify + ?Sized>(&self, sink: &mut dyn ByteSink, root: &T) -> Result<()> {
        ByteTreeWriter::write_root(self.version, sink, root)
    }

    /// Encode `root` into `writer`, returning the writer.
    ///
    /// # Errors
    /// Returns [`Error::Io`](crate::Error::Io) if the writer fails.
    pub fn encode_to_writer<W: io::Write, T: Classify + ?Sized>(&self, writer: W, root: &T) -> Result<W> {
        let mut sink = IoSink::new(writer);
        self.encode_into(&mut sink, root)?;
        sink.flush()?;
        Ok(sink.into_inner())
    }

    /// Exact length in bytes of the stream [`encode`](Encoder::encode) would
    /// produce for `root`.
    ///
    /// # Errors
    /// Returns [`Error::LengthOverflow`](crate::Error::LengthOverflow) if a
    /// length does not fit its prefix.
    pub fn encoded_len<T: Classify + ?Sized>(&self, root: &T) -> Result<usize> {
        let mut sink = CountingSink::new();
        self.encode_into(&mut sink, root)?;
        Ok(sink.offset())
    }
}

/// Encode `root` as a stream of format `version`.
///
/// Writes in a single pass; use [`Encoder::encoded_len`] to size a buffer
/// up front.
///
/// # Errors
/// Returns [`Error::LengthOverflow`](crate::Error::LengthOverflow) if a
/// length does not fit its prefix.
pub fn to_vec<T: Classify + ?Sized>(version: u32, root: &T) -> Result<Vec<u8>> {
    Encoder::new(version).encode(root)
}
