//! Append-only byte destinations.
//!
//! The writer only ever appends: fixed-width big-endian integers and raw byte
//! spans. A sink tracks how many bytes it has accepted so the writer can check
//! scalar lengths against what was actually written.

use std::io;

use crate::{Error, Result};

/// Fixed-width unsigned integer that a sink can write.
///
/// All integers go on the wire big-endian.
pub trait Integer: Copy + sealed::Sealed {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Write the big-endian bytes into `out[..WIDTH]`.
    fn put_be(self, out: &mut [u8]);
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_be_integer {
    ($($ty:ty),+) => { $(
        impl sealed::Sealed for $ty {}

        impl Integer for $ty {
            const WIDTH: usize = core::mem::size_of::<$ty>();

            #[inline]
            fn put_be(self, out: &mut [u8]) {
                out[..Self::WIDTH].copy_from_slice(&self.to_be_bytes());
            }
        }
    )+ };
}

impl_be_integer!(u8, u16, u32, u64);

/// Ordered, append-only byte destination.
pub trait ByteSink {
    /// Append `bytes`. A failed write appends nothing.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept the bytes.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Number of bytes accepted so far.
    fn offset(&self) -> usize;
}

/// Integer writes for every sink, including `dyn ByteSink`.
pub trait WriteInteger: ByteSink {
    /// Append `value` as a big-endian integer of its own width.
    ///
    /// # Errors
    /// Returns an error if the sink cannot accept the bytes.
    fn write_integer<I: Integer>(&mut self, value: I) -> Result<()>;
}

impl<S: ByteSink + ?Sized> WriteInteger for S {
    #[inline]
    fn write_integer<I: Integer>(&mut self, value: I) -> Result<()> {
        let mut buf = [0u8; 8];
        value.put_be(&mut buf);
        self.write_bytes(&buf[..I::WIDTH])
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write_bytes(bytes)
    }

    #[inline]
    fn offset(&self) -> usize {
        (**self).offset()
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    #[inline]
    fn offset(&self) -> usize {
        self.len()
    }
}

/// Fixed-capacity sink over a caller-provided buffer.
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    /// Create a sink writing from the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes left before the buffer is full.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl ByteSink for SliceSink<'_> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let available = self.remaining();
        if bytes.len() > available {
            return Err(Error::Exhausted {
                needed: bytes.len(),
                available,
            });
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    #[inline]
    fn offset(&self) -> usize {
        self.pos
    }
}

/// Sink forwarding to an [`io::Write`].
///
/// Bytes go straight to the writer; wrap it in a `BufWriter` when it is
/// unbuffered.
pub struct IoSink<W> {
    inner: W,
    written: usize,
}

impl<W: io::Write> IoSink<W> {
    /// Wrap `inner`, starting the byte count at zero.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Get a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Flush the inner writer.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the flush fails.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Consume and return the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> ByteSink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    #[inline]
    fn offset(&self) -> usize {
        self.written
    }
}

/// Sink that discards its input and only counts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSink {
    count: usize,
}

impl CountingSink {
    /// Create a sink with a count of zero.
    pub const fn new() -> Self {
        Self { count: 0 }
    }
}

impl ByteSink for CountingSink {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.count += bytes.len();
        Ok(())
    }

    #[inline]
    fn offset(&self) -> usize {
        self.count
    }
}
