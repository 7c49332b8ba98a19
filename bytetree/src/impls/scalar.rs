//! Scalar codecs: integers, text and the absent marker.

use crate::{AsScalar, ByteSink, Classify, Result, Scalar, WriteInteger};

macro_rules! impl_be_scalar {
    ($($ty:ty),+) => { $(
        impl Classify for $ty {
            type Strategy = AsScalar;
        }

        impl Scalar for $ty {
            #[inline]
            fn size(&self) -> usize {
                core::mem::size_of::<$ty>()
            }

            #[inline]
            fn write(&self, sink: &mut dyn ByteSink) -> Result<()> {
                sink.write_integer(*self)
            }
        }
    )+ };
}

impl_be_scalar!(u8, u16, u32, u64);

impl Classify for str {
    type Strategy = AsScalar;
}

impl Scalar for str {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn write(&self, sink: &mut dyn ByteSink) -> Result<()> {
        sink.write_bytes(self.as_bytes())
    }
}

impl Classify for String {
    type Strategy = AsScalar;
}

impl Scalar for String {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn write(&self, sink: &mut dyn ByteSink) -> Result<()> {
        sink.write_bytes(self.as_bytes())
    }
}

/// Explicit "no value" marker, encoded as a zero-length scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Absent;

impl Classify for Absent {
    type Strategy = AsScalar;
}

impl Scalar for Absent {
    #[inline]
    fn size(&self) -> usize {
        0
    }

    #[inline]
    fn write(&self, _sink: &mut dyn ByteSink) -> Result<()> {
        Ok(())
    }
}
