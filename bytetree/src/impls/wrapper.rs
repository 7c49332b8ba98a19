//! Wrappers delegating to another serializable value.

use crate::{Absent, AsWrapper, ByteTreeWriter, Classify, Result, Wrapper};

// bool - written as a one-byte integer
impl Classify for bool {
    type Strategy = AsWrapper;
}

impl Wrapper for bool {
    #[inline]
    fn write(&self, writer: &mut ByteTreeWriter<'_>, index: u32) -> Result<()> {
        writer.write(&u8::from(*self), index)
    }
}

// Option<T> - the value itself, or the absent marker
impl<T: Classify> Classify for Option<T> {
    type Strategy = AsWrapper;
}

impl<T: Classify> Wrapper for Option<T> {
    fn write(&self, writer: &mut ByteTreeWriter<'_>, index: u32) -> Result<()> {
        match self {
            Some(value) => writer.write(value, index),
            None => writer.write(&Absent, index),
        }
    }
}

impl<T: Classify + ?Sized> Classify for &T {
    type Strategy = AsWrapper;
}

impl<T: Classify + ?Sized> Wrapper for &T {
    #[inline]
    fn write(&self, writer: &mut ByteTreeWriter<'_>, index: u32) -> Result<()> {
        writer.write(*self, index)
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    type Strategy = AsWrapper;
}

impl<T: Classify + ?Sized> Wrapper for Box<T> {
    #[inline]
    fn write(&self, writer: &mut ByteTreeWriter<'_>, index: u32) -> Result<()> {
        writer.write(&**self, index)
    }
}
