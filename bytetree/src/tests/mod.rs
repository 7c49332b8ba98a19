mod encoder;
mod writer;

use crate::{
    AsObject, AsScalar, AsWrapper, ByteSink, ByteTreeWriter, Classify, Object, Result, Scalar,
    Wrapper,
};

/// Two-field object used across the tests.
pub(crate) struct Pair {
    pub flag: bool,
    pub count: u32,
}

impl Classify for Pair {
    type Strategy = AsObject;
}

impl Object for Pair {
    fn num_fields(&self) -> usize {
        2
    }

    fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        writer.write(&self.flag, 0)?;
        writer.write(&self.count, 1)
    }
}

/// Object without fields.
pub(crate) struct Empty;

impl Classify for Empty {
    type Strategy = AsObject;
}

impl Object for Empty {
    fn num_fields(&self) -> usize {
        0
    }

    fn write_fields(&self, _writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        Ok(())
    }
}

/// Fieldless enum mapped to a `u16`.
#[derive(Clone, Copy)]
pub(crate) enum Kind {
    Leaf = 1,
    Branch = 0x0102,
}

impl Classify for Kind {
    type Strategy = AsWrapper;
}

impl Wrapper for Kind {
    fn write(&self, writer: &mut ByteTreeWriter<'_>, index: u32) -> Result<()> {
        writer.write(&(*self as u16), index)
    }
}

/// Scalar with a caller-chosen payload, for byte-level checks.
pub(crate) struct Blob<'a>(pub &'a [u8]);

impl Classify for Blob<'_> {
    type Strategy = AsScalar;
}

impl Scalar for Blob<'_> {
    fn size(&self) -> usize {
        self.0.len()
    }

    fn write(&self, sink: &mut dyn ByteSink) -> Result<()> {
        sink.write_bytes(self.0)
    }
}
