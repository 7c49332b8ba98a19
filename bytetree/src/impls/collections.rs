//! Sequences serialize as objects with one field per element.

use crate::{AsObject, ByteTreeWriter, Classify, Object, Result};

fn write_elements<T: Classify>(items: &[T], writer: &mut ByteTreeWriter<'_>) -> Result<()> {
    for (index, item) in (0u32..).zip(items) {
        writer.write(item, index)?;
    }
    Ok(())
}

impl<T: Classify> Classify for [T] {
    type Strategy = AsObject;
}

impl<T: Classify> Object for [T] {
    #[inline]
    fn num_fields(&self) -> usize {
        self.len()
    }

    fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        write_elements(self, writer)
    }
}

impl<T: Classify, const N: usize> Classify for [T; N] {
    type Strategy = AsObject;
}

impl<T: Classify, const N: usize> Object for [T; N] {
    #[inline]
    fn num_fields(&self) -> usize {
        N
    }

    fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        write_elements(self, writer)
    }
}

impl<T: Classify> Classify for Vec<T> {
    type Strategy = AsObject;
}

impl<T: Classify> Object for Vec<T> {
    #[inline]
    fn num_fields(&self) -> usize {
        self.len()
    }

    fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        write_elements(self, writer)
    }
}
