//! Frame-by-frame writer enforcing the byte tree field protocol.

use tracing::{debug, trace};

use crate::{
    ByteSink, Classify, Error, Object, Result, Scalar, Strategy, Violation, WriteInteger, Wrapper,
};

/// Progress of a frame through its declared fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// No field count declared yet.
    Uninitialized,
    /// `next` of `declared` fields written so far.
    Active {
        /// Index of the next field to write.
        next: u32,
        /// Declared field count.
        declared: u32,
    },
    /// Every declared field has been written.
    Sealed,
}

/// Writes the fields of one object into a byte sink.
///
/// A writer is never constructed directly. [`ByteTreeWriter::write_root`]
/// creates the root frame, and writing an [`Object`] field opens a nested
/// frame that borrows the same sink until all of its fields are written.
pub struct ByteTreeWriter<'a> {
    sink: &'a mut dyn ByteSink,
    /// `None` until the field count is declared.
    num_fields: Option<u32>,
    /// Index of the next field to write.
    current_field: u32,
    /// Nesting depth, root frame is 0.
    depth: u32,
}

impl<'a> ByteTreeWriter<'a> {
    pub(crate) fn new(sink: &'a mut dyn ByteSink, depth: u32) -> Self {
        Self {
            sink,
            num_fields: None,
            current_field: 0,
            depth,
        }
    }

    /// Write `protocol_version` followed by `root` to `sink`.
    ///
    /// The root is written as field 0 of a frame whose field count is fixed
    /// at 1. That count only exists for validation: it is never written, so
    /// the stream is exactly `version root` with no count in between.
    ///
    /// # Errors
    /// Returns the first sink failure; the sink then holds a partial stream.
    ///
    /// # Panics
    /// Panics if a type involved breaks the field protocol.
    pub fn write_root<T: Classify + ?Sized>(
        protocol_version: u32,
        sink: &'a mut dyn ByteSink,
        root: &T,
    ) -> Result<()> {
        debug!(protocol_version, offset = sink.offset(), "writing byte tree");
        sink.write_integer(protocol_version)?;

        let mut writer = Self::new(sink, 0);
        writer.num_fields = Some(1);
        writer.write(root, 0)?;
        writer.seal();
        Ok(())
    }

    /// Write `value` as field `index` of this frame.
    ///
    /// # Errors
    /// Propagates sink failures.
    ///
    /// # Panics
    /// Panics if `index` is not the next expected field, exceeds the declared
    /// field count, or if `value`'s serialization breaks the protocol.
    #[inline]
    pub fn write<T: Classify + ?Sized>(&mut self, value: &T, index: u32) -> Result<()> {
        <T::Strategy as Strategy<T>>::write_field(self, value, index)
    }

    /// Current state of this frame.
    pub fn state(&self) -> FrameState {
        match self.num_fields {
            None => FrameState::Uninitialized,
            Some(declared) if self.current_field == declared => FrameState::Sealed,
            Some(declared) => FrameState::Active {
                next: self.current_field,
                declared,
            },
        }
    }

    /// Index of the next field this frame expects.
    pub fn next_index(&self) -> u32 {
        self.current_field
    }

    /// Declared field count, if any.
    pub fn num_fields(&self) -> Option<u32> {
        self.num_fields
    }

    /// Nesting depth of this frame; the root frame is 0.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Declare and emit the field count. The count is only recorded once the
    /// sink accepted it.
    pub(crate) fn declare_num_fields(&mut self, num_fields: usize) -> Result<()> {
        if let Some(declared) = self.num_fields {
            Violation::CountRedeclared { declared }.raise();
        }
        let num_fields = wire_len(num_fields)?;
        self.sink.write_integer(num_fields)?;
        self.num_fields = Some(num_fields);
        Ok(())
    }

    /// Check that `index` is the next field and count it.
    #[track_caller]
    fn advance(&mut self, index: u32) {
        let Some(declared) = self.num_fields else {
            Violation::CountUndeclared { index }.raise();
        };
        if index != self.current_field {
            Violation::OutOfOrder {
                expected: self.current_field,
                index,
            }
            .raise();
        }
        if index >= declared {
            Violation::TooManyFields { declared, index }.raise();
        }
        self.current_field += 1;
    }

    /// Close the frame, which must have written every declared field.
    fn seal(self) {
        let declared = self.num_fields.unwrap_or(0);
        if self.current_field != declared {
            Violation::TooFewFields {
                declared,
                written: self.current_field,
            }
            .raise();
        }
        trace!(depth = self.depth, num_fields = declared, "sealed frame");
    }

    pub(crate) fn write_object<T: Object + ?Sized>(&mut self, value: &T, index: u32) -> Result<()> {
        self.advance(index);

        let mut nested = ByteTreeWriter::new(&mut *self.sink, self.depth + 1);
        nested.declare_num_fields(value.num_fields())?;
        trace!(
            depth = nested.depth,
            index,
            num_fields = ?nested.num_fields,
            "opened frame"
        );
        value.write_fields(&mut nested)?;
        nested.seal();
        Ok(())
    }

    pub(crate) fn write_scalar<T: Scalar + ?Sized>(&mut self, value: &T, index: u32) -> Result<()> {
        self.advance(index);

        let size = wire_len(value.size())?;
        self.sink.write_integer(size)?;

        let start = self.sink.offset();
        value.write(&mut *self.sink)?;
        let written = self.sink.offset() - start;
        if written != size as usize {
            Violation::SizeMismatch {
                declared: size,
                written,
            }
            .raise();
        }
        Ok(())
    }

    pub(crate) fn write_wrapper<T: Wrapper + ?Sized>(&mut self, value: &T, index: u32) -> Result<()> {
        let before = self.current_field;
        value.write(self, index)?;
        let writes = self.current_field - before;
        if writes != 1 {
            Violation::WrapperDelegation { writes }.raise();
        }
        Ok(())
    }
}

/// Convert a length to its 4-byte wire form.
fn wire_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::LengthOverflow { len })
}
