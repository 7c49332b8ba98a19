//! Serialization roles and their classification.
//!
//! Every serializable type plays exactly one role:
//!
//! - [`Object`]: an ordered sequence of fields, each written through the
//!   writer with its ordinal.
//! - [`Scalar`]: a length-prefixed run of raw bytes.
//! - [`Wrapper`]: writes itself as some other serializable value, typically
//!   by converting to a scalar.
//!
//! [`Classify`] ties a type to its role. Each role trait requires a matching
//! `Classify` impl as its supertrait, so a type cannot implement two roles:
//! the two supertrait bounds would demand two different `Strategy` types.

use crate::{ByteSink, ByteTreeWriter, Result};

/// Declares which role a type plays.
///
/// Implement it next to exactly one of [`Object`], [`Scalar`] or
/// [`Wrapper`], or let `#[derive(Object)]` / `#[derive(Wrapper)]` do both.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be written to a byte tree",
    label = "no serialization role declared for `{Self}`",
    note = "implement one of `Object`, `Scalar` or `Wrapper` for `{Self}` and classify it with `impl Classify`"
)]
pub trait Classify {
    /// One of [`AsObject`], [`AsScalar`] or [`AsWrapper`].
    type Strategy: Strategy<Self>;
}

/// Writes a classified value as one field of a frame.
///
/// Implemented only by the three marker types of this module.
pub trait Strategy<T: ?Sized>: sealed::Sealed {
    #[doc(hidden)]
    fn write_field(writer: &mut ByteTreeWriter<'_>, value: &T, index: u32) -> Result<()>;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::AsObject {}
    impl Sealed for super::AsScalar {}
    impl Sealed for super::AsWrapper {}
}

/// Strategy marker for [`Object`] types.
#[derive(Debug, Clone, Copy)]
pub enum AsObject {}

/// Strategy marker for [`Scalar`] types.
#[derive(Debug, Clone, Copy)]
pub enum AsScalar {}

/// Strategy marker for [`Wrapper`] types.
#[derive(Debug, Clone, Copy)]
pub enum AsWrapper {}

/// A value serialized as an ordered sequence of fields.
pub trait Object: Classify<Strategy = AsObject> {
    /// Number of fields [`write_fields`](Object::write_fields) will write.
    fn num_fields(&self) -> usize;

    /// Write every field with `writer.write(&field, index)`, indices
    /// `0..num_fields()` in order.
    ///
    /// # Errors
    /// Propagates sink failures from the nested writes.
    fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()>;
}

/// A value serialized into a raw run of bytes.
pub trait Scalar: Classify<Strategy = AsScalar> {
    /// Exact number of bytes [`write`](Scalar::write) appends.
    fn size(&self) -> usize;

    /// Append the encoded bytes to `sink`.
    ///
    /// # Errors
    /// Propagates sink failures.
    fn write(&self, sink: &mut dyn ByteSink) -> Result<()>;
}

/// A value serialized as another serializable value.
///
/// Useful for types with a 1-to-1 mapping to an integer, like fieldless
/// enums.
pub trait Wrapper: Classify<Strategy = AsWrapper> {
    /// Perform exactly one `writer.write(&converted, index)`.
    ///
    /// # Errors
    /// Propagates sink failures from the nested write.
    fn write(&self, writer: &mut ByteTreeWriter<'_>, index: u32) -> Result<()>;
}

impl<T: Object + ?Sized> Strategy<T> for AsObject {
    #[inline]
    fn write_field(writer: &mut ByteTreeWriter<'_>, value: &T, index: u32) -> Result<()> {
        writer.write_object(value, index)
    }
}

impl<T: Scalar + ?Sized> Strategy<T> for AsScalar {
    #[inline]
    fn write_field(writer: &mut ByteTreeWriter<'_>, value: &T, index: u32) -> Result<()> {
        writer.write_scalar(value, index)
    }
}

impl<T: Wrapper + ?Sized> Strategy<T> for AsWrapper {
    #[inline]
    fn write_field(writer: &mut ByteTreeWriter<'_>, value: &T, index: u32) -> Result<()> {
        writer.write_wrapper(value, index)
    }
}
