//! Versioned binary serialization of object trees.
//!
//! A byte tree stream is a 4-byte format version followed by one root value.
//! Every value plays one of three roles, declared through [`Classify`]:
//!
//! - [`Object`]: `field_count(4) field*`, fields written in ordinal order
//! - [`Scalar`]: `byte_length(4) bytes[byte_length]`
//! - [`Wrapper`]: the encoding of the value it converts to
//!
//! All integers are big-endian. The writer checks the field protocol as it
//! goes: field counts are declared once, ordinals run `0..count` without gaps,
//! scalars write exactly the bytes they announce, wrappers delegate exactly
//! once. A broken check is a bug in a type's serialization and panics; sink
//! failures are returned as [`Error`].
//!
//! # Example
//!
//! ```
//! use bytetree::{ByteTreeWriter, Classify, AsObject, Object, Result};
//!
//! struct Pair {
//!     flag: bool,
//!     count: u32,
//! }
//!
//! impl Classify for Pair {
//!     type Strategy = AsObject;
//! }
//!
//! impl Object for Pair {
//!     fn num_fields(&self) -> usize {
//!         2
//!     }
//!
//!     fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
//!         writer.write(&self.flag, 0)?;
//!         writer.write(&self.count, 1)
//!     }
//! }
//!
//! let bytes = bytetree::to_vec(1, &Pair { flag: true, count: 42 }).unwrap();
//! assert_eq!(
//!     bytes,
//!     [
//!         0, 0, 0, 1, // version
//!         0, 0, 0, 2, // field count
//!         0, 0, 0, 1, 1, // flag
//!         0, 0, 0, 4, 0, 0, 0, 42, // count
//!     ]
//! );
//! ```

mod encoder;
mod error;
mod impls;
mod sink;
mod traits;
mod writer;

pub use encoder::{Encoder, to_vec};
pub use error::{Error, Result, Violation};
pub use impls::Absent;
pub use sink::{ByteSink, CountingSink, Integer, IoSink, SliceSink, WriteInteger};
pub use traits::{AsObject, AsScalar, AsWrapper, Classify, Object, Scalar, Strategy, Wrapper};
pub use writer::{ByteTreeWriter, FrameState};

// Derive macros share their names with the traits they implement.
#[cfg(feature = "derive")]
pub use bytetree_macros::{Object, Wrapper};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Absent, AsObject, AsScalar, AsWrapper, ByteSink, ByteTreeWriter, Classify, Encoder,
        Object, Result, Scalar, WriteInteger, Wrapper,
    };
}

#[cfg(test)]
mod tests;
