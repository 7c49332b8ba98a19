//! Serialization roles for common types.
//!
//! | Type                                | Role    | Encoding                         |
//! |-------------------------------------|---------|----------------------------------|
//! | `u8`, `u16`, `u32`, `u64`           | Scalar  | big-endian, length = width       |
//! | `str`, `String`                     | Scalar  | raw UTF-8, length = byte count   |
//! | [`Absent`]                          | Scalar  | zero bytes                       |
//! | `bool`                              | Wrapper | `u8`, 0 or 1                     |
//! | `Option<T>`                         | Wrapper | `T`, or [`Absent`] when `None`   |
//! | `&T`, `Box<T>`                      | Wrapper | `T`                              |
//! | `[T]`, `[T; N]`, `Vec<T>`, tuples   | Object  | one field per element            |

pub mod collections;
pub mod scalar;
pub mod tuple;
pub mod wrapper;

pub use scalar::Absent;
