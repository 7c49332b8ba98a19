use core::cell::Cell;

use super::{Empty, Pair};
use crate::{AsObject, ByteTreeWriter, Classify, Encoder, Object, Result, to_vec};

#[test]
fn encoder_defaults() {
    let encoder = Encoder::new(3);
    assert_eq!(encoder.version(), 3);
    assert_eq!(encoder.capacity_hint(), Encoder::DEFAULT_CAPACITY);
    assert_eq!(encoder.with_capacity_hint(16).capacity_hint(), 16);
}

#[test]
fn encode_matches_to_vec() {
    let value = Pair { flag: false, count: 0xFFFF_FFFF };
    let bytes = Encoder::new(5).encode(&value).unwrap();
    assert_eq!(bytes, to_vec(5, &value).unwrap());
    assert_eq!(&bytes[..4], [0, 0, 0, 5]);
}

#[test]
fn encoded_len_matches_output() {
    let value = (Pair { flag: true, count: 1 }, "hello", Empty, None::<u16>);
    let encoder = Encoder::new(1);
    assert_eq!(
        encoder.encoded_len(&value).unwrap(),
        encoder.encode(&value).unwrap().len()
    );
}

#[test]
fn encode_to_writer_returns_writer() {
    let value = Pair { flag: true, count: 42 };
    let out = Encoder::new(1).encode_to_writer(Vec::<u8>::new(), &value).unwrap();
    assert_eq!(out, to_vec(1, &value).unwrap());
}

#[test]
fn version_only_changes_the_prefix() {
    let value = Pair { flag: true, count: 42 };
    let v1 = to_vec(1, &value).unwrap();
    let v2 = to_vec(2, &value).unwrap();
    assert_ne!(v1[..4], v2[..4]);
    assert_eq!(v1[4..], v2[4..]);
}

/// Counts how often its fields are written.
struct Tally {
    calls: Cell<u32>,
}

impl Classify for Tally {
    type Strategy = AsObject;
}

impl Object for Tally {
    fn num_fields(&self) -> usize {
        1
    }

    fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        writer.write(&self.calls.get(), 0)
    }
}

#[test]
fn to_vec_writes_fields_once() {
    let tally = Tally { calls: Cell::new(0) };
    let bytes = to_vec(1, &tally).unwrap();
    assert_eq!(tally.calls.get(), 1);
    assert_eq!(bytes, [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 4, 0, 0, 0, 1]);
}
