use super::{Blob, Empty, Kind, Pair};
use crate::{
    Absent, AsObject, AsScalar, ByteSink, ByteTreeWriter, Classify, Encoder, Error, FrameState,
    Object, Result, Scalar, to_vec,
};

/// Strip the 4-byte version prefix.
fn body(bytes: &[u8]) -> &[u8] {
    &bytes[4..]
}

#[test]
fn pair_matches_reference_bytes() {
    let bytes = to_vec(1, &Pair { flag: true, count: 42 }).unwrap();
    assert_eq!(
        bytes,
        [
            0x00, 0x00, 0x00, 0x01, // version
            0x00, 0x00, 0x00, 0x02, // field count
            0x00, 0x00, 0x00, 0x01, 0x01, // bool: length 1, content 1
            0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x2A, // u32: length 4, content 42
        ]
    );
}

#[test]
fn version_is_written_big_endian() {
    let bytes = to_vec(0x0102_0304, &Absent).unwrap();
    assert_eq!(&bytes[..4], [0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn root_count_is_not_emitted() {
    // Root scalar follows the version directly.
    let bytes = to_vec(7, &5u8).unwrap();
    assert_eq!(bytes, [0, 0, 0, 7, 0, 0, 0, 1, 5]);
}

#[test]
fn text_span() {
    let bytes = to_vec(1, "ab").unwrap();
    assert_eq!(body(&bytes), [0, 0, 0, 2, 0x61, 0x62]);

    let owned = to_vec(1, &String::from("ab")).unwrap();
    assert_eq!(owned, bytes);
}

#[test]
fn empty_text_span() {
    let bytes = to_vec(1, "").unwrap();
    assert_eq!(body(&bytes), [0, 0, 0, 0]);
}

#[test]
fn absent_marker() {
    let bytes = to_vec(1, &Absent).unwrap();
    assert_eq!(body(&bytes), [0, 0, 0, 0]);
}

#[test]
fn integer_widths() {
    assert_eq!(body(&to_vec(1, &0xABu8).unwrap()), [0, 0, 0, 1, 0xAB]);
    assert_eq!(body(&to_vec(1, &0xABCDu16).unwrap()), [0, 0, 0, 2, 0xAB, 0xCD]);
    assert_eq!(
        body(&to_vec(1, &0x0102_0304u32).unwrap()),
        [0, 0, 0, 4, 1, 2, 3, 4]
    );
    assert_eq!(
        body(&to_vec(1, &0x0102_0304_0506_0708u64).unwrap()),
        [0, 0, 0, 8, 1, 2, 3, 4, 5, 6, 7, 8]
    );
}

#[test]
fn bool_delegates_to_u8() {
    assert_eq!(body(&to_vec(1, &true).unwrap()), [0, 0, 0, 1, 1]);
    assert_eq!(body(&to_vec(1, &false).unwrap()), [0, 0, 0, 1, 0]);
    assert_eq!(to_vec(1, &true).unwrap(), to_vec(1, &1u8).unwrap());
}

#[test]
fn empty_object_writes_only_its_count() {
    let bytes = to_vec(1, &Empty).unwrap();
    assert_eq!(body(&bytes), [0, 0, 0, 0]);

    let nested = to_vec(1, &(Empty, 3u8)).unwrap();
    assert_eq!(body(&nested), [0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 1, 3]);
}

#[test]
fn option_writes_value_or_absent() {
    let some = to_vec(1, &Some(9u8)).unwrap();
    assert_eq!(some, to_vec(1, &9u8).unwrap());

    let none = to_vec(1, &None::<u8>).unwrap();
    assert_eq!(none, to_vec(1, &Absent).unwrap());
}

#[test]
fn references_and_boxes_are_transparent() {
    let value = Pair { flag: false, count: 3 };
    let direct = to_vec(2, &value).unwrap();
    assert_eq!(to_vec(2, &&value).unwrap(), direct);
    assert_eq!(to_vec(2, &Box::new(Pair { flag: false, count: 3 })).unwrap(), direct);
}

#[test]
fn enum_wrapper() {
    assert_eq!(body(&to_vec(1, &Kind::Leaf).unwrap()), [0, 0, 0, 2, 0x00, 0x01]);
    assert_eq!(body(&to_vec(1, &Kind::Branch).unwrap()), [0, 0, 0, 2, 0x01, 0x02]);
}

#[test]
fn sequences_are_objects() {
    let bytes = to_vec(1, &vec![1u8, 2]).unwrap();
    assert_eq!(body(&bytes), [0, 0, 0, 2, 0, 0, 0, 1, 1, 0, 0, 0, 1, 2]);

    assert_eq!(to_vec(1, &[1u8, 2]).unwrap(), bytes);
    assert_eq!(to_vec(1, &[1u8, 2][..]).unwrap(), bytes);
    assert_eq!(to_vec(1, &(1u8, 2u8)).unwrap(), bytes);

    let empty: Vec<u32> = Vec::new();
    assert_eq!(body(&to_vec(1, &empty).unwrap()), [0, 0, 0, 0]);
}

#[test]
fn nested_objects() {
    let tree = vec![
        Pair { flag: true, count: 1 },
        Pair { flag: false, count: 2 },
    ];
    let bytes = to_vec(1, &tree).unwrap();

    let mut expected = vec![0, 0, 0, 1, 0, 0, 0, 2];
    for (flag, count) in [(1u8, 1u8), (0, 2)] {
        expected.extend_from_slice(&[0, 0, 0, 2]);
        expected.extend_from_slice(&[0, 0, 0, 1, flag]);
        expected.extend_from_slice(&[0, 0, 0, 4, 0, 0, 0, count]);
    }
    assert_eq!(bytes, expected);
}

#[test]
fn custom_scalar_payload() {
    let bytes = to_vec(1, &Blob(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00])).unwrap();
    assert_eq!(body(&bytes), [0, 0, 0, 5, 0xDE, 0xAD, 0xBE, 0xEF, 0x00]);
}

/// Records the frame state around each field it writes.
struct StateProbe {
    seen: core::cell::RefCell<Vec<FrameState>>,
}

impl Classify for StateProbe {
    type Strategy = AsObject;
}

impl Object for StateProbe {
    fn num_fields(&self) -> usize {
        2
    }

    fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        let mut seen = self.seen.borrow_mut();
        seen.push(writer.state());
        writer.write(&1u8, 0)?;
        seen.push(writer.state());
        writer.write(&2u8, 1)?;
        seen.push(writer.state());
        Ok(())
    }
}

#[test]
fn frame_states_advance_to_sealed() {
    let probe = StateProbe {
        seen: core::cell::RefCell::new(Vec::new()),
    };
    to_vec(1, &probe).unwrap();
    assert_eq!(
        probe.seen.into_inner(),
        [
            FrameState::Active { next: 0, declared: 2 },
            FrameState::Active { next: 1, declared: 2 },
            FrameState::Sealed,
        ]
    );
}

/// Records the depth of the frames it is written into.
struct DepthProbe {
    depth: core::cell::Cell<u32>,
}

impl Classify for DepthProbe {
    type Strategy = AsObject;
}

impl Object for DepthProbe {
    fn num_fields(&self) -> usize {
        0
    }

    fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        self.depth.set(writer.depth());
        Ok(())
    }
}

#[test]
fn nested_frames_report_depth() {
    let probe = DepthProbe {
        depth: core::cell::Cell::new(0),
    };
    to_vec(1, &((&probe,),)).unwrap();
    // root frame 0, outer tuple 1, inner tuple 2, probe 3
    assert_eq!(probe.depth.get(), 3);
}

/// Field count past what the 4-byte prefix can hold.
#[cfg(target_pointer_width = "64")]
const TOO_LONG: usize = u32::MAX as usize + 1;

#[cfg(target_pointer_width = "64")]
struct WideObject;

#[cfg(target_pointer_width = "64")]
impl Classify for WideObject {
    type Strategy = AsObject;
}

#[cfg(target_pointer_width = "64")]
impl Object for WideObject {
    fn num_fields(&self) -> usize {
        TOO_LONG
    }

    fn write_fields(&self, _writer: &mut ByteTreeWriter<'_>) -> Result<()> {
        unreachable!("count is rejected before any field is written")
    }
}

#[cfg(target_pointer_width = "64")]
struct WideScalar;

#[cfg(target_pointer_width = "64")]
impl Classify for WideScalar {
    type Strategy = AsScalar;
}

#[cfg(target_pointer_width = "64")]
impl Scalar for WideScalar {
    fn size(&self) -> usize {
        TOO_LONG
    }

    fn write(&self, _sink: &mut dyn ByteSink) -> Result<()> {
        unreachable!("length is rejected before the payload is written")
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn oversized_field_count_is_an_error() {
    let mut out: Vec<u8> = Vec::new();
    let err = Encoder::new(1).encode_into(&mut out, &WideObject).unwrap_err();
    assert!(matches!(err, Error::LengthOverflow { len: TOO_LONG }));
    assert_eq!(out, [0, 0, 0, 1]);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn oversized_scalar_length_is_an_error() {
    let mut out: Vec<u8> = Vec::new();
    let err = Encoder::new(1).encode_into(&mut out, &WideScalar).unwrap_err();
    assert!(matches!(err, Error::LengthOverflow { len: TOO_LONG }));
    assert_eq!(out, [0, 0, 0, 1]);

    let nested = to_vec(1, &(1u8, WideScalar)).unwrap_err();
    assert!(matches!(nested, Error::LengthOverflow { len: TOO_LONG }));
}
