use crate::{AsObject, ByteTreeWriter, Classify, Object, Result};

macro_rules! impl_tuple {
    ($len:literal; $($idx:tt $T:ident),+) => {
        impl<$($T: Classify),+> Classify for ($($T,)+) {
            type Strategy = AsObject;
        }

        impl<$($T: Classify),+> Object for ($($T,)+) {
            #[inline]
            fn num_fields(&self) -> usize {
                $len
            }

            fn write_fields(&self, writer: &mut ByteTreeWriter<'_>) -> Result<()> {
                $(
                    writer.write(&self.$idx, $idx)?;
                )+
                Ok(())
            }
        }
    };
}

impl_tuple!(1; 0 A);
impl_tuple!(2; 0 A, 1 B);
impl_tuple!(3; 0 A, 1 B, 2 C);
impl_tuple!(4; 0 A, 1 B, 2 C, 3 D);
impl_tuple!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
impl_tuple!(6; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_tuple!(7; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_tuple!(8; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
