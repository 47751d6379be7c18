use core::cell::Cell;
use core::marker::PhantomData;

use alloc::vec::Vec;

use crate::bytes::ByteView;
use crate::elem::ElemView;
use crate::error::ReshapeError;
use crate::ops::impl_view_ops;
use crate::pun::Pun;

// -----------------------------------------------------------------------------
// RecordView

/// A byte region reinterpreted as a sequence of `R`-typed records.
///
/// The underlying bytes are treated as successive `R::SIZE`-byte records
/// with little-endian field layout and **no alignment requirement**: a
/// record may start at any byte. Indexing `at(i)` addresses byte offset
/// `i * R::SIZE`, and every offset operator (`+`, `-`, `+=`) advances in
/// record units, matching indexing.
///
/// The source may be a [`ByteView`] (`From`/[`try_from_bytes`](Self::try_from_bytes))
/// or an already-typed [`ElemView`] ([`from_elems`](Self::from_elems));
/// both are zero-copy reinterpretations of the same memory. A byte length
/// that is not a whole number of records fails the conversion.
///
/// # Examples
///
/// ```
/// use pv_view::{ByteView, RecordView};
///
/// let mut buf: [u8; 16] = core::array::from_fn(|i| i as u8);
/// let bytes = ByteView::from(&mut buf[..]);
/// let records = RecordView::<u32>::from(bytes);
///
/// assert_eq!(records.len(), 4);
/// assert_eq!(records.get(), 0x0302_0100);
/// assert_eq!(records.at(2).get(), 0x0B0A_0908);
/// ```
pub struct RecordView<'a, R> {
    pub(crate) owner: &'a [Cell<u8>],
    pub(crate) pos: usize,
    pub(crate) len: usize,
    marker: PhantomData<fn() -> R>,
}

impl_view_ops! { RecordView<'a, R>, elem: R }

impl<'a, R: Pun> RecordView<'a, R> {
    #[inline(always)]
    pub(crate) const fn raw(owner: &'a [Cell<u8>], pos: usize, len: usize) -> Self {
        RecordView {
            owner,
            pos,
            len,
            marker: PhantomData,
        }
    }

    /// Reinterprets a byte view as records; fallible form of the `From`
    /// conversion.
    pub fn try_from_bytes(bytes: ByteView<'a>) -> Result<Self, ReshapeError> {
        assert!(R::SIZE > 0, "record types must have a non-zero size");
        if bytes.len() % R::SIZE != 0 {
            return Err(ReshapeError::Remainder {
                len: bytes.len(),
                elem: R::SIZE,
            });
        }
        Ok(RecordView::raw(bytes.owner, bytes.pos, bytes.len() / R::SIZE))
    }

    /// Reinterprets a typed element view as records; the element-sourced
    /// twin of [`try_from_bytes`](Self::try_from_bytes).
    ///
    /// # Panics
    /// Panics if the source's byte length is not a whole number of
    /// records; [`try_from_elems`](Self::try_from_elems) reports that as
    /// an error instead.
    #[track_caller]
    pub fn from_elems<T: Pun>(elems: ElemView<'a, T>) -> Self {
        match Self::try_from_elems(elems) {
            Ok(view) => view,
            Err(e) => panic!("view reinterpretation failed: {e}"),
        }
    }

    /// Fallible form of [`from_elems`](Self::from_elems).
    pub fn try_from_elems<T: Pun>(elems: ElemView<'a, T>) -> Result<Self, ReshapeError> {
        assert!(R::SIZE > 0, "record types must have a non-zero size");
        let byte_len = elems.len() * T::SIZE;
        if byte_len % R::SIZE != 0 {
            return Err(ReshapeError::Remainder {
                len: byte_len,
                elem: R::SIZE,
            });
        }
        Ok(RecordView::raw(elems.owner, elems.pos, byte_len / R::SIZE))
    }
}

/// Zero-copy reinterpretation of a byte view as records.
///
/// # Panics
/// Panics if the byte length is not a whole number of records;
/// [`RecordView::try_from_bytes`] reports that as an error instead.
impl<'a, R: Pun> From<ByteView<'a>> for RecordView<'a, R> {
    #[track_caller]
    fn from(bytes: ByteView<'a>) -> Self {
        match Self::try_from_bytes(bytes) {
            Ok(view) => view,
            Err(e) => panic!("view reinterpretation failed: {e}"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::RecordView;
    use crate::bytes::ByteView;
    use crate::error::ReshapeError;
    use crate::pun::Pun;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn little_endian_round_trip() {
        let mut buf: [u8; 16] = core::array::from_fn(|i| i as u8);
        let bytes = ByteView::from(&mut buf[..]);
        let records = RecordView::<u32>::from(bytes);

        assert_eq!(records.len(), 4);
        assert_eq!(
            records.to_vec(),
            [0x0302_0100, 0x0706_0504, 0x0B0A_0908, 0x0F0E_0D0C]
        );

        // Element 2 equals directly decoding bytes [8..12).
        assert_eq!(records.at(2).get(), u32::from_le_bytes([8, 9, 10, 11]));
    }

    #[test]
    fn remainder_is_rejected() {
        let mut buf = [0u8; 10];
        let bytes = ByteView::from(&mut buf[..]);

        assert_eq!(
            RecordView::<u32>::try_from_bytes(bytes),
            Err(ReshapeError::Remainder { len: 10, elem: 4 })
        );
    }

    #[test]
    #[should_panic(expected = "view reinterpretation failed")]
    fn remainder_conversion_panics() {
        let mut buf = [0u8; 10];
        let bytes = ByteView::from(&mut buf[..]);
        let _ = RecordView::<u32>::from(bytes);
    }

    #[test]
    fn record_unit_operators() {
        let mut buf: [u8; 16] = core::array::from_fn(|i| i as u8);
        let records = RecordView::<u32>::from(ByteView::from(&mut buf[..]));

        // All offset operators advance in record units, like indexing.
        assert_eq!(records + 1, records.at(1));
        assert_eq!((records + 1) - records, 1);
        assert_eq!((records + 1).get(), 0x0706_0504);
        assert_eq!(((records + 3) - 2).get(), 0x0706_0504);
        assert!(records + 2 > records + 1);
        assert!((records + 4).is_null());
    }

    #[test]
    fn reinterpretations_share_an_owner() {
        let mut buf: [u8; 16] = core::array::from_fn(|i| i as u8);
        let bytes = ByteView::from(&mut buf[..]);

        let all = RecordView::<u32>::from(bytes);
        let tail = RecordView::<u32>::from(bytes + 8);

        assert!(tail.same_owner(&all));
        assert_eq!(tail.offset_from(&all), 2);
        assert_eq!(tail.get(), all.at(2).get());
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn elements_reinterpreted_as_records() {
        use crate::elem::ElemView;

        let mut data = [0x2211u16, 0x4433, 0x6655, 0x8877];
        let elems = ElemView::from(&mut data[..]);
        let records = RecordView::<u32>::from_elems(elems);

        assert_eq!(records.len(), 2);
        assert_eq!(records.get(), 0x4433_2211);
        assert_eq!(records.at(1).get(), 0x8877_6655);
    }

    #[derive(Clone, Copy, PartialEq, Debug)]
    struct Rgb {
        r: u8,
        g: u8,
        b: u8,
    }

    impl Pun for Rgb {
        const SIZE: usize = 3;

        fn read(src: &[Cell<u8>]) -> Self {
            Rgb {
                r: src[0].get(),
                g: src[1].get(),
                b: src[2].get(),
            }
        }

        fn write(self, dst: &[Cell<u8>]) {
            dst[0].set(self.r);
            dst[1].set(self.g);
            dst[2].set(self.b);
        }
    }

    #[test]
    fn unaligned_structured_records() {
        let mut buf: [u8; 9] = core::array::from_fn(|i| i as u8);
        let pixels = RecordView::<Rgb>::from(ByteView::from(&mut buf[..]));

        assert_eq!(pixels.len(), 3);
        assert_eq!(pixels.at(1).get(), Rgb { r: 3, g: 4, b: 5 });

        pixels.fill(Rgb { r: 9, g: 9, b: 9 }, 2);
        assert_eq!(buf_as_vec(&pixels), [0, 1, 2, 3, 4, 5, 9, 9, 9]);
    }

    fn buf_as_vec(pixels: &RecordView<'_, Rgb>) -> Vec<u8> {
        let mut out = Vec::new();
        for i in 0..pixels.len() {
            let px = pixels.at(i).get();
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
        out
    }

    #[test]
    fn scaled_suffix_fill() {
        let mut buf = [0u8; 8];
        let records = RecordView::<u16>::from(ByteView::from(&mut buf[..]));

        records.fill(0xBEEF, 2);
        assert_eq!(records.to_vec(), [0, 0, 0xBEEF, 0xBEEF]);
        assert_eq!(buf, [0, 0, 0, 0, 0xEF, 0xBE, 0xEF, 0xBE]);
    }
}
