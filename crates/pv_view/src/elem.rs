use core::cell::Cell;
use core::marker::PhantomData;

use alloc::vec::Vec;

use crate::ops::impl_view_ops;
use crate::pun::Pun;

// -----------------------------------------------------------------------------
// ElemView

/// A bounded window over an array of `T`: the analogue of a typed pointer.
///
/// The contract is [`ByteView`](crate::ByteView)'s, per element instead of
/// per byte: every offset, index and length is counted in elements of
/// `T::SIZE` bytes, and dereference goes through `T`'s little-endian
/// [`Pun`] codec.
///
/// A root view is created from a caller-owned slice; the cast to bytes is
/// zero-copy, so the caller's memory is shared under the little-endian
/// layout convention for as long as the view lives.
///
/// # Examples
///
/// ```
/// use pv_view::ElemView;
///
/// let mut data = [0u32; 4];
/// let p = ElemView::from(&mut data[..]);
///
/// p.set(0xDEAD_BEEF);
/// p.at(3).set(7);
///
/// assert_eq!(p.get(), 0xDEAD_BEEF);
/// assert_eq!((p + 3).get(), 7);
/// assert_eq!((p + 3) - p, 3);
/// ```
pub struct ElemView<'a, T> {
    pub(crate) owner: &'a [Cell<u8>],
    pub(crate) pos: usize,
    pub(crate) len: usize,
    marker: PhantomData<fn() -> T>,
}

impl_view_ops! { ElemView<'a, T>, elem: T }

impl<'a, T: Pun> ElemView<'a, T> {
    #[inline(always)]
    pub(crate) const fn raw(owner: &'a [Cell<u8>], pos: usize, len: usize) -> Self {
        ElemView {
            owner,
            pos,
            len,
            marker: PhantomData,
        }
    }
}

/// Root view over a caller-owned element slice, covering all of it.
impl<'a, T: Pun + bytemuck::Pod> From<&'a mut [T]> for ElemView<'a, T> {
    #[inline]
    fn from(buf: &'a mut [T]) -> Self {
        assert!(
            T::SIZE == size_of::<T>(),
            "Pun::SIZE must match the native size for slice-backed views",
        );
        let len = buf.len();
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(buf);
        ElemView::raw(Cell::from_mut(bytes).as_slice_of_cells(), 0, len)
    }
}

// -----------------------------------------------------------------------------
// Tests
