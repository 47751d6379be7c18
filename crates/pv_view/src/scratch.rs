use core::cell::Cell;
use core::marker::PhantomData;

use alloc::vec;
use alloc::vec::Vec;

use crate::bytes::ByteView;
use crate::ops::impl_view_ops;
use crate::pun::Pun;

// -----------------------------------------------------------------------------
// ScratchView

/// A non-escaping view for short-lived working buffers.
///
/// `ScratchView` has the same per-element contract as
/// [`ElemView`](crate::ElemView), with one restriction enforced at the type
/// level: the view value cannot be stored anywhere that outlives the call
/// that produced it. Every constructor is closure-scoped: the closure
/// receives the view under a higher-ranked lifetime it cannot name, so the
/// view can neither be returned, kept in outer state, nor captured into a
/// deferred continuation. Computed *results* leave the closure freely.
///
/// Three ways in:
/// - [`with_zeroed`](Self::with_zeroed) allocates a fresh zeroed buffer of
///   the given element count;
/// - [`with_slice`](Self::with_slice) borrows a plain contiguous element
///   range;
/// - [`with_bytes`](Self::with_bytes) is the reinterpreting cast from a
///   [`ByteView`].
///
/// # Examples
///
/// ```
/// use pv_view::ScratchView;
///
/// let sum = ScratchView::<u32>::with_zeroed(4, |scratch| {
///     scratch.fill(7, 1);
///     scratch.set(1);
///     (0..scratch.len()).map(|i| scratch.at(i).get()).sum::<u32>()
/// });
/// assert_eq!(sum, 1 + 7 + 7 + 7);
/// ```
pub struct ScratchView<'a, T> {
    pub(crate) owner: &'a [Cell<u8>],
    pub(crate) pos: usize,
    pub(crate) len: usize,
    marker: PhantomData<fn() -> T>,
}

impl_view_ops! { ScratchView<'a, T>, elem: T }

impl<'a, T: Pun> ScratchView<'a, T> {
    #[inline(always)]
    pub(crate) const fn raw(owner: &'a [Cell<u8>], pos: usize, len: usize) -> Self {
        ScratchView {
            owner,
            pos,
            len,
            marker: PhantomData,
        }
    }

    /// Runs `f` over a freshly allocated, zeroed buffer of `len` elements.
    pub fn with_zeroed<R>(len: usize, f: impl FnOnce(ScratchView<'_, T>) -> R) -> R {
        let mut buf = vec![0u8; len * T::SIZE];
        let cells = Cell::from_mut(buf.as_mut_slice()).as_slice_of_cells();
        f(ScratchView::raw(cells, 0, len))
    }

    /// Runs `f` over a view of a caller-owned element slice.
    pub fn with_slice<R>(buf: &mut [T], f: impl FnOnce(ScratchView<'_, T>) -> R) -> R
    where
        T: bytemuck::Pod,
    {
        assert!(
            T::SIZE == size_of::<T>(),
            "Pun::SIZE must match the native size for slice-backed views",
        );
        let len = buf.len();
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(buf);
        f(ScratchView::raw(Cell::from_mut(bytes).as_slice_of_cells(), 0, len))
    }

    /// Runs `f` over a byte view reinterpreted as `T` elements.
    ///
    /// # Panics
    /// Panics if the byte length is not a whole number of elements.
    #[track_caller]
    pub fn with_bytes<R>(bytes: ByteView<'_>, f: impl FnOnce(ScratchView<'_, T>) -> R) -> R {
        assert!(T::SIZE > 0, "scratch element types must have a non-zero size");
        assert!(
            bytes.len() % T::SIZE == 0,
            "byte length {} is not a whole number of {}-byte elements",
            bytes.len(),
            T::SIZE,
        );
        f(ScratchView::raw(bytes.owner, bytes.pos, bytes.len() / T::SIZE))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ScratchView;
    use crate::bytes::ByteView;

    #[test]
    fn fresh_buffers_are_zeroed() {
        ScratchView::<u64>::with_zeroed(3, |scratch| {
            assert_eq!(scratch.len(), 3);
            assert_eq!(scratch.to_vec(), [0, 0, 0]);
        });
    }

    #[test]
    fn results_escape_views_do_not() {
        let product = ScratchView::<u32>::with_zeroed(3, |scratch| {
            scratch.fill(2, 0);
            scratch.at(1).set(5);
            (0..scratch.len()).map(|i| scratch.at(i).get()).product::<u32>()
        });
        assert_eq!(product, 2 * 5 * 2);
    }

    #[test]
    fn borrowed_slices_keep_the_writes() {
        let mut buf = [1u8, 2, 3, 4];
        let first = ScratchView::<u8>::with_slice(&mut buf, |scratch| {
            scratch.fill(0xEE, 2);
            scratch.get()
        });
        assert_eq!(first, 1);
        assert_eq!(buf, [1, 2, 0xEE, 0xEE]);
    }

    #[test]
    fn reinterpreting_cast_from_bytes() {
        let mut buf: [u8; 8] = core::array::from_fn(|i| i as u8);
        let bytes = ByteView::from(&mut buf[..]);

        ScratchView::<u32>::with_bytes(bytes, |scratch| {
            assert_eq!(scratch.len(), 2);
            assert_eq!(scratch.get(), 0x0302_0100);
            scratch.at(1).set(0xFFFF_FFFF);
        });

        assert_eq!(bytes.to_vec(), [0, 1, 2, 3, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    #[should_panic(expected = "not a whole number")]
    fn torn_cast_panics() {
        let mut buf = [0u8; 6];
        let bytes = ByteView::from(&mut buf[..]);
        ScratchView::<u32>::with_bytes(bytes, |_| {});
    }

    #[test]
    fn pointer_arithmetic_inside_the_call() {
        ScratchView::<u16>::with_zeroed(4, |scratch| {
            let p = scratch + 1;
            assert!(p > scratch);
            assert_eq!(p - scratch, 1);
            assert_eq!(p.len(), 3);
            p.set(7);
            assert_eq!(scratch.at(1).get(), 7);
        });
    }

    #[test]
    fn single_threaded_by_construction() {
        static_assertions::assert_not_impl_any!(ScratchView<'static, u8>: Send, Sync);
    }
}
