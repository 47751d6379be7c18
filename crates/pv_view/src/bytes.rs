use core::cell::Cell;

use alloc::vec::Vec;

use crate::ops::impl_view_ops;

// -----------------------------------------------------------------------------
// ByteView

/// A bounded window over raw byte memory with pointer semantics.
///
/// Position 0 is "the current pointer": [`get`](Self::get)/[`set`](Self::set)
/// dereference it, `view + n` advances it, [`at`](Self::at) is the
/// `p[i]`-style re-anchoring that yields another view (not a scalar), and
/// [`NULL`](Self::NULL) is the failure sentinel.
///
/// A `ByteView` never owns memory; it is a `Copy` triple of backing
/// allocation, byte position and remaining length. Copies alias the same
/// bytes, and writes through one copy are visible through all of them.
///
/// # Examples
///
/// ```
/// use pv_view::ByteView;
///
/// let mut buf = [10u8, 20, 30, 40];
/// let p = ByteView::from(&mut buf[..]);
///
/// assert_eq!(p.get(), 10);
/// assert_eq!((p + 2).get(), 30);
/// assert_eq!(p.at(2), p + 2);
/// assert_eq!((p + 3) - p, 3);
///
/// let q = p + 4;
/// assert!(q.is_null());
/// ```
pub struct ByteView<'a> {
    pub(crate) owner: &'a [Cell<u8>],
    pub(crate) pos: usize,
    pub(crate) len: usize,
}

impl_view_ops! { ByteView<'a>, elem: u8 }

impl<'a> ByteView<'a> {
    #[inline(always)]
    pub(crate) const fn raw(owner: &'a [Cell<u8>], pos: usize, len: usize) -> Self {
        ByteView { owner, pos, len }
    }

    /// Creates a root view over a shared cell slice, covering all of it.
    #[inline]
    pub const fn from_cells(cells: &'a [Cell<u8>]) -> Self {
        ByteView {
            owner: cells,
            pos: 0,
            len: cells.len(),
        }
    }

    /// The visible bytes as a flat cell slice, for bulk copies or hand-off
    /// to length-based APIs.
    #[inline]
    pub fn as_cells(&self) -> &'a [Cell<u8>] {
        let owner = self.owner;
        &owner[self.pos..self.pos + self.len]
    }

    /// The byte cell at position 0, the read-modify form of dereference.
    ///
    /// # Panics
    /// Panics if the view is null.
    #[inline]
    #[track_caller]
    pub fn head(&self) -> &'a Cell<u8> {
        assert!(self.len >= 1, "dereferenced a null view");
        let owner = self.owner;
        &owner[self.pos]
    }

    /// Position of the first byte equal to `value`.
    ///
    /// A miss returns 0, which is indistinguishable from a hit at
    /// position 0; ported scan loops depend on this shape. Callers that
    /// care must check `get() == value` themselves; the miss path logs at
    /// debug level so call sites can be audited.
    pub fn first_index_of(&self, value: u8) -> usize {
        for (i, cell) in self.as_cells().iter().enumerate() {
            if cell.get() == value {
                return i;
            }
        }
        log::debug!("first_index_of missed value {value:#04x}; returning 0");
        0
    }
}

/// Root view over a caller-owned byte buffer, covering all of it.
impl<'a> From<&'a mut [u8]> for ByteView<'a> {
    #[inline]
    fn from(buf: &'a mut [u8]) -> Self {
        ByteView::from_cells(Cell::from_mut(buf).as_slice_of_cells())
    }
}

// -----------------------------------------------------------------------------
// Tests
