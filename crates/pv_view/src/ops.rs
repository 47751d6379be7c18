//! Shared contract of the view family.
//!
//! Every view type is the same `(owner, pos, len)` triple over a slice of
//! byte cells; [`impl_view_ops!`] generates the common operations, so the
//! individual types differ only in element-size handling and construction.
//!
//! Conventions the generated code upholds:
//!
//! - `pos` is the byte position of element 0 inside `owner`; `len` counts
//!   elements; `pos + len * ELEM <= owner.len()` always.
//! - A view is null iff `len == 0`. The `NULL` constant additionally has no
//!   owner, which is what excludes it from ordering and subtraction.
//! - Precondition violations panic in every build profile. The `debug`
//!   feature alias only adds a redundant whole-invariant re-check on
//!   re-anchoring operations.

macro_rules! impl_view_ops {
    ($name:ident<$lt:lifetime $(, $gen:ident)?>, elem: $elem:ty) => {
        impl<$lt $(, $gen: crate::pun::Pun)?> $name<$lt $(, $gen)?> {
            /// Size of one element in bytes.
            pub(crate) const ELEM: usize = <$elem as crate::pun::Pun>::SIZE;

            /// The canonical null view: zero length, no backing allocation.
            ///
            /// This is the shared failure sentinel of the ported
            /// algorithms, standing in the position a null pointer would
            /// occupy.
            pub const NULL: Self = Self::raw(&[], 0, 0);

            /// True iff the view exposes no elements.
            #[inline(always)]
            pub const fn is_null(&self) -> bool {
                self.len == 0
            }

            /// Number of elements visible through this view.
            #[inline(always)]
            pub const fn len(&self) -> usize {
                self.len
            }

            #[inline(always)]
            pub(crate) const fn has_owner(&self) -> bool {
                !self.owner.is_empty()
            }

            /// Byte cells of element `index`. Callers must have checked
            /// `index < len`.
            #[inline]
            fn window(&self, index: usize) -> &[core::cell::Cell<u8>] {
                let start = self.pos + index * Self::ELEM;
                &self.owner[start..start + Self::ELEM]
            }

            #[inline]
            fn anchored(owner: &$lt [core::cell::Cell<u8>], pos: usize, len: usize) -> Self {
                let view = Self::raw(owner, pos, len);
                view.debug_validate();
                view
            }

            #[inline(always)]
            fn debug_validate(&self) {
                crate::cfg::debug! {
                    assert!(
                        self.pos + self.len * Self::ELEM <= self.owner.len(),
                        "view window escaped its backing allocation",
                    );
                }
            }

            /// Reads the element at position 0.
            ///
            /// # Panics
            /// Panics if the view is null.
            #[inline]
            #[track_caller]
            pub fn get(&self) -> $elem {
                assert!(self.len >= 1, "dereferenced a null view");
                <$elem as crate::pun::Pun>::read(self.window(0))
            }

            /// Writes the element at position 0. The write is visible to
            /// every view aliasing this region.
            ///
            /// # Panics
            /// Panics if the view is null.
            #[inline]
            #[track_caller]
            pub fn set(&self, value: $elem) {
                assert!(self.len >= 1, "dereferenced a null view");
                crate::pun::Pun::write(value, self.window(0));
            }

            /// Read-modify-write of the element at position 0; returns the
            /// value written back.
            ///
            /// # Panics
            /// Panics if the view is null.
            #[inline]
            #[track_caller]
            pub fn update(&self, f: impl FnOnce($elem) -> $elem) -> $elem {
                let value = f(self.get());
                self.set(value);
                value
            }

            /// A new view re-anchored `index` elements forward: same owner,
            /// position advanced, length reduced. This is pointer-increment
            /// semantics: the result is another view, not a scalar, and
            /// `index == len` yields an exhausted (null) view one past the
            /// end.
            ///
            /// # Panics
            /// Panics if `index > len`.
            #[inline]
            #[track_caller]
            pub fn at(&self, index: usize) -> Self {
                assert!(
                    index <= self.len,
                    "view advanced out of bounds (index {index}, len {})",
                    self.len,
                );
                Self::anchored(self.owner, self.pos + index * Self::ELEM, self.len - index)
            }

            /// Signed re-anchoring; forward for positive `delta`, backward
            /// for negative.
            #[inline]
            #[track_caller]
            pub fn offset(self, delta: isize) -> Self {
                if delta >= 0 {
                    self.at(delta as usize)
                } else {
                    self - delta.unsigned_abs()
                }
            }

            /// Suffix fill: sets elements `[from, len)` to `value` and
            /// leaves `[0, from)` untouched.
            ///
            /// Note the unusual orientation: the cut-off names the first
            /// element written, not the number of elements.
            ///
            /// # Panics
            /// Panics if `from > len`.
            #[track_caller]
            pub fn fill(&self, value: $elem, from: usize) {
                assert!(
                    from <= self.len,
                    "fill start out of bounds (from {from}, len {})",
                    self.len,
                );
                for i in from..self.len {
                    crate::pun::Pun::write(value, self.window(i));
                }
            }

            /// True iff both views are windows into the same backing
            /// allocation. Null views own nothing and never share.
            #[inline]
            pub fn same_owner(&self, other: &Self) -> bool {
                self.has_owner()
                    && other.has_owner()
                    && core::ptr::eq(self.owner, other.owner)
            }

            /// Identity-based ordering: compares positions, but only
            /// between views of the same backing allocation.
            pub fn try_cmp(&self, other: &Self) -> Result<core::cmp::Ordering, crate::error::CompareError> {
                if !self.has_owner() && !other.has_owner() {
                    return Ok(core::cmp::Ordering::Equal);
                }
                if !self.has_owner() || !other.has_owner() {
                    return Err(crate::error::CompareError::NullOwner);
                }
                if !core::ptr::eq(self.owner, other.owner) {
                    return Err(crate::error::CompareError::DistinctOwners);
                }
                Ok(self.pos.cmp(&other.pos))
            }

            /// Pointer subtraction in element units: how many elements
            /// `self` sits ahead of `origin` (negative when behind).
            pub fn try_offset_from(&self, origin: &Self) -> Result<isize, crate::error::CompareError> {
                if !self.has_owner() && !origin.has_owner() {
                    return Ok(0);
                }
                if !self.has_owner() || !origin.has_owner() {
                    return Err(crate::error::CompareError::NullOwner);
                }
                if !core::ptr::eq(self.owner, origin.owner) {
                    return Err(crate::error::CompareError::DistinctOwners);
                }
                let diff = self.pos as isize - origin.pos as isize;
                // Same-owner views of one element type always sit whole
                // elements apart; see the constructors.
                debug_assert!(diff % Self::ELEM as isize == 0);
                Ok(diff / Self::ELEM as isize)
            }

            /// Panicking form of [`try_offset_from`](Self::try_offset_from).
            #[inline]
            #[track_caller]
            pub fn offset_from(&self, origin: &Self) -> isize {
                match self.try_offset_from(origin) {
                    Ok(delta) => delta,
                    Err(e) => panic!("view subtraction failed: {e}"),
                }
            }

            /// Decodes the visible elements into an owned vector.
            pub fn to_vec(&self) -> Vec<$elem> {
                let mut out = Vec::with_capacity(self.len);
                for i in 0..self.len {
                    out.push(<$elem as crate::pun::Pun>::read(self.window(i)));
                }
                out
            }

            /// Decodes the visible elements into `out`.
            ///
            /// # Panics
            /// Panics if `out.len() != len`.
            #[track_caller]
            pub fn copy_into(&self, out: &mut [$elem]) {
                assert!(
                    out.len() == self.len,
                    "copy_into length mismatch (out {}, len {})",
                    out.len(),
                    self.len,
                );
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = <$elem as crate::pun::Pun>::read(self.window(i));
                }
            }

            /// Encodes `src` into the front of the view, leaving any
            /// remaining suffix untouched.
            ///
            /// # Panics
            /// Panics if `src.len() > len`.
            #[track_caller]
            pub fn copy_from(&self, src: &[$elem]) {
                assert!(
                    src.len() <= self.len,
                    "copy_from source too long (src {}, len {})",
                    src.len(),
                    self.len,
                );
                for (i, value) in src.iter().enumerate() {
                    crate::pun::Pun::write(*value, self.window(i));
                }
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> Clone for $name<$lt $(, $gen)?> {
            #[inline(always)]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> Copy for $name<$lt $(, $gen)?> {}

        impl<$lt $(, $gen: crate::pun::Pun)?> Default for $name<$lt $(, $gen)?> {
            #[inline]
            fn default() -> Self {
                Self::NULL
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> core::fmt::Debug for $name<$lt $(, $gen)?> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                if self.has_owner() {
                    write!(
                        f,
                        "{}({:p} +{}, len {})",
                        stringify!($name),
                        self.owner.as_ptr(),
                        self.pos,
                        self.len,
                    )
                } else {
                    write!(f, "{}(null)", stringify!($name))
                }
            }
        }

        /// Pointer equality: same backing allocation and same position, or
        /// both ownerless. Length does not participate.
        impl<$lt $(, $gen: crate::pun::Pun)?> PartialEq for $name<$lt $(, $gen)?> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                if !self.has_owner() && !other.has_owner() {
                    return true;
                }
                core::ptr::eq(self.owner, other.owner) && self.pos == other.pos
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> Eq for $name<$lt $(, $gen)?> {}

        /// Identity-based ordering.
        ///
        /// # Panics
        /// Panics when the operands do not share a backing allocation,
        /// since a silent `false` there would be indistinguishable from a
        /// valid comparison. Use [`try_cmp`](Self::try_cmp) to handle the
        /// mismatch instead.
        impl<$lt $(, $gen: crate::pun::Pun)?> PartialOrd for $name<$lt $(, $gen)?> {
            #[track_caller]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                match self.try_cmp(other) {
                    Ok(ordering) => Some(ordering),
                    Err(e) => panic!("view comparison failed: {e}"),
                }
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> core::ops::Add<usize> for $name<$lt $(, $gen)?> {
            type Output = Self;

            /// `view + n` re-anchors forward; equivalent to [`at`](Self::at).
            #[inline]
            #[track_caller]
            fn add(self, rhs: usize) -> Self {
                self.at(rhs)
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> core::ops::AddAssign<usize> for $name<$lt $(, $gen)?> {
            #[inline]
            #[track_caller]
            fn add_assign(&mut self, rhs: usize) {
                *self = self.at(rhs);
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> core::ops::Sub<usize> for $name<$lt $(, $gen)?> {
            type Output = Self;

            /// `view - n` re-anchors backward, growing the visible length.
            /// The owner is always retained, so the only precondition is
            /// the start of the backing allocation.
            ///
            /// # Panics
            /// Panics if the result would sit before the owner's start.
            #[inline]
            #[track_caller]
            fn sub(self, rhs: usize) -> Self {
                assert!(
                    rhs * Self::ELEM <= self.pos,
                    "view rewound past the start of its backing allocation",
                );
                Self::anchored(self.owner, self.pos - rhs * Self::ELEM, self.len + rhs)
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> core::ops::SubAssign<usize> for $name<$lt $(, $gen)?> {
            #[inline]
            #[track_caller]
            fn sub_assign(&mut self, rhs: usize) {
                *self = *self - rhs;
            }
        }

        impl<$lt $(, $gen: crate::pun::Pun)?> core::ops::Sub for $name<$lt $(, $gen)?> {
            type Output = isize;

            /// Pointer subtraction; panicking form of
            /// [`try_offset_from`](Self::try_offset_from).
            #[inline]
            #[track_caller]
            fn sub(self, origin: Self) -> isize {
                self.offset_from(&origin)
            }
        }
    };
}

pub(crate) use impl_view_ops;
