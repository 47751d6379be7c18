//! Bounded "view" types that reproduce raw-pointer arithmetic and aliasing
//! semantics on top of safely-owned contiguous memory.
//!
//! Pointer-heavy algorithms (image codecs, font rasterizers, bit-level hash
//! routines) can be ported mechanically on top of this layer, preserving
//! their original control flow: position 0 of a view is "the current
//! pointer", `view + n` advances it, [`get`](ByteView::get)/[`set`](ByteView::set)
//! dereference it, and `is_null` is the shared failure signal.
//!
//! **ByteView**
//!
//! [`ByteView<'a>`] is a bounded window over raw byte memory with
//! byte-granularity pointer semantics; the foundation for all byte-oriented
//! code.
//!
//! **ElemView**
//!
//! [`ElemView<'a, T>`](ElemView) is generic over an element type: the
//! analogue of a typed pointer into an array. Element access goes through
//! the explicit little-endian codec of the [`Pun`] trait.
//!
//! **RecordView**
//!
//! [`RecordView<'a, R>`](RecordView) reinterprets a byte view (or a typed
//! element view) as a sequence of `R::SIZE`-byte records, with no alignment
//! requirement. All of its offset operators advance in record units,
//! matching indexing.
//!
//! **ScratchView**
//!
//! [`ScratchView<'a, T>`](ScratchView) is the non-escaping variant for
//! short-lived working buffers: every constructor is closure-scoped, so the
//! view value cannot be stored anywhere that outlives the producing call.
//!
//! # Aliasing and threads
//!
//! Views are plain `Copy` values holding an `(owner, position, length)`
//! triple; copying a view never copies memory, and writes through one copy
//! are visible to every other copy over the same region. Storage is
//! `Cell`-backed, which keeps aliased mutation in safe Rust and makes every
//! view `!Send + !Sync`.
//!
//! # Failure policy
//!
//! Out-of-bounds dereferences, rewinding past the start of the backing
//! allocation, and ordering or subtraction across unrelated allocations are
//! programmer errors: they panic in every build profile. Each cross-
//! allocation or shape check also has a fallible `try_*` form returning
//! [`CompareError`] or [`ReshapeError`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    pv_cfg::define_alias! {
        #[cfg(any(feature = "debug", debug_assertions))] => debug,
    }
}

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod bytes;
mod elem;
mod error;
mod ops;
mod pun;
mod record;
mod scratch;

// -----------------------------------------------------------------------------
// Top-level exports

pub use bytes::ByteView;
pub use elem::ElemView;
pub use error::{CompareError, ReshapeError};
pub use pun::Pun;
pub use record::RecordView;
pub use scratch::ScratchView;
