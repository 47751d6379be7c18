use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure of an identity-based comparison or subtraction between views.
///
/// Returned by the fallible `try_cmp`/`try_offset_from` forms; the operator
/// forms panic with the same information instead of ever producing a
/// misleading `false` or a nonsensical offset.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompareError {
    #[error("views come from different backing allocations")]
    DistinctOwners,

    #[error("view has no backing allocation")]
    NullOwner,
}

/// Failure to reinterpret a memory region as a sequence of records.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReshapeError {
    #[error("byte length {len} is not a multiple of the element size {elem}")]
    Remainder { len: usize, elem: usize },
}
