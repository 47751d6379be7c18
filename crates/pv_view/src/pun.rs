use core::cell::Cell;

// -----------------------------------------------------------------------------
// Pun

/// An element type that can be punned from and to raw view memory.
///
/// Reinterpretation is an explicit codec, never a layout transmute: a type
/// states its wire size and reads/writes itself against a window of byte
/// cells, one byte at a time, in little-endian order. That gives every view
/// the two properties the ported algorithms rely on:
///
/// - **no alignment requirement**: a record may start at any byte;
/// - **little-endian field layout**: the byte-order convention of the
///   algorithms this layer exists to host.
///
/// The fixed-width integers and floats are implemented here. Structured
/// record types implement the trait by hand, field by field:
///
/// ```
/// use core::cell::Cell;
/// use pv_view::Pun;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// struct Rgb {
///     r: u8,
///     g: u8,
///     b: u8,
/// }
///
/// impl Pun for Rgb {
///     const SIZE: usize = 3;
///
///     fn read(src: &[Cell<u8>]) -> Self {
///         Rgb { r: src[0].get(), g: src[1].get(), b: src[2].get() }
///     }
///
///     fn write(self, dst: &[Cell<u8>]) {
///         dst[0].set(self.r);
///         dst[1].set(self.g);
///         dst[2].set(self.b);
///     }
/// }
/// ```
pub trait Pun: Copy {
    /// Size of one encoded element in bytes. Must be non-zero.
    const SIZE: usize;

    /// Decodes one element from a window of exactly [`SIZE`](Self::SIZE)
    /// byte cells.
    fn read(src: &[Cell<u8>]) -> Self;

    /// Encodes this element into a window of exactly [`SIZE`](Self::SIZE)
    /// byte cells.
    fn write(self, dst: &[Cell<u8>]);
}

// -----------------------------------------------------------------------------
// Primitive impls

macro_rules! impl_pun {
    ($($ty:ty),* $(,)?) => {$(
        impl Pun for $ty {
            const SIZE: usize = size_of::<$ty>();

            #[inline]
            fn read(src: &[Cell<u8>]) -> Self {
                let mut raw = [0u8; size_of::<$ty>()];
                for (byte, cell) in raw.iter_mut().zip(src) {
                    *byte = cell.get();
                }
                <$ty>::from_le_bytes(raw)
            }

            #[inline]
            fn write(self, dst: &[Cell<u8>]) {
                for (cell, byte) in dst.iter().zip(self.to_le_bytes()) {
                    cell.set(byte);
                }
            }
        }
    )*};
}

impl_pun! {
    u8, i8, u16, i16, u32, i32, u64, i64, u128, i128,
    f32, f64,
}
