use core::fmt::Debug;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned integer usable as backing storage for a run of
/// bits.
///
/// The trait is sealed and implemented for `u8`, `u16`, `u32`, `u64` and
/// `u128`. Instantiating [`BitArray`] with any other type fails to compile:
///
/// ```compile_fail
/// use packed_bits::BitArray;
///
/// let array = BitArray::<i32>::new(8);
/// ```
///
/// Bit offsets within a block are numbered most-significant-first: offset 0
/// addresses the top bit of the block.
///
/// [`BitArray`]: crate::BitArray
pub trait Block:
    Copy
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + Not<Output = Self>
    + sealed::Sealed
{
    /// The number of addressable bit positions in one block.
    const BITS: usize;

    /// The block with every bit cleared.
    const ZERO: Self;

    /// The block with every bit set.
    const ONES: Self;

    /// Returns the mask selecting the bit at `offset`, counting down from
    /// the most significant bit.
    ///
    /// # Examples
    /// ```
    /// use packed_bits::Block;
    ///
    /// assert_eq!(u8::mask(0), 0b1000_0000);
    /// assert_eq!(u8::mask(7), 0b0000_0001);
    /// ```
    fn mask(offset: usize) -> Self;

    /// Returns the mask covering the `n` most significant bits.
    ///
    /// # Examples
    /// ```
    /// use packed_bits::Block;
    ///
    /// assert_eq!(u8::prefix_mask(0), 0b0000_0000);
    /// assert_eq!(u8::prefix_mask(3), 0b1110_0000);
    /// assert_eq!(u8::prefix_mask(8), 0b1111_1111);
    /// ```
    fn prefix_mask(n: usize) -> Self;
}

macro_rules! impl_block {
    ($($t:ty),+ $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Block for $t {
            const BITS: usize = <$t>::BITS as usize;
            const ZERO: Self = 0;
            const ONES: Self = <$t>::MAX;

            #[inline]
            fn mask(offset: usize) -> Self {
                1 << (<Self as Block>::BITS - 1 - offset)
            }

            #[inline]
            fn prefix_mask(n: usize) -> Self {
                if n == 0 { 0 } else { Self::ONES << (<Self as Block>::BITS - n) }
            }
        }

        // Every block type must have a power-of-two bit width.
        const _: () = assert!(<$t>::BITS.is_power_of_two());
    )+};
}

impl_block!(u8, u16, u32, u64, u128);
