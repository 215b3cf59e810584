use thiserror::Error;

/// The error returned by [`BitArray::at`] when the requested index is not
/// an addressable bit.
///
/// # Examples
/// ```
/// use packed_bits::{BitArray, OutOfRange};
///
/// let array = BitArray::<u8>::new(10);
/// assert_eq!(array.at(10), Err(OutOfRange { index: 10, len: 10 }));
/// ```
///
/// [`BitArray::at`]: crate::BitArray::at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit index {index} out of range for bit array of {len} bits")]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The logical number of bits in the array.
    pub len: usize,
}
