//! Shared sign handling for big-endian decoding.

/// Signed contribution of the most significant byte.
///
/// Only the first byte of a value carries the sign: 128 and above contribute
/// their value minus 256, the remaining bytes are folded in unsigned.
#[inline]
pub(crate) const fn sign_extend(byte: u8) -> i32 {
    if byte < 128 {
        byte as i32
    } else {
        byte as i32 - 256
    }
}

/// Folds `rest` into `acc` in big-endian order, treating every byte as unsigned.
///
/// Never overflows for up to three bytes of `rest` when `acc` started from
/// [`sign_extend`].
#[inline]
pub(crate) fn fold(mut acc: i32, rest: &[u8]) -> i32 {
    for &byte in rest {
        acc = acc * 256 + byte as i32;
    }

    acc
}
