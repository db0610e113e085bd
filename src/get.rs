//! Positional decoding from in-memory buffers.

use crate::logging::trace;
use crate::sign::{fold, sign_extend};

#[cfg(all(
    feature = "logging",
    any(feature = "log", feature = "defmt", feature = "tracing")
))]
use crate::logging::Formatter;

/// Decodes a big-endian signed 16-bit integer at offset `pos` of `buf`.
///
/// Returns [`None`] if fewer than two bytes are available at `pos`. A short buffer is a
/// normal outcome the caller must check for, not an error. `buf` is never mutated.
///
/// ```
/// use netint::get_i16_network;
///
/// assert_eq!(get_i16_network(&[0xFF, 0xFF], 0), Some(-1));
/// assert_eq!(get_i16_network(&[0xFF], 0), None);
/// ```
pub fn get_i16_network(buf: &[u8], pos: usize) -> Option<i16> {
    let bytes = pos.checked_add(2).and_then(|end| buf.get(pos..end))?;

    trace!("Decoding i16. pos: {}, bytes: {:?}", pos, Formatter(bytes));

    Some(fold(sign_extend(bytes[0]), &bytes[1..]) as i16)
}

/// Decodes a big-endian signed 32-bit integer at offset `pos` of `buf`.
///
/// Returns [`None`] if fewer than four bytes are available at `pos`. A short buffer is a
/// normal outcome the caller must check for, not an error. `buf` is never mutated.
///
/// ```
/// use netint::get_i32_network;
///
/// assert_eq!(get_i32_network(&[0x80, 0x00, 0x00, 0x00], 0), Some(i32::MIN));
/// assert_eq!(get_i32_network(&[0x00, 0x01, 0x02], 0), None);
/// ```
pub fn get_i32_network(buf: &[u8], pos: usize) -> Option<i32> {
    let bytes = pos.checked_add(4).and_then(|end| buf.get(pos..end))?;

    trace!("Decoding i32. pos: {}, bytes: {:?}", pos, Formatter(bytes));

    Some(fold(sign_extend(bytes[0]), &bytes[1..]))
}

#[cfg(test)]
mod test;
