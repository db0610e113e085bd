//! Sequential decoding from byte streams.

use crate::io::ReadByte;
use crate::logging::trace;
use crate::sign::{fold, sign_extend};

#[cfg(all(
    feature = "logging",
    any(feature = "log", feature = "defmt", feature = "tracing")
))]
use crate::logging::Formatter;

/// Decodes a big-endian signed 16-bit integer from `reader`.
///
/// Consumes exactly two bytes on success. If a byte read fails, the source's error is
/// returned as-is and the bytes already consumed stay consumed.
///
/// ```
/// use netint::read_i16_network;
///
/// let mut bytes: &[u8] = &[0x00, 0x80];
/// assert_eq!(read_i16_network(&mut bytes), Ok(128));
/// ```
pub fn read_i16_network<R: ReadByte>(reader: &mut R) -> Result<i16, R::Error> {
    let bytes = [reader.read_byte()?, reader.read_byte()?];

    trace!("Decoded i16 bytes. bytes: {:?}", Formatter(&bytes));

    Ok(fold(sign_extend(bytes[0]), &bytes[1..]) as i16)
}

/// Decodes a big-endian signed 32-bit integer from `reader`.
///
/// Consumes exactly four bytes on success. If a byte read fails, the source's error is
/// returned as-is and the bytes already consumed stay consumed.
///
/// ```
/// use netint::read_i32_network;
///
/// let mut bytes: &[u8] = &[0x80, 0x00, 0x00, 0x00];
/// assert_eq!(read_i32_network(&mut bytes), Ok(i32::MIN));
/// ```
pub fn read_i32_network<R: ReadByte>(reader: &mut R) -> Result<i32, R::Error> {
    let bytes = [
        reader.read_byte()?,
        reader.read_byte()?,
        reader.read_byte()?,
        reader.read_byte()?,
    ];

    trace!("Decoded i32 bytes. bytes: {:?}", Formatter(&bytes));

    Ok(fold(sign_extend(bytes[0]), &bytes[1..]))
}
