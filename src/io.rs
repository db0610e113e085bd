//! I/O traits definition.

/// A blocking byte source.
///
/// The stream decoders of this crate are built around this trait.
pub trait ReadByte {
    /// The type of error that can be returned by [`ReadByte`] operations.
    type Error;

    /// Produces the next byte from the underlying source, failing if the source is exhausted.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

impl<T: ReadByte> ReadByte for &mut T {
    type Error = T::Error;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (*self).read_byte()
    }
}

/// An error indicating that a byte source has no bytes left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndOfInput;

impl core::fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "End of input")
    }
}

impl core::error::Error for EndOfInput {}

impl ReadByte for &[u8] {
    type Error = EndOfInput;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        match self.split_first() {
            Some((&byte, rest)) => {
                *self = rest;

                Ok(byte)
            }
            None => Err(EndOfInput),
        }
    }
}

/// A byte source over an in-memory slice, tracking its read position.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliceReader<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> SliceReader<'a> {
    /// Creates a new [`SliceReader`] positioned at the start of `buf`.
    #[inline]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, position: 0 }
    }

    /// Returns the number of bytes read so far.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes left to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    /// Returns `true` if every byte has been read.
    #[inline]
    pub const fn at_end(&self) -> bool {
        self.position == self.buf.len()
    }
}

impl ReadByte for SliceReader<'_> {
    type Error = EndOfInput;

    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        match self.buf.get(self.position) {
            Some(&byte) => {
                self.position += 1;

                Ok(byte)
            }
            None => Err(EndOfInput),
        }
    }
}
