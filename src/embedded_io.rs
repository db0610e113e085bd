//! Compatibility wrapper for [`Embedded-io's Read`](embedded_io::Read).

use core::borrow::{Borrow, BorrowMut};

use crate::io::ReadByte;

/// Compatibility wrapper for [`Embedded-io's Read`](embedded_io::Read).
///
/// Converts an [`Embedded-io's Read`](embedded_io::Read) into a [`Crate's ReadByte`](crate::io::ReadByte).
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compat<R>(R);

impl<R> Compat<R> {
    /// Creates a new [`Compat`] from an [`Embedded-io's Read`](embedded_io::Read).
    #[inline]
    pub const fn new(inner: R) -> Self {
        Compat(inner)
    }

    /// Returns a reference to the inner [`Embedded-io's Read`](embedded_io::Read).
    #[inline]
    pub const fn inner(&self) -> &R {
        &self.0
    }

    /// Returns a mutable reference to the inner [`Embedded-io's Read`](embedded_io::Read).
    #[inline]
    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.0
    }

    /// Returns the inner [`Embedded-io's Read`](embedded_io::Read) consuming this [`Compat`].
    #[inline]
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R> Borrow<R> for Compat<R> {
    fn borrow(&self) -> &R {
        self.inner()
    }
}

impl<R> BorrowMut<R> for Compat<R> {
    fn borrow_mut(&mut self) -> &mut R {
        self.inner_mut()
    }
}

impl<R> AsRef<R> for Compat<R> {
    fn as_ref(&self) -> &R {
        &self.0
    }
}

impl<R> AsMut<R> for Compat<R> {
    fn as_mut(&mut self) -> &mut R {
        &mut self.0
    }
}

impl<R> From<R> for Compat<R> {
    fn from(inner: R) -> Self {
        Self::new(inner)
    }
}

const _: () = {
    use embedded_io::{Read, ReadExactError};

    impl<R> ReadByte for Compat<R>
    where
        R: Read,
    {
        type Error = ReadExactError<R::Error>;

        fn read_byte(&mut self) -> Result<u8, Self::Error> {
            let mut byte = [0_u8; 1];
            self.0.read_exact(&mut byte)?;

            Ok(byte[0])
        }
    }
};

#[cfg(test)]
mod test;
