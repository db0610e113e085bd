//! # Netint
//!
//! Fixed-width big-endian ("network byte order") signed integer decoding for `no_std` environments.
//!
//! Two entry points per width:
//!
//! - [`get_i16_network`] and [`get_i32_network`] decode at an offset into an in-memory buffer,
//!   returning [`None`] when the buffer does not hold enough bytes at that offset.
//! - [`read_i16_network`] and [`read_i32_network`] pull bytes one at a time from a
//!   [`ReadByte`](io::ReadByte) source, propagating the source's own error when it runs out.
//!
//! The byte layout consumed is exactly network byte order (most significant byte first),
//! matching common wire-protocol integer encodings.
//!
//! The `embedded_io` and `std_io` modules provide compatibility wrappers for decoding
//! from `embedded_io::Read` and `std::io::Read` sources.

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub mod io;

mod get;
pub use get::{get_i16_network, get_i32_network};

mod read;
pub use read::{read_i16_network, read_i32_network};

mod sign;

#[cfg(feature = "embedded-io")]
#[cfg_attr(docsrs, doc(cfg(feature = "embedded-io")))]
pub mod embedded_io;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod std_io;

pub(crate) mod logging;

#[cfg(test)]
pub(crate) mod test;
