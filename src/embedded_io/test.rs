use embedded_io::ReadExactError;

use super::*;
use crate::{read_i16_network, read_i32_network};

#[test]
fn decodes_through_compat() {
    let mut compat = Compat::new(&[0x00, 0x80, 0xFF, 0xFF, 0xFF, 0xFF][..]);

    assert_eq!(read_i16_network(&mut compat).unwrap(), 128);
    assert_eq!(read_i32_network(&mut compat).unwrap(), -1);
}

#[test]
fn exhausted_source_fails() {
    let mut compat = Compat::new(&[0x01][..]);

    assert!(matches!(
        read_i16_network(&mut compat),
        Err(ReadExactError::UnexpectedEof)
    ));
}

#[test]
fn into_inner_returns_the_source() {
    let compat = Compat::new(&[0x0A][..]);

    assert_eq!(compat.into_inner(), &[0x0A][..]);
}
