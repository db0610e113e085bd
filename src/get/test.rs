use super::*;
use crate::test::init_tracing;

#[test]
fn decodes_i16_at_offset() {
    init_tracing();

    let buf = [0xDE, 0x00, 0x80, 0xAD];

    assert_eq!(get_i16_network(&buf, 0), Some(-8704));
    assert_eq!(get_i16_network(&buf, 1), Some(128));
    assert_eq!(get_i16_network(&buf, 2), Some(-32595));
}

#[test]
fn sign_bit_of_first_byte_only() {
    init_tracing();

    // 127 contributes +127 * 256, 128 contributes (128 - 256) * 256
    assert_eq!(get_i16_network(&[0x7F, 0x00], 0), Some(32512));
    assert_eq!(get_i16_network(&[0x80, 0x00], 0), Some(-32768));
    assert_eq!(get_i16_network(&[0xFF, 0xFF], 0), Some(-1));
}

#[test]
fn decodes_i32_extremes() {
    init_tracing();

    assert_eq!(get_i32_network(&[0x80, 0x00, 0x00, 0x00], 0), Some(i32::MIN));
    assert_eq!(get_i32_network(&[0x7F, 0xFF, 0xFF, 0xFF], 0), Some(i32::MAX));
    assert_eq!(get_i32_network(&[0xFF, 0xFF, 0xFF, 0xFF], 0), Some(-1));
    assert_eq!(get_i32_network(&[0x00, 0x00, 0x00, 0x00], 0), Some(0));
}

#[test]
fn short_buffer_yields_none() {
    init_tracing();

    assert_eq!(get_i16_network(&[], 0), None);
    assert_eq!(get_i16_network(&[0x01], 0), None);
    assert_eq!(get_i16_network(&[0x01, 0x02], 1), None);
    assert_eq!(get_i32_network(&[0x00, 0x01, 0x02], 0), None);
}

#[test]
fn offset_past_the_end_yields_none() {
    init_tracing();

    assert_eq!(get_i16_network(&[0x01, 0x02], 5), None);
    assert_eq!(get_i32_network(&[], 1), None);
    assert_eq!(get_i16_network(&[0x01, 0x02], usize::MAX), None);
}

#[test]
fn round_trips_with_to_be_bytes() {
    init_tracing();

    for value in [i16::MIN, -256, -1, 0, 1, 127, 128, 255, 256, i16::MAX] {
        assert_eq!(get_i16_network(&value.to_be_bytes(), 0), Some(value));
    }

    for value in [i32::MIN, -65536, -1, 0, 1, 65535, 16777216, i32::MAX] {
        assert_eq!(get_i32_network(&value.to_be_bytes(), 0), Some(value));
    }
}
