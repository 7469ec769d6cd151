use crate::endian::*;

fn involution<T: Scalar>(values: &[T]) {
    for &v in values {
        assert_eq!(file_to_host(host_to_file(v)), v);
        assert_eq!(host_to_file(file_to_host(v)), v);
    }
}

#[test]
fn involutions() {
    involution(&[0i8, i8::MAX, i8::MIN, -1, 0x7e]);
    involution(&[0i16, i16::MAX, i16::MIN, -1, 0x7e]);
    involution(&[0i32, i32::MAX, i32::MIN, -1, 0x7e]);
    involution(&[0i64, i64::MAX, i64::MIN, -1, 0x7e6d5c4b]);
    involution(&[0f32, f32::MAX, f32::MIN, -1.0, 64.0]);
    involution(&[0f64, f64::MAX, f64::MIN, -1.0, 64.0]);
}

#[test]
fn file_to_host_reinterprets_wire_bytes() {
    assert_eq!(file_to_host(0x7ei8), 0x7e);
    assert_eq!(file_to_host(i16::from_ne_bytes([0x7e, 0x00])), 0x7e00);
    assert_eq!(
        file_to_host(i32::from_ne_bytes([0x7e, 0, 0, 0])),
        0x7e000000
    );
    assert_eq!(
        file_to_host(i64::from_ne_bytes([0x4b, 0x5c, 0x6d, 0x7e, 0, 0, 0, 0])),
        0x4b5c6d7e00000000
    );
    assert_eq!(
        file_to_host(f32::from_ne_bytes([0x42, 0x80, 0x00, 0x00])),
        64.0
    );
    assert_eq!(
        file_to_host(f64::from_ne_bytes([0x40, 0x50, 0, 0, 0, 0, 0, 0])),
        64.0
    );
}

#[test]
fn host_to_file_produces_wire_bytes() {
    assert_eq!(host_to_file(0x7e00i16).to_ne_bytes(), [0x7e, 0x00]);
    assert_eq!(host_to_file(-2i32).to_ne_bytes(), [0xff, 0xff, 0xff, 0xfe]);
    assert_eq!(host_to_file(64.0f32).to_ne_bytes(), [0x42, 0x80, 0x00, 0x00]);
    assert_eq!(
        host_to_file(1i64).to_ne_bytes(),
        [0, 0, 0, 0, 0, 0, 0, 1]
    );
}

#[test]
fn nan_bits_survive() {
    let nan = f64::from_bits(0x7ff8_0000_0000_0001);
    assert_eq!(file_to_host(host_to_file(nan)).to_bits(), nan.to_bits());
}

#[test]
fn slices_preserve_order_and_count() {
    let original = [1i32, -2, 0x11223344, i32::MIN];
    let mut values = original;

    host_to_file_slice(&mut values);
    assert_eq!(values.len(), original.len());
    for (v, o) in values.iter().zip(original.iter()) {
        assert_eq!(*v, host_to_file(*o));
    }

    file_to_host_slice(&mut values);
    assert_eq!(values, original);
}

#[test]
fn empty_slices() {
    let mut empty: [i64; 0] = [];
    file_to_host_slice(&mut empty);
    assert!(read_file_array::<i64>(&[]).is_empty());
    assert!(write_file_array::<i16>(&[]).is_empty());
}

#[test]
fn read_and_write_arrays() {
    let bytes = [0x11, 0x22, 0x33, 0x44, 0x00, 0x00, 0x00, 0x01];
    assert_eq!(read_file_array::<i32>(&bytes), vec![0x11223344, 1]);
    assert_eq!(read_file_array::<i16>(&bytes), vec![0x1122, 0x3344, 0, 1]);
    assert_eq!(read_file_array::<i64>(&bytes), vec![0x1122334400000001]);
    assert_eq!(write_file_array(&[0x11223344i32, 1]), bytes.to_vec());

    let signed = read_file_array::<i8>(&[0xff, 0x01]);
    assert_eq!(signed, vec![-1, 1]);
}

#[test]
fn read_array_ignores_partial_element() {
    assert_eq!(read_file_array::<i32>(&[0, 0, 0, 5, 0xff]), vec![5]);
}

#[test]
fn byte_level_matches_value_level() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let raw = i64::from_ne_bytes(bytes);
    assert_eq!(i64::from_file_bytes(&bytes), file_to_host(raw));

    let mut out = [0u8; 8];
    file_to_host(raw).to_file_bytes(&mut out);
    assert_eq!(out, bytes);
}
