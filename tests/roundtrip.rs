use std::fs;

use huffpack::{decode_file, encode_file, HuffError};

fn assert_file_round_trip(original: &[u8]) {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input");
    let packed = dir.path().join("input.huff");
    let restored = dir.path().join("restored");

    fs::write(&src, original).unwrap();
    encode_file(&src, &packed).unwrap();
    decode_file(&packed, &restored).unwrap();

    assert_eq!(fs::read(&restored).unwrap(), original);
}

#[test]
fn text_file_round_trips() {
    let text = "the quick brown fox jumps over the lazy dog\n".repeat(50);
    assert_file_round_trip(text.as_bytes());
}

#[test]
fn binary_file_round_trips() {
    let mut data = Vec::new();
    for i in 0u32..4096 {
        data.push((i.wrapping_mul(2654435761) >> 24) as u8);
    }
    assert_file_round_trip(&data);
}

#[test]
fn empty_file_round_trips() {
    assert_file_round_trip(b"");
}

#[test]
fn single_symbol_file_round_trips() {
    assert_file_round_trip(&[0x41; 1000]);
}

#[test]
fn skewed_file_gets_smaller() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input");
    let packed = dir.path().join("input.huff");

    let mut data = vec![b'e'; 8000];
    data.extend_from_slice(b"the rest of the alphabet");
    fs::write(&src, &data).unwrap();

    encode_file(&src, &packed).unwrap();
    assert!(fs::metadata(&packed).unwrap().len() < data.len() as u64);
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = encode_file(dir.path().join("no-such-file"), dir.path().join("out"));
    assert!(matches!(result, Err(HuffError::Io(_))));
}

#[test]
fn tampered_file_fails_to_decode() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input");
    let packed = dir.path().join("input.huff");
    let restored = dir.path().join("restored");

    fs::write(&src, b"some compressible content, repeated content").unwrap();
    encode_file(&src, &packed).unwrap();

    let mut bytes = fs::read(&packed).unwrap();
    bytes.truncate(bytes.len() / 2);
    fs::write(&packed, &bytes).unwrap();

    assert!(decode_file(&packed, &restored).is_err());
}
