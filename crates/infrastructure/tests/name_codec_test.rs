use stubdns_domain::{DomainError, Name};
use stubdns_infrastructure::dns::codec::{decode_name, decode_name_at, encode_name};
use stubdns_infrastructure::dns::wire::{WireReader, WireWriter};

fn encode(name: &Name) -> Result<Vec<u8>, DomainError> {
    let mut writer = WireWriter::new();
    encode_name(name, &mut writer)?;
    Ok(writer.as_slice().to_vec())
}

fn decode(bytes: &[u8]) -> Result<Name, DomainError> {
    decode_name(&mut WireReader::new(bytes))
}

// ── encode ─────────────────────────────────────────────────────────────────

#[test]
fn test_encode_codecrafters_io() {
    let name: Name = "codecrafters.io".parse().unwrap();

    assert_eq!(encode(&name).unwrap(), b"\x0ccodecrafters\x02io\x00".to_vec());
}

#[test]
fn test_encode_root_is_single_zero_byte() {
    assert_eq!(encode(&Name::root()).unwrap(), vec![0x00]);
}

#[test]
fn test_encode_rejects_label_over_63_bytes() {
    let name = Name::from_labels([vec![b'a'; 64]]);

    assert_eq!(encode(&name), Err(DomainError::LabelTooLong(64)));
}

#[test]
fn test_encode_accepts_label_of_exactly_63_bytes() {
    let name = Name::from_labels([vec![b'a'; 63]]);

    let bytes = encode(&name).unwrap();

    assert_eq!(bytes.len(), 65);
    assert_eq!(bytes[0], 63);
}

#[test]
fn test_encode_rejects_empty_label() {
    let name = Name::from_labels([b"a".to_vec(), Vec::new(), b"b".to_vec()]);

    assert_eq!(encode(&name), Err(DomainError::EmptyLabel));
}

#[test]
fn test_encode_rejects_name_over_255_bytes() {
    // 4 * (1 + 63) + 1 = 257
    let name = Name::from_labels(vec![vec![b'x'; 63]; 4]);

    assert_eq!(encode(&name), Err(DomainError::NameTooLong(257)));
}

#[test]
fn test_failed_encode_writes_nothing() {
    let mut writer = WireWriter::new();
    let name = Name::from_labels([b"ok".to_vec(), vec![b'a'; 64]]);

    assert!(encode_name(&name, &mut writer).is_err());
    assert!(writer.is_empty());
}

// ── decode ─────────────────────────────────────────────────────────────────

#[test]
fn test_decode_codecrafters_io() {
    let name = decode(b"\x0ccodecrafters\x02io\x00").unwrap();

    assert_eq!(name.labels(), &[b"codecrafters".to_vec(), b"io".to_vec()]);
    assert_eq!(name.to_string(), "codecrafters.io");
}

#[test]
fn test_decode_at_returns_offset_past_terminator() {
    let buf = b"\xFF\xFF\x03www\x07example\x03com\x00\x00\x01";

    let (name, next) = decode_name_at(buf, 2).unwrap();

    assert_eq!(name, "www.example.com".parse().unwrap());
    assert_eq!(next, 19);
    assert_eq!(&buf[next..], &[0x00, 0x01]);
}

#[test]
fn test_roundtrip_various_names() {
    let names = vec![
        Name::root(),
        "a".parse().unwrap(),
        "codecrafters.io".parse().unwrap(),
        Name::from_labels([b"dot.inside".to_vec(), b"io".to_vec()]),
        Name::from_labels([vec![0u8, 0xFF, 0x80], b"bin".to_vec()]),
        Name::from_labels(vec![vec![b'z'; 63]; 3]),
    ];

    for name in names {
        let bytes = encode(&name).unwrap();
        assert_eq!(decode(&bytes).unwrap(), name);
    }
}

#[test]
fn test_roundtrip_name_of_exactly_255_bytes() {
    // 3 * 64 + (1 + 61) + 1 = 255
    let mut labels = vec![vec![b'q'; 63]; 3];
    labels.push(vec![b'r'; 61]);
    let name = Name::from_labels(labels);

    let bytes = encode(&name).unwrap();

    assert_eq!(bytes.len(), 255);
    assert_eq!(decode(&bytes).unwrap(), name);
}

#[test]
fn test_decode_rejects_compression_pointer() {
    let err = decode(&[0xC0, 0x0C]).unwrap_err();

    assert!(matches!(err, DomainError::MalformedName(_)), "{:?}", err);
}

#[test]
fn test_decode_rejects_pointer_after_labels() {
    let err = decode(b"\x03www\xC0\x0C").unwrap_err();

    assert!(matches!(err, DomainError::MalformedName(_)));
}

#[test]
fn test_decode_rejects_reserved_label_types() {
    for len_byte in [0x40u8, 0x80, 0xBF] {
        let mut bytes = vec![len_byte];
        bytes.extend(vec![b'a'; 200]);

        let err = decode(&bytes).unwrap_err();

        assert!(matches!(err, DomainError::MalformedName(_)), "{:#04x}", len_byte);
    }
}

#[test]
fn test_decode_rejects_truncated_label() {
    let err = decode(b"\x0ccodecraf").unwrap_err();

    assert!(matches!(err, DomainError::MalformedName(_)));
}

#[test]
fn test_decode_rejects_missing_terminator() {
    let err = decode(b"\x02io").unwrap_err();

    assert!(matches!(err, DomainError::MalformedName(_)));
}

#[test]
fn test_decode_rejects_empty_input() {
    assert!(matches!(decode(&[]), Err(DomainError::MalformedName(_))));
}

#[test]
fn test_decode_rejects_name_over_255_bytes() {
    let mut bytes = Vec::new();
    for _ in 0..4 {
        bytes.push(63);
        bytes.extend(vec![b'x'; 63]);
    }
    bytes.push(0);

    assert!(matches!(decode(&bytes), Err(DomainError::MalformedName(_))));
}
