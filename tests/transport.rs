use retrocast::audio::decode::transport::{decode_base64, encode_base64};
use retrocast::error::Error;

#[test]
fn test_decode_known_payload() {
    let bytes = decode_base64("aGVsbG8=").unwrap();
    assert_eq!(bytes, b"hello");
}

#[test]
fn test_round_trip() {
    let payloads: &[&[u8]] = &[b"", b"a", b"ab", b"abc", &[0x00, 0x80, 0xFF, 0x7F]];
    for payload in payloads {
        let encoded = encode_base64(payload);
        assert_eq!(decode_base64(&encoded).unwrap(), *payload);
    }
}

#[test]
fn test_encode_decode_encode_is_stable() {
    for input in ["", "QQ==", "QUI=", "QUJD", "AAD/fw=="] {
        let decoded = decode_base64(input).unwrap();
        assert_eq!(encode_base64(&decoded), input);
    }
}

#[test]
fn test_decoded_length() {
    // 4 base64 characters carry 3 bytes; padding trims the tail
    assert_eq!(decode_base64("QUJD").unwrap().len(), 3);
    assert_eq!(decode_base64("QUI=").unwrap().len(), 2);
    assert_eq!(decode_base64("QQ==").unwrap().len(), 1);
}

#[test]
fn test_character_outside_alphabet_is_rejected() {
    let err = decode_base64("ab!c").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_url_safe_alphabet_is_rejected() {
    // '-' and '_' belong to the URL-safe variant, not the standard alphabet
    assert!(decode_base64("a-b_").is_err());
}

#[test]
fn test_empty_input_decodes_to_empty() {
    assert_eq!(decode_base64("").unwrap(), Vec::<u8>::new());
}
