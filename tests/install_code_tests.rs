//! Install codes as they appear on device labels and QR stickers.

use zb_installcode::{
    parse_install_code, Field, InstallCodeError, InstallCodeFormat, InstallCodeParser,
    KeyLengthPolicy,
};

fn hex_to_bytes(hex: &str) -> Vec<u8> {
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap())
        .collect()
}

const TAGGED_HEX: &str = "G$M:1234$A:00124B0009D69F77$I:41FE01030405060708090A0B0C0D0E0F";

const POSITIONAL_95_HEX: &str =
    "ZB10SG0D83101823480040000000000000000000F4CE36D88AB8B6FDDLK00112233445566778899AABBCCDDEEFF528F";

const POSITIONAL_95_ALT_HEX: &str =
    "ZB10SG0D831018234800400000000000000000009035EAFFFE424793DLKAE3B287281CF11F550733A0CFC38AA31E802";

const POSITIONAL_91_HEX: &str =
    "ZB10SG0D83101823480040000000000000000000F4CE36D88AB8B6FDDLK00112233445566778899AABBCCDDEEFF";

#[test]
fn test_tagged_install_code() {
    let parsed = parse_install_code(TAGGED_HEX).unwrap();
    assert_eq!(parsed.format, InstallCodeFormat::Tagged);
    assert_eq!(parsed.device_address.as_str(), "0x00124B0009D69F77");
    assert_eq!(
        parsed.key.as_bytes(),
        hex_to_bytes("41FE01030405060708090A0B0C0D0E0F").as_slice()
    );
    assert_eq!(parsed.key.len(), 16);
}

#[test]
fn test_positional_95_carries_36_digit_key() {
    assert_eq!(POSITIONAL_95_HEX.len(), 95);
    let parsed = parse_install_code(POSITIONAL_95_HEX).unwrap();
    assert_eq!(parsed.format, InstallCodeFormat::Positional);
    assert_eq!(parsed.device_address.as_str(), "0xF4CE36D88AB8B6FD");
    assert_eq!(
        parsed.key.as_bytes(),
        hex_to_bytes("00112233445566778899AABBCCDDEEFF528F").as_slice()
    );
}

#[test]
fn test_positional_95_second_label() {
    let parsed = parse_install_code(POSITIONAL_95_ALT_HEX).unwrap();
    assert_eq!(parsed.device_address.as_str(), "0x9035EAFFFE424793");
    assert_eq!(parsed.device_address.to_u64(), Some(0x9035_EAFF_FE42_4793));
    assert_eq!(
        parsed.key.as_bytes(),
        hex_to_bytes("AE3B287281CF11F550733A0CFC38AA31E802").as_slice()
    );
}

#[test]
fn test_positional_other_length_carries_32_digit_key() {
    assert_eq!(POSITIONAL_91_HEX.len(), 91);
    let parsed = parse_install_code(POSITIONAL_91_HEX).unwrap();
    assert_eq!(parsed.device_address.as_str(), "0xF4CE36D88AB8B6FD");
    assert_eq!(
        parsed.key.as_bytes(),
        hex_to_bytes("00112233445566778899AABBCCDDEEFF").as_slice()
    );
}

#[test]
fn test_malformed_tagged_key() {
    let err = parse_install_code("G$M:X$A:ABCD$I:ZZZZ").unwrap_err();
    assert_eq!(
        err,
        InstallCodeError::MalformedHex {
            field: Field::Key,
            character: 'Z',
            index: 0,
        }
    );
}

#[test]
fn test_odd_tagged_key_keeps_trailing_digit() {
    let parsed = parse_install_code("G$M:X$A:00124B0009D69F77$I:ABC").unwrap();
    assert_eq!(parsed.key.as_bytes(), &[0xAB, 0x0C]);
}

#[test]
fn test_tagged_address_taken_verbatim() {
    let parsed = parse_install_code("G$M:X$A:ABCD$I:00112233").unwrap();
    assert_eq!(parsed.format, InstallCodeFormat::Tagged);
    assert_eq!(parsed.device_address.as_str(), "0xABCD");
    assert_eq!(parsed.device_address.to_bytes(), None);
}

#[test]
fn test_carriage_return_in_vendor_is_positional() {
    let code = "G$M:12\r34$A:00124B0009D69F77$I:41FE01030405060708090A0B0C0D0E0F";
    assert_eq!(InstallCodeFormat::classify(code), InstallCodeFormat::Positional);

    // The positional offsets happen to land on the same fields
    let parsed = parse_install_code(code).unwrap();
    assert_eq!(parsed.format, InstallCodeFormat::Positional);
    assert_eq!(parsed.device_address.as_str(), "0x00124B0009D69F77");
    assert_eq!(parsed.key.len(), 16);
}

#[test]
fn test_too_short_positional() {
    let err = parse_install_code("ZB10SG0D8310182348").unwrap_err();
    assert!(matches!(err, InstallCodeError::OutOfRange { length: 18, .. }));
}

#[test]
fn test_empty_input() {
    let err = parse_install_code("").unwrap_err();
    assert_eq!(
        err,
        InstallCodeError::OutOfRange {
            length: 0,
            required: 51,
        }
    );
}

#[test]
fn test_broken_tag_falls_to_positional() {
    // Missing "$I:" label, so the positional offsets apply and fail
    let err = parse_install_code("G$M:1234$A:00124B0009D69F77$K:41FE0103").unwrap_err();
    assert!(matches!(err, InstallCodeError::OutOfRange { .. }));
}

#[test]
fn test_non_ascii_does_not_panic() {
    let code = format!("{}é{}", "0".repeat(40), "1".repeat(40));
    assert!(parse_install_code(&code).is_err());
}

#[test]
fn test_parser_with_extra_length_rule() {
    // A 99 character code with an extra 2 byte suffix in the key field
    let code = format!("{POSITIONAL_95_HEX}A1B2");
    let default = InstallCodeParser::new();
    assert!(default.parse(&code).is_err());

    let parser = InstallCodeParser::with_policy(KeyLengthPolicy::default().with_rule(99, 40));
    let parsed = parser.parse(&code).unwrap();
    assert_eq!(parsed.device_address.as_str(), "0xF4CE36D88AB8B6FD");
    assert_eq!(parsed.key.len(), 20);
    assert_eq!(&parsed.key.as_bytes()[18..], &[0xA1, 0xB2]);
}
