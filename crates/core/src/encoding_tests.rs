// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[yare::parameterized(
    utf8        = { "utf-8", OutputEncoding::Utf8 },
    utf8_upper  = { "UTF8", OutputEncoding::Utf8 },
    cp850       = { "cp850", OutputEncoding::Cp850 },
    ibm850      = { "IBM850", OutputEncoding::Cp850 },
    bare_850    = { " 850 ", OutputEncoding::Cp850 },
    latin1      = { "windows-1252", OutputEncoding::Whatwg(encoding_rs::WINDOWS_1252) },
    iso_alias   = { "latin1", OutputEncoding::Whatwg(encoding_rs::WINDOWS_1252) },
)]
fn from_label_resolves(label: &str, expected: OutputEncoding) {
    assert_eq!(OutputEncoding::from_label(label).unwrap(), expected);
}

#[test]
fn from_label_rejects_unknown() {
    let err = OutputEncoding::from_label("klingon-8").unwrap_err();
    assert_eq!(err, EncodingError("klingon-8".to_string()));
    assert!(err.to_string().contains("klingon-8"));
}

#[test]
fn utf8_decodes_multibyte() {
    assert_eq!(OutputEncoding::Utf8.decode("ping: héllo\n".as_bytes()), "ping: héllo\n");
}

#[test]
fn utf8_replaces_invalid_sequences() {
    let decoded = OutputEncoding::Utf8.decode(b"ok \xff\xfe end");
    assert_eq!(decoded, "ok \u{FFFD}\u{FFFD} end");
}

#[test]
fn cp850_decodes_accented_letters() {
    // "Configuración IP de Windows" as emitted by a Spanish console
    let decoded = OutputEncoding::Cp850.decode(b"Configuraci\xa2n IP");
    assert_eq!(decoded, "Configuración IP");
    assert_eq!(OutputEncoding::Cp850.decode(&[0x82, 0x87]), "éç");
}

#[test]
fn cp850_keeps_ascii_and_box_drawing() {
    assert_eq!(OutputEncoding::Cp850.decode(b"abc\r\n"), "abc\r\n");
    assert_eq!(OutputEncoding::Cp850.decode(&[0xC4, 0xB3]), "─│");
    assert_eq!(OutputEncoding::Cp850.decode(&[0xFF]), "\u{A0}");
}

#[test]
fn whatwg_encoding_decodes() {
    let enc = OutputEncoding::from_label("windows-1252").unwrap();
    assert_eq!(enc.decode(&[0x63, 0x61, 0x66, 0xE9]), "café");
}

#[test]
fn name_round_trips_through_label() {
    for enc in [
        OutputEncoding::Utf8,
        OutputEncoding::Cp850,
        OutputEncoding::Whatwg(encoding_rs::SHIFT_JIS),
    ] {
        assert_eq!(OutputEncoding::from_label(enc.name()).unwrap(), enc);
    }
}

#[test]
fn serde_uses_label() {
    let json = serde_json::to_string(&OutputEncoding::Cp850).unwrap();
    assert_eq!(json, "\"cp850\"");
    let back: OutputEncoding = serde_json::from_str(&json).unwrap();
    assert_eq!(back, OutputEncoding::Cp850);
    assert!(serde_json::from_str::<OutputEncoding>("\"nope\"").is_err());
}

proptest! {
    #[test]
    fn utf8_decode_never_fails(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let decoded = OutputEncoding::Utf8.decode(&bytes);
        if std::str::from_utf8(&bytes).is_ok() {
            prop_assert_eq!(decoded.as_bytes(), bytes.as_slice());
        }
    }

    #[test]
    fn cp850_maps_every_byte_to_one_char(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let decoded = OutputEncoding::Cp850.decode(&bytes);
        prop_assert_eq!(decoded.chars().count(), bytes.len());
        prop_assert!(!decoded.contains(char::REPLACEMENT_CHARACTER));
    }
}
