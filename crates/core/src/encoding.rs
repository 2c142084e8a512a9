// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lossy decoding of captured command output.
//!
//! Decoding never fails: bytes that are not valid in the chosen encoding
//! become U+FFFD.

use encoding_rs::Encoding;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Encoding label could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output encoding: {0}")]
pub struct EncodingError(pub String);

/// Text encoding applied to the raw bytes a command writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    Utf8,
    /// IBM code page 850, the Western European OEM console code page.
    Cp850,
    /// Any encoding known to `encoding_rs` (WHATWG label set).
    Whatwg(&'static Encoding),
}

impl OutputEncoding {
    /// Resolve a configuration label such as `utf-8`, `cp850`, or `windows-1252`.
    pub fn from_label(label: &str) -> Result<Self, EncodingError> {
        let normalized = label.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "cp850" | "ibm850" | "ibm-850" | "850" => return Ok(OutputEncoding::Cp850),
            _ => {}
        }
        match Encoding::for_label(normalized.as_bytes()) {
            Some(enc) if enc == encoding_rs::UTF_8 => Ok(OutputEncoding::Utf8),
            Some(enc) => Ok(OutputEncoding::Whatwg(enc)),
            None => Err(EncodingError(label.to_string())),
        }
    }

    /// Canonical label, suitable for round-tripping through [`from_label`](Self::from_label).
    pub fn name(&self) -> &'static str {
        match self {
            OutputEncoding::Utf8 => "utf-8",
            OutputEncoding::Cp850 => "cp850",
            OutputEncoding::Whatwg(enc) => enc.name(),
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            OutputEncoding::Utf8 => {
                encoding_rs::UTF_8.decode_without_bom_handling(bytes).0.into_owned()
            }
            OutputEncoding::Cp850 => decode_cp850(bytes),
            OutputEncoding::Whatwg(enc) => enc.decode_without_bom_handling(bytes).0.into_owned(),
        }
    }
}

impl std::fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for OutputEncoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for OutputEncoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        OutputEncoding::from_label(&label).map_err(serde::de::Error::custom)
    }
}

fn decode_cp850(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b < 0x80 { b as char } else { CP850_HIGH[(b - 0x80) as usize] })
        .collect()
}

/// Code points for bytes 0x80..=0xFF in code page 850.
const CP850_HIGH: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', 'ø', '£', 'Ø', '×', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '®', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '░', '▒', '▓', '│', '┤', 'Á', 'Â', 'À', '©', '╣', '║', '╗', '╝', '¢', '¥', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', 'ã', 'Ã', '╚', '╔', '╩', '╦', '╠', '═', '╬', '¤',
    // 0xD0
    'ð', 'Ð', 'Ê', 'Ë', 'È', 'ı', 'Í', 'Î', 'Ï', '┘', '┌', '█', '▄', '¦', 'Ì', '▀',
    // 0xE0
    'Ó', 'ß', 'Ô', 'Ò', 'õ', 'Õ', 'µ', 'þ', 'Þ', 'Ú', 'Û', 'Ù', 'ý', 'Ý', '¯', '´',
    // 0xF0
    '\u{AD}', '±', '‗', '¾', '¶', '§', '÷', '¸', '°', '¨', '·', '¹', '³', '²', '■', '\u{A0}',
];

#[cfg(test)]
#[path = "encoding_tests.rs"]
mod tests;
