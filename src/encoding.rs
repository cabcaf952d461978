//! WinAnsi (Windows-1252) text encoding for content streams.
//!
//! Every character maps to exactly one byte so the `/Length` and cross-reference
//! values computed while assembling a document are plain byte counts. Seven-bit
//! ASCII passes through unchanged, U+00A0..=U+00FF map onto the identical byte
//! (WinAnsi agrees with Latin-1 there), and the typographic characters of the
//! 0x80..=0x9F block are resolved through [`WIN_ANSI_HIGH`]. Anything else is
//! written as [`REPLACEMENT_BYTE`].

/// Byte written in place of characters outside the WinAnsi repertoire.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// An encoding row: the Unicode character and its WinAnsiEncoding position.
pub type WinAnsiRow = (char, u8);

/// The 0x80..=0x9F block of WinAnsiEncoding.
///
/// Positions 0x81, 0x8D, 0x8F, 0x90 and 0x9D are unassigned.
pub const WIN_ANSI_HIGH: &[WinAnsiRow] = &[
    ('\u{20AC}', 0x80), // Euro
    ('\u{201A}', 0x82), // quotesinglbase
    ('\u{0192}', 0x83), // florin
    ('\u{201E}', 0x84), // quotedblbase
    ('\u{2026}', 0x85), // ellipsis
    ('\u{2020}', 0x86), // dagger
    ('\u{2021}', 0x87), // daggerdbl
    ('\u{02C6}', 0x88), // circumflex
    ('\u{2030}', 0x89), // perthousand
    ('\u{0160}', 0x8A), // Scaron
    ('\u{2039}', 0x8B), // guilsinglleft
    ('\u{0152}', 0x8C), // OE
    ('\u{017D}', 0x8E), // Zcaron
    ('\u{2018}', 0x91), // quoteleft
    ('\u{2019}', 0x92), // quoteright
    ('\u{201C}', 0x93), // quotedblleft
    ('\u{201D}', 0x94), // quotedblright
    ('\u{2022}', 0x95), // bullet
    ('\u{2013}', 0x96), // endash
    ('\u{2014}', 0x97), // emdash
    ('\u{02DC}', 0x98), // tilde
    ('\u{2122}', 0x99), // trademark
    ('\u{0161}', 0x9A), // scaron
    ('\u{203A}', 0x9B), // guilsinglright
    ('\u{0153}', 0x9C), // oe
    ('\u{017E}', 0x9E), // zcaron
    ('\u{0178}', 0x9F), // Ydieresis
];

/// Returns the WinAnsi byte for `ch`, or `None` when the encoding has no slot for it.
pub fn encode_char(ch: char) -> Option<u8> {
    let code = u32::from(ch);
    match code {
        0x00..=0x7F | 0xA0..=0xFF => Some(code as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(candidate, _)| *candidate == ch)
            .map(|(_, byte)| *byte),
    }
}

/// Returns the character stored at WinAnsi position `byte`, if the position is assigned.
pub fn decode_byte(byte: u8) -> Option<char> {
    match byte {
        0x00..=0x7F | 0xA0..=0xFF => Some(char::from(byte)),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(_, candidate)| *candidate == byte)
            .map(|(ch, _)| *ch),
    }
}

/// Appends the encoding of `text` to `out` and returns how many characters were
/// replaced with [`REPLACEMENT_BYTE`].
pub fn encode_into(text: &str, out: &mut Vec<u8>) -> usize {
    let mut replaced = 0;
    out.reserve(text.len());
    for ch in text.chars() {
        match encode_char(ch) {
            Some(byte) => out.push(byte),
            None => {
                replaced += 1;
                out.push(REPLACEMENT_BYTE);
            }
        }
    }
    replaced
}

/// Encodes `text` into a fresh buffer holding exactly one byte per character.
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    encode_into(text, &mut out);
    out
}

/// Decodes WinAnsi bytes, mapping unassigned positions to U+FFFD.
pub fn decode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| decode_byte(byte).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
