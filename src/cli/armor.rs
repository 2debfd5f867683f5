//! Base64 "armor" for blobs that must travel as text.
//!
//! Armored output is standard base64 wrapped at 76 columns.  On input we
//! accept either raw bytes or armored text and tell them apart by the
//! alphabet: a raw AES-GCM blob is practically never pure base64.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::errors::{PwSealError, Result};

/// Line width for armored output.
const LINE_WIDTH: usize = 76;

/// Encode `blob` as wrapped base64 text with a trailing newline.
pub fn armor(blob: &[u8]) -> String {
    let encoded = BASE64.encode(blob);
    let mut out = String::with_capacity(encoded.len() + encoded.len() / LINE_WIDTH + 1);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % LINE_WIDTH == 0 {
            out.push('\n');
        }
        out.push(c);
    }
    out.push('\n');
    out
}

/// True if `input` consists only of base64 characters and whitespace.
pub fn looks_armored(input: &[u8]) -> bool {
    let mut saw_data = false;
    for &b in input {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' | b'=' => saw_data = true,
            b'\n' | b'\r' | b' ' | b'\t' => {}
            _ => return false,
        }
    }
    saw_data
}

/// Decode armored text back into blob bytes.
pub fn unarmor(input: &[u8]) -> Result<Vec<u8>> {
    let compact: Vec<u8> = input
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    BASE64
        .decode(compact)
        .map_err(|e| PwSealError::EncodingError(format!("invalid base64 armor: {e}")))
}

/// Return the blob bytes, decoding armor if present.
pub fn read_blob(input: Vec<u8>) -> Result<Vec<u8>> {
    if looks_armored(&input) {
        unarmor(&input)
    } else {
        Ok(input)
    }
}
