// src/core/decode.rs
//
// Per-field transforms: obfuscated email addresses, department codes,
// present/total ratios and numbers with trailing punctuation.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::DEPARTMENTS;
use crate::error::{ExtractError, Result};

static RATIO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)/(\d+)").unwrap());

/// Decode a protected email attribute.
///
/// The attribute value is a hex string: byte 0 is the XOR key, every
/// later byte is one key-XORed character of the address. The key byte
/// is never part of the address.
pub fn email(encoded: &str) -> Result<String> {
    let bytes = hex_bytes(encoded)?;
    let (key, rest) = bytes
        .split_first()
        .ok_or_else(|| bad("obfuscated email", encoded))?;
    Ok(rest.iter().map(|b| char::from(b ^ key)).collect())
}

fn hex_bytes(s: &str) -> Result<Vec<u8>> {
    if s.is_empty() || !s.is_ascii() || s.len() % 2 != 0 {
        return Err(bad("obfuscated email", s));
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| bad("obfuscated email", s)))
        .collect()
}

/// Full department name for a printed code. Codes missing from the
/// table pass through unchanged.
pub fn department(code: &str) -> String {
    match DEPARTMENTS.iter().find(|(c, _)| *c == code) {
        Some((_, name)) => s!(*name),
        None => {
            log::debug!("department code {code:?} not in table, passing through");
            s!(code)
        }
    }
}

/// Parse a leading `present/total` pair, e.g. `"42/50"`. Text after
/// the pair is ignored; a string that does not start with one is a
/// malformed field.
pub fn ratio(s: &str) -> Result<(u32, u32)> {
    let t = s.trim();
    let caps = RATIO_RE
        .captures(t)
        .ok_or_else(|| bad("attendance ratio", s))?;
    Ok((int(&caps[1], "present classes")?, int(&caps[2], "total classes")?))
}

/// Integer with one trailing punctuation character, e.g. `"87%"`.
/// Exactly the final character is dropped before parsing.
pub fn trailing_int(s: &str) -> Result<u32> {
    let t = s.trim();
    let mut chars = t.chars();
    if chars.next_back().is_none() {
        return Err(bad("number", s));
    }
    int(chars.as_str(), "number")
}

/// Plain integer parse with a field-named error.
pub fn int(s: &str, field: &'static str) -> Result<u32> {
    s.trim().parse().map_err(|_| bad(field, s))
}

fn bad(field: &'static str, value: &str) -> ExtractError {
    ExtractError::Malformed(format!("bad {field}: {value:?}"))
}
