//! Fixed-offset hex codec between 16 bytes and the 8-4-4-4-12 text layout.
//!
//! Both directions work on stack buffers; nothing here allocates.

use crate::UuidError;

/// Length of the hyphenated form without braces.
pub(crate) const CORE_LEN: usize = 36;

/// Length of the hyphenated form wrapped in braces.
pub(crate) const BRACED_LEN: usize = CORE_LEN + 2;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Hyphen positions within the 36-character core.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Position of the first digit of each byte within the 36-character core.
const DIGIT_PAIRS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

/// Writes the hyphenated hex form of `bytes` into `dst`.
pub(crate) fn encode(bytes: &[u8; 16], upper: bool, dst: &mut [u8]) {
    debug_assert_eq!(dst.len(), CORE_LEN);
    let table = if upper { UPPER } else { LOWER };

    for &at in &HYPHENS {
        dst[at] = b'-';
    }
    for (&byte, &at) in bytes.iter().zip(DIGIT_PAIRS.iter()) {
        dst[at] = table[(byte >> 4) as usize];
        dst[at + 1] = table[(byte & 0x0f) as usize];
    }
}

/// Decodes the 36-character core of `text` starting at byte offset `start`.
///
/// Hyphen placement is checked over the whole core before any digit is
/// decoded, so a misplaced hyphen is a format error rather than a bad digit.
/// Reported indices are relative to `text`.
pub(crate) fn decode(text: &str, start: usize) -> Result<[u8; 16], UuidError> {
    let core = &text.as_bytes()[start..start + CORE_LEN];

    for (i, &c) in core.iter().enumerate() {
        if (c == b'-') != HYPHENS.contains(&i) {
            return Err(UuidError::InvalidFormat {
                reason: "expected hyphen-separated groups of 8-4-4-4-12 hex digits",
            });
        }
    }

    let mut bytes = [0u8; 16];
    for (byte, &at) in bytes.iter_mut().zip(DIGIT_PAIRS.iter()) {
        let hi = digit(text, start + at)?;
        let lo = digit(text, start + at + 1)?;
        *byte = (hi << 4) | lo;
    }
    Ok(bytes)
}

fn digit(text: &str, index: usize) -> Result<u8, UuidError> {
    match text.as_bytes()[index] {
        c @ b'0'..=b'9' => Ok(c - b'0'),
        c @ b'a'..=b'f' => Ok(c - b'a' + 10),
        c @ b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(UuidError::InvalidHexDigit {
            found: text
                .get(index..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        }),
    }
}
