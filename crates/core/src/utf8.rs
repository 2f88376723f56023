//! UTF-8 encoding and length-based decoding.
//!
//! Decoding only looks at the leading byte to decide how many bytes belong
//! to a character. Continuation bytes are not checked, so malformed input is
//! split into units the same way well-formed input would be.

use std::fmt;

/// One encoded character: 0 to 4 bytes.
///
/// An empty unit is what [`encode`] returns for values that have no UTF-8
/// form (surrogates and anything above `0x10FFFF`).
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf8Unit {
    bytes: [u8; 4],
    len: u8,
}

impl Utf8Unit {
    /// Copy up to the first four bytes of `bytes` into a unit.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let len = bytes.len().min(4);
        let mut unit = Self::default();
        unit.bytes[..len].copy_from_slice(&bytes[..len]);
        unit.len = len as u8;
        unit
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of encoded bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the unit holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The character, if the bytes are exactly one well-formed scalar value.
    pub fn to_char(&self) -> Option<char> {
        let s = std::str::from_utf8(self.as_bytes()).ok()?;
        let mut chars = s.chars();
        let ch = chars.next()?;
        chars.next().is_none().then_some(ch)
    }
}

impl fmt::Debug for Utf8Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.as_bytes()) {
            Ok(s) => write!(f, "Utf8Unit({s:?})"),
            Err(_) => write!(f, "Utf8Unit({:02x?})", self.as_bytes()),
        }
    }
}

/// Encode a code point. Surrogates and out-of-range values give an empty unit.
pub fn encode(cp: u32) -> Utf8Unit {
    let mut unit = Utf8Unit::default();
    let b = &mut unit.bytes;
    unit.len = if cp <= 0x7F {
        b[0] = cp as u8;
        1
    } else if cp <= 0x7FF {
        b[0] = 0xC0 | (cp >> 6) as u8;
        b[1] = 0x80 | (cp & 0x3F) as u8;
        2
    } else if (0xD800..=0xDFFF).contains(&cp) {
        0
    } else if cp <= 0xFFFF {
        b[0] = 0xE0 | (cp >> 12) as u8;
        b[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        b[2] = 0x80 | (cp & 0x3F) as u8;
        3
    } else if cp <= 0x10FFFF {
        b[0] = 0xF0 | (cp >> 18) as u8;
        b[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
        b[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
        b[3] = 0x80 | (cp & 0x3F) as u8;
        4
    } else {
        0
    };
    unit
}

/// Byte length of the character introduced by `lead`.
///
/// Stray continuation bytes (`0x80..0xC0`) count as two-byte leaders and
/// `0xF8..` as four-byte leaders; nothing is rejected.
pub fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0x80..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

/// Cut the character starting at `pos` out of `bytes`.
///
/// Returns the character's bytes and the position just past it. A sequence
/// truncated by the end of `bytes` is returned short. `pos` at or past the
/// end yields an empty slice and `bytes.len()`.
pub fn decode_one_at(bytes: &[u8], pos: usize) -> (&[u8], usize) {
    let Some(&lead) = bytes.get(pos) else {
        return (&[], bytes.len());
    };
    let end = (pos + sequence_len(lead)).min(bytes.len());
    (&bytes[pos..end], end)
}
