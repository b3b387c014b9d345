//! Decoding of `\u` escapes.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates ASCII hexadecimal digits
//! (`0-9`, `A-F`, `a-f`) into a `u32`, four of them by default. An escape may
//! end early: the first non-hex byte stops it and whatever was accumulated is
//! the code point, so `\u41"` decodes to `A` and a bare `\u` to U+0000.
//! An unbounded buffer reads the whole hex run instead, up to 31 bits.
//!
//! [`encode_code_point`] then writes the code point with the older,
//! pre-RFC 3629 UTF-8 table, which reaches six bytes and 31 bits. Surrogates
//! (`D800`-`DFFF`) are not combined into pairs; each half is written as its
//! own three-byte sequence.

/// Largest code point the encoder can write.
pub(crate) const MAX_CODE_POINT: u32 = 0x7FFF_FFFF;

/// Accumulates hexadecimal digits.
#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u32,
    len: u8,
    max_digits: u8,
}

impl UnicodeEscapeBuffer {
    /// A buffer that takes at most four digits.
    pub fn new() -> Self {
        Self::with_max_digits(4)
    }

    /// A buffer that takes digits until the first non-hex byte.
    pub fn unbounded() -> Self {
        Self::with_max_digits(u8::MAX)
    }

    fn with_max_digits(max_digits: u8) -> Self {
        Self {
            acc: 0,
            len: 0,
            max_digits,
        }
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(b: u8) -> Option<u32> {
        char::from(b).to_digit(16)
    }

    /// Whether no further digit is accepted.
    pub fn is_full(&self) -> bool {
        self.len >= self.max_digits
    }

    /// Feeds one byte. Returns `false`, leaving the buffer untouched, if it
    /// is not a hex digit.
    pub fn push(&mut self, b: u8) -> bool {
        debug_assert!(!self.is_full(), "escape digit limit exceeded");
        let Some(d) = Self::hex_val(b) else {
            return false;
        };
        // Saturates, so an oversized escape stays above MAX_CODE_POINT.
        self.acc = self.acc.saturating_mul(16).saturating_add(d);
        self.len += 1;
        true
    }

    /// The code point read so far, or `None` once it no longer fits in 31
    /// bits.
    pub fn code_point(&self) -> Option<u32> {
        (self.acc <= MAX_CODE_POINT).then_some(self.acc)
    }
}

/// Appends `cp` to `out` as (extended) UTF-8.
///
/// | code point            | bytes |
/// |-----------------------|-------|
/// | `< 0x80`              | 1     |
/// | `< 0x800`             | 2     |
/// | `< 0x1_0000`          | 3     |
/// | `< 0x20_0000`         | 4     |
/// | `< 0x400_0000`        | 5     |
/// | up to `0x7FFF_FFFF`   | 6     |
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_code_point(cp: u32, out: &mut Vec<u8>) {
    debug_assert!(cp <= MAX_CODE_POINT, "code points are at most 31 bits");
    let cont = |shift: u32| (0x80 | ((cp >> shift) & 0x3f)) as u8;
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.extend_from_slice(&[(0xc0 | (cp >> 6)) as u8, cont(0)]);
    } else if cp < 0x1_0000 {
        out.extend_from_slice(&[(0xe0 | (cp >> 12)) as u8, cont(6), cont(0)]);
    } else if cp < 0x20_0000 {
        out.extend_from_slice(&[(0xf0 | (cp >> 18)) as u8, cont(12), cont(6), cont(0)]);
    } else if cp < 0x400_0000 {
        out.extend_from_slice(&[
            (0xf8 | (cp >> 24)) as u8,
            cont(18),
            cont(12),
            cont(6),
            cont(0),
        ]);
    } else {
        out.extend_from_slice(&[
            (0xfc | (cp >> 30)) as u8,
            cont(24),
            cont(18),
            cont(12),
            cont(6),
            cont(0),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_CODE_POINT, UnicodeEscapeBuffer, encode_code_point};

    fn encoded(cp: u32) -> Vec<u8> {
        let mut out = Vec::new();
        encode_code_point(cp, &mut out);
        out
    }

    #[test]
    fn basic_decoding() {
        let mut buf = UnicodeEscapeBuffer::new();
        for b in *b"0041" {
            assert!(buf.push(b));
        }
        assert!(buf.is_full());
        assert_eq!(buf.code_point(), Some(0x41));
    }

    #[test]
    fn mixed_case_hex() {
        let mut buf = UnicodeEscapeBuffer::new();
        for b in *b"AbCd" {
            assert!(buf.push(b));
        }
        assert_eq!(buf.code_point(), Some(0xABCD));
    }

    #[test]
    fn rejects_non_hex_without_consuming() {
        let mut buf = UnicodeEscapeBuffer::new();
        assert!(buf.push(b'f'));
        assert!(!buf.push(b'g'));
        assert!(!buf.is_full());
        assert_eq!(buf.code_point(), Some(0xf));
    }

    #[test]
    fn unbounded_reads_past_four_digits() {
        let mut buf = UnicodeEscapeBuffer::unbounded();
        for b in *b"7fffffff" {
            assert!(buf.push(b));
        }
        assert!(!buf.is_full());
        assert_eq!(buf.code_point(), Some(MAX_CODE_POINT));
        assert!(buf.push(b'0'));
        assert_eq!(buf.code_point(), None);
    }

    #[test]
    fn oversized_escapes_stay_oversized() {
        let mut buf = UnicodeEscapeBuffer::unbounded();
        for b in *b"80000000" {
            buf.push(b);
        }
        assert_eq!(buf.code_point(), None);
        for _ in 0..32 {
            buf.push(b'0');
        }
        assert_eq!(buf.code_point(), None);
    }

    #[test]
    fn standard_ranges_match_core_utf8() {
        for cp in [0x0, 0x41, 0x7f, 0x80, 0xe9, 0x7ff, 0x800, 0x20ac, 0xffff, 0x1_0000, 0x1f600, 0x10_ffff] {
            let ch = char::from_u32(cp).unwrap();
            let mut expected = [0u8; 4];
            assert_eq!(encoded(cp), ch.encode_utf8(&mut expected).as_bytes(), "U+{cp:04X}");
        }
    }

    #[test]
    fn surrogates_encode_as_three_bytes() {
        assert_eq!(encoded(0xd83d), [0xed, 0xa0, 0xbd]);
        assert_eq!(encoded(0xde00), [0xed, 0xb8, 0x80]);
    }

    #[test]
    fn extended_ranges() {
        assert_eq!(encoded(0x1f_ffff), [0xf7, 0xbf, 0xbf, 0xbf]);
        assert_eq!(encoded(0x20_0000), [0xf8, 0x88, 0x80, 0x80, 0x80]);
        assert_eq!(encoded(0x3ff_ffff), [0xfb, 0xbf, 0xbf, 0xbf, 0xbf]);
        assert_eq!(encoded(0x400_0000), [0xfc, 0x84, 0x80, 0x80, 0x80, 0x80]);
        assert_eq!(encoded(0x7fff_ffff), [0xfd, 0xbf, 0xbf, 0xbf, 0xbf, 0xbf]);
    }
}
