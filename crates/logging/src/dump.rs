//! crates/logging/src/dump.rs
//! Renderings of raw byte buffers for embedding in diagnostics.
//!
//! - [`write_dump`] / [`Dump`]: fixed-width multi-line hex + ASCII dump.
//! - [`HexBytes`]: compact `(0x…)` hex run.
//! - [`BufText`]: printable characters followed by the compact hex run.
//! - [`BufSummary`]: one-line ` len N; hex …; asc …;` summary.

use std::fmt::{self, Write};

use crate::hex::HEX_DIGITS;

/// Bytes per line used by [`Dump::new`].
pub const DEFAULT_DUMP_WIDTH: usize = 16;

/// Largest number of bytes per line; wider requests are clamped to it.
pub const MAX_DUMP_WIDTH: usize = 1 << 16;

/// Character shown in the ASCII column of a [`Dump`] for non-printable bytes.
pub const NON_PRINTABLE: char = '.';

const SPACES: &str = "                                                                ";

const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

fn write_hex_pair<W>(out: &mut W, byte: u8) -> fmt::Result
where
    W: Write + ?Sized,
{
    out.write_char(char::from(HEX_DIGITS[usize::from(byte >> 4)]))?;
    out.write_char(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]))
}

fn write_spaces<W>(out: &mut W, mut count: usize) -> fmt::Result
where
    W: Write + ?Sized,
{
    while count > 0 {
        let run = count.min(SPACES.len());
        out.write_str(&SPACES[..run])?;
        count -= run;
    }
    Ok(())
}

/// Writes a fixed-width dump of `bytes` into `out`.
///
/// Every line covers up to `width` bytes: the bytes as space-separated hex
/// pairs, padded to the width of a full line, two spaces, then the ASCII
/// column with non-printable bytes shown as [`NON_PRINTABLE`]. The ASCII
/// column is never padded. Empty input writes nothing. A `width` of zero is
/// treated as one and widths above [`MAX_DUMP_WIDTH`] are clamped to it.
///
/// # Examples
///
/// ```
/// use logging::write_dump;
///
/// let mut out = String::new();
/// write_dump(&mut out, b"ab\x00", 4).unwrap();
/// assert_eq!(out, "61 62 00     ab.\n");
/// ```
pub fn write_dump<W>(out: &mut W, bytes: &[u8], width: usize) -> fmt::Result
where
    W: Write + ?Sized,
{
    let width = width.clamp(1, MAX_DUMP_WIDTH);

    for chunk in bytes.chunks(width) {
        for (index, &byte) in chunk.iter().enumerate() {
            if index > 0 {
                out.write_char(' ')?;
            }
            write_hex_pair(out, byte)?;
        }
        // Each missing byte would have taken a pair plus its separator.
        write_spaces(out, (width - chunk.len()) * 3 + 2)?;
        for &byte in chunk {
            out.write_char(if is_printable(byte) {
                char::from(byte)
            } else {
                NON_PRINTABLE
            })?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Display adapter around [`write_dump`].
///
/// ```
/// use logging::Dump;
///
/// let text = Dump::with_width(b"0123456789", 8).to_string();
/// assert_eq!(text.lines().count(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Dump<'a> {
    bytes: &'a [u8],
    width: usize,
}

impl<'a> Dump<'a> {
    /// Dumps `bytes` with [`DEFAULT_DUMP_WIDTH`] bytes per line.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self::with_width(bytes, DEFAULT_DUMP_WIDTH)
    }

    /// Dumps `bytes` with `width` bytes per line.
    #[must_use]
    pub const fn with_width(bytes: &'a [u8], width: usize) -> Self {
        Self { bytes, width }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dump(f, self.bytes, self.width)
    }
}

/// Compact hex rendering of a buffer: `(0x` + hex pairs + `)`.
///
/// ```
/// use logging::HexBytes;
///
/// assert_eq!(HexBytes(&[0x01, 0xab]).to_string(), "(0x01ab)");
/// assert_eq!(HexBytes(&[]).to_string(), "(0x)");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HexBytes<'a>(pub &'a [u8]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(0x")?;
        for &byte in self.0 {
            write_hex_pair(f, byte)?;
        }
        f.write_char(')')
    }
}

/// Printable characters of a buffer (others as spaces) followed by its
/// [`HexBytes`] rendering.
///
/// ```
/// use logging::BufText;
///
/// assert_eq!(BufText(b"ok\n").to_string(), "ok (0x6f6b0a)");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BufText<'a>(pub &'a [u8]);

impl fmt::Display for BufText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.0 {
            f.write_char(if is_printable(byte) { char::from(byte) } else { ' ' })?;
        }
        fmt::Display::fmt(&HexBytes(self.0), f)
    }
}

/// One-line summary of a buffer: length, hex run and printable characters.
///
/// ```
/// use logging::BufSummary;
///
/// assert_eq!(BufSummary(b"a\x01").to_string(), " len 2; hex 6101; asc a ;");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BufSummary<'a>(pub &'a [u8]);

impl fmt::Display for BufSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " len {}; hex ", self.0.len())?;
        for &byte in self.0 {
            write_hex_pair(f, byte)?;
        }
        f.write_str("; asc ")?;
        for &byte in self.0 {
            f.write_char(if is_printable(byte) { char::from(byte) } else { ' ' })?;
        }
        f.write_char(';')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump(bytes: &[u8], width: usize) -> String {
        let mut out = String::new();
        write_dump(&mut out, bytes, width).expect("writing to a String");
        out
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert_eq!(dump(&[], 16), "");
        assert_eq!(Dump::new(&[]).to_string(), "");
    }

    #[test]
    fn full_line_has_no_padding() {
        assert_eq!(dump(b"ABCD", 4), "41 42 43 44  ABCD\n");
    }

    #[test]
    fn partial_line_pads_hex_only() {
        assert_eq!(dump(b"ABC", 4), "41 42 43     ABC\n");
    }

    #[test]
    fn zero_width_is_one_byte_per_line() {
        assert_eq!(dump(b"xy", 0), "78  x\n79  y\n");
    }

    #[test]
    fn wide_line_pads_without_format_width() {
        let width = usize::from(u16::MAX) / 3 + 1;
        let out = dump(b"AB", width);
        assert_eq!(out.len(), width * 3 - 1 + 2 + 2 + 1);
        assert!(out.starts_with("41 42 "));
        assert!(out.ends_with("  AB\n"));
    }

    #[test]
    fn huge_width_is_clamped() {
        let out = dump(b"AB", usize::MAX / 2);
        assert_eq!(out, dump(b"AB", MAX_DUMP_WIDTH));
        assert_eq!(out.len(), MAX_DUMP_WIDTH * 3 + 4);
    }

    #[test]
    fn printable_range_boundaries() {
        assert_eq!(dump(&[0x1f, 0x20, 0x7e, 0x7f], 4), "1f 20 7e 7f  . ~.\n");
    }

    #[test]
    fn buf_text_blanks_non_printable() {
        assert_eq!(BufText(&[0x41, 0x00, 0x42]).to_string(), "A B(0x410042)");
    }

    #[test]
    fn summary_of_empty_buffer() {
        assert_eq!(BufSummary(&[]).to_string(), " len 0; hex ; asc ;");
    }
}
