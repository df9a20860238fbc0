//! crates/logging/src/hex.rs
//! Hexadecimal display adapter for unsigned integers.

use std::fmt;

/// Displays an unsigned integer in hexadecimal with a `0x` prefix.
///
/// Only the wrapped value is rendered in hex; values appended afterwards keep
/// their own formatting. Width, fill and alignment requested by the caller
/// apply to the whole `0x…` string.
///
/// # Examples
///
/// ```
/// use logging::Hex;
///
/// assert_eq!(Hex(255).to_string(), "0xff");
/// assert_eq!(Hex(0).to_string(), "0x0");
/// assert_eq!(format!("{} {}", Hex::from(16u8), 16), "0x10 16");
/// assert_eq!(format!("[{:>6}]", Hex(10)), "[   0xa]");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Hex(pub u64);

impl Hex {
    /// Wraps `value`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "0x" plus at most 16 digits.
        let mut digits = [0u8; 18];
        let mut start = digits.len();
        let mut value = self.0;
        loop {
            start -= 1;
            digits[start] = HEX_DIGITS[(value & 0xf) as usize];
            value >>= 4;
            if value == 0 {
                break;
            }
        }
        start -= 2;
        digits[start] = b'0';
        digits[start + 1] = b'x';

        let text = std::str::from_utf8(&digits[start..]).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}

pub(crate) const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

macro_rules! hex_from_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Hex {
                fn from(value: $ty) -> Self {
                    Self(u64::from(value))
                }
            }
        )*
    };
}

hex_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Hex {
    fn from(value: usize) -> Self {
        Self(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_base_prefix() {
        assert_eq!(Hex(255).to_string(), "0xff");
        assert_eq!(Hex(0).to_string(), "0x0");
        assert_eq!(Hex(0xdead_beef).to_string(), "0xdeadbeef");
    }

    #[test]
    fn renders_full_width_value() {
        assert_eq!(Hex(u64::MAX).to_string(), "0xffffffffffffffff");
    }

    #[test]
    fn following_values_stay_decimal() {
        let rendered = format!("{}{}", Hex(255), 255);
        assert_eq!(rendered, "0xff255");
    }

    #[test]
    fn conversions_from_unsigned_types() {
        assert_eq!(Hex::from(0xabu8), Hex(0xab));
        assert_eq!(Hex::from(0xabcdu16).value(), 0xabcd);
        assert_eq!(Hex::from(7u32), Hex::new(7));
        assert_eq!(Hex::from(9usize), Hex(9));
    }

    #[test]
    fn caller_padding_applies_to_whole_string() {
        assert_eq!(format!("{:<5}|", Hex(1)), "0x1  |");
        assert_eq!(format!("{:*^7}", Hex(1)), "**0x1**");
    }
}
