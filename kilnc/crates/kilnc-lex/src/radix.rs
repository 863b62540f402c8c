//! Numeric bases and the digit mapping shared by all of them.

use crate::error::LexError;

/// Base of a numeric literal, between 2 and [`Radix::MAX`].
///
/// Digits map `0-9` to 0-9 and `a-z`/`A-Z` to 10-35, so 36 is the largest
/// base whose digits can all be written.
///
/// # Example
///
/// ```
/// use kilnc_lex::{LexError, Radix};
///
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(hex.digit_value('f'), Some(15));
/// assert!(hex.accepts(15));
/// assert!(!hex.accepts(16));
/// assert_eq!(Radix::new(37), Err(LexError::UnsupportedBase(37)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Largest supported base.
    pub const MAX: u32 = 36;

    /// Base 2, selected by `0b`/`0B`.
    pub const BINARY: Radix = Radix(2);
    /// Base 10, the default.
    pub const DECIMAL: Radix = Radix(10);
    /// Base 16, selected by `0x`/`0X`.
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Creates a radix, rejecting bases outside `2..=36`.
    pub fn new(base: u32) -> Result<Self, LexError> {
        if (2..=Self::MAX).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(LexError::UnsupportedBase(base))
        }
    }

    /// Selects the base named by the letter after a leading `0`.
    pub fn from_prefix(letter: char) -> Option<Self> {
        match letter {
            'x' | 'X' => Some(Self::HEXADECIMAL),
            'b' | 'B' => Some(Self::BINARY),
            _ => None,
        }
    }

    /// The numeric base.
    #[inline]
    pub fn base(self) -> u32 {
        self.0
    }

    /// Value of `c` under the shared digit mapping, whatever the base.
    ///
    /// Returns `None` for anything that is not an ASCII letter or digit.
    pub fn digit_value(self, c: char) -> Option<u32> {
        match c {
            '0'..='9' => Some(c as u32 - '0' as u32),
            'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
            'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
            _ => None,
        }
    }

    /// Returns true if `value` is a valid digit in this base.
    #[inline]
    pub fn accepts(self, value: u32) -> bool {
        value < self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(Radix::new(2).map(Radix::base), Ok(2));
        assert_eq!(Radix::new(36).map(Radix::base), Ok(36));
        assert_eq!(Radix::new(1), Err(LexError::UnsupportedBase(1)));
        assert_eq!(Radix::new(0), Err(LexError::UnsupportedBase(0)));
        assert_eq!(Radix::new(37), Err(LexError::UnsupportedBase(37)));
    }

    #[test]
    fn test_digit_mapping() {
        let radix = Radix::DECIMAL;
        assert_eq!(radix.digit_value('0'), Some(0));
        assert_eq!(radix.digit_value('9'), Some(9));
        assert_eq!(radix.digit_value('a'), Some(10));
        assert_eq!(radix.digit_value('A'), Some(10));
        assert_eq!(radix.digit_value('z'), Some(35));
        assert_eq!(radix.digit_value('Z'), Some(35));
        assert_eq!(radix.digit_value('_'), None);
        assert_eq!(radix.digit_value('é'), None);
    }

    #[test]
    fn test_base_36_accepts_every_letter() {
        let radix = Radix::new(Radix::MAX).unwrap();
        for c in ('0'..='9').chain('a'..='z') {
            let value = radix.digit_value(c).unwrap();
            assert!(radix.accepts(value), "{c} should be a base-36 digit");
        }
    }

    #[test]
    fn test_from_prefix() {
        assert_eq!(Radix::from_prefix('x'), Some(Radix::HEXADECIMAL));
        assert_eq!(Radix::from_prefix('B'), Some(Radix::BINARY));
        assert_eq!(Radix::from_prefix('o'), None);
        assert_eq!(Radix::default(), Radix::DECIMAL);
    }
}
