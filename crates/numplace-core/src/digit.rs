//! Cell digit representation.

use std::fmt::{self, Display};

/// A cell digit in the range 1-9.
///
/// This enum provides type-safe representation of board digits, preventing
/// invalid values at compile time. Empty cells are represented as
/// `Option::<Digit>::None` by the containers in this crate, so a zero digit
/// does not exist anywhere in the engine.
///
/// # Examples
///
/// ```
/// use numplace_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Fallible conversion from raw input
/// assert_eq!(Digit::try_from_value(7), Ok(Digit::D7));
/// assert!(Digit::try_from_value(0).is_err());
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

/// Error returned when converting an out-of-range value into a [`Digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid digit value: {value}, expected 1-9")]
pub struct InvalidDigit {
    /// The rejected value.
    pub value: u8,
}

impl Digit {
    /// Array containing all digits from 1 to 9, in order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use [`Digit::try_from_value`]
    /// for input that has not been validated yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use numplace_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Ok(digit) => digit,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a digit from a u8 value, rejecting values outside 1-9.
    ///
    /// This is the conversion seam for raw player input: anything that is not
    /// a digit 1-9 is turned into a deterministic [`InvalidDigit`] error
    /// before it can reach a grid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDigit`] if `value` is not in the range 1-9.
    pub const fn try_from_value(value: u8) -> Result<Self, InvalidDigit> {
        let digit = match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => return Err(InvalidDigit { value }),
        };
        Ok(digit)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl TryFrom<u8> for Digit {
    type Error = InvalidDigit;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_value(value)
    }
}
