//! Currency string parsing
//!
//! Receipt amounts travel as strings such as `"35.35"`. Rules that only need
//! the whole-dollar or cent component read them through [`MoneyParts`] so no
//! binary floating point is involved.
//!
//! # Examples
//!
//! ```
//! use receipt_points::core::models::MoneyParts;
//!
//! let parts = MoneyParts::parse("10000.25").unwrap();
//! assert_eq!(parts.dollars, 10000);
//! assert_eq!(parts.cents, 25);
//!
//! assert!(MoneyParts::parse("1.").is_none());
//! assert!(MoneyParts::parse(".25").is_none());
//! ```

/// Whole-unit and fractional components of a currency string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoneyParts {
    /// Digits before the period
    pub dollars: u64,
    /// Digits after the period, read as an integer
    pub cents: u64,
}

impl MoneyParts {
    /// Split `price` around a single `.` into two numeric parts
    ///
    /// Returns `None` unless the string splits into exactly two non-empty
    /// segments made only of ASCII digits. Both parts are unparseable
    /// together; there is no partial result.
    #[must_use]
    pub fn parse(price: &str) -> Option<Self> {
        let (dollars, cents) = split_digits(price)?;
        Some(Self {
            dollars: dollars.parse().ok()?,
            cents: cents.parse().ok()?,
        })
    }

    /// Whether the amount has no cents
    #[must_use]
    pub const fn is_round(self) -> bool {
        self.cents == 0
    }
}

/// Dollars before the period of `price`, or `None` if malformed
#[must_use]
pub fn dollars(price: &str) -> Option<u64> {
    MoneyParts::parse(price).map(|p| p.dollars)
}

/// Cents after the period of `price`, or `None` if malformed
///
/// Only the cents segment is converted; the dollars segment just has to be
/// digits, so whole-dollar amounts of any length still report their cents.
#[must_use]
pub fn cents(price: &str) -> Option<u64> {
    let (_, cents) = split_digits(price)?;
    cents.parse().ok()
}

/// Parse `price` as a real number
///
/// Only the quarter-multiple and description-length rules use this; they are
/// defined over floating-point arithmetic.
#[must_use]
pub fn as_f64(price: &str) -> Option<f64> {
    price.parse().ok()
}

/// Split `price` into its dollars and cents segments
///
/// Both segments must be non-empty ASCII digits with exactly one `.` between
/// them.
fn split_digits(price: &str) -> Option<(&str, &str)> {
    let (dollars, cents) = price.split_once('.')?;
    (is_digits(dollars) && is_digits(cents)).then_some((dollars, cents))
}

fn is_digits(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}
