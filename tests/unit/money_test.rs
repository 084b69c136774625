//! Tests for currency string parsing

use receipt_points::core::models::{MoneyParts, money};
use test_case::test_case;

#[test_case("1.25", 1, 25 ; "valid format")]
#[test_case("10000.25", 10000, 25 ; "many dollar digits")]
#[test_case("1.00", 1, 0 ; "no cents")]
#[test_case("0.10", 0, 10 ; "leading zero cents")]
fn test_parse_valid(price: &str, dollars: u64, cents: u64) {
    assert_eq!(MoneyParts::parse(price), Some(MoneyParts { dollars, cents }));
    assert_eq!(money::dollars(price), Some(dollars));
    assert_eq!(money::cents(price), Some(cents));
}

#[test_case("1." ; "cents missing")]
#[test_case(".25" ; "dollars missing")]
#[test_case("1" ; "period missing")]
#[test_case("" ; "empty string")]
#[test_case("a1.25" ; "letters")]
#[test_case("1.2.5" ; "two periods")]
fn test_parse_malformed(price: &str) {
    assert_eq!(MoneyParts::parse(price), None);
    assert_eq!(money::dollars(price), None);
    assert_eq!(money::cents(price), None);
}

#[test_case("9.00", Some(9.0) ; "round amount")]
#[test_case("0.25", Some(0.25) ; "quarter")]
#[test_case("abc", None ; "not a number")]
fn test_as_f64(price: &str, expected: Option<f64>) {
    assert_eq!(money::as_f64(price), expected);
}
