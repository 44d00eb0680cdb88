//! Literal conversion
//!
//! A literal is `-?[0-9]+` as cut out by the scanner. A leading `0` followed by more digits
//! makes it octal, in which case reading stops at the first `8` or `9`.

use rug::Integer;
use crate::arith::saturate;

///longest significant digit runs that are folded instead of clamped outright
const MAX_DECIMAL_DIGITS: usize = 10;
const MAX_OCTAL_DIGITS: usize = 11;

///split off the sign
#[inline(always)]
fn sign(lit: &str) -> (bool, &str) {
	match lit.strip_prefix('-') {
		Some(digits) => (true, digits),
		None => (false, lit)
	}
}

///`0` or `-0` followed by at least one more digit
pub fn is_octal(lit: &str) -> bool {
	let (_, digits) = sign(lit);
	digits.len() > 1 && digits.starts_with('0')
}

///leading run of valid octal digits, without the leading zero
pub fn octal_digits(lit: &str) -> &str {
	let (_, digits) = sign(lit);
	let digits = digits.strip_prefix('0').unwrap_or(digits);
	let end = digits.find(['8', '9']).unwrap_or(digits.len());
	&digits[..end]
}

///positional value of an ASCII digit string
fn fold_digits(digits: &str, radix: u8) -> Integer {
	digits.bytes().fold(Integer::new(), |acc, d| acc * radix + (d - b'0'))
}

///Value of a literal, clamped into the `i32` range.
pub fn literal_value(lit: &str) -> i32 {
	let (neg, digits) = sign(lit);
	let (radix, limit, digits) = if is_octal(lit) {
		(8, MAX_OCTAL_DIGITS, octal_digits(lit))
	}
	else {(10, MAX_DECIMAL_DIGITS, digits)};
	if digits.trim_start_matches('0').len() > limit {	//out of range whatever the digits
		return if neg {i32::MIN} else {i32::MAX};
	}
	let mag = fold_digits(digits, radix);
	saturate(&if neg {-mag} else {mag})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn octal_detection() {
		assert!(is_octal("017"));
		assert!(is_octal("-010"));
		assert!(is_octal("00"));
		assert!(!is_octal("0"));
		assert!(!is_octal("-0"));
		assert!(!is_octal("170"));
		assert!(!is_octal("-7"));
	}

	#[test]
	fn octal_truncation() {
		assert_eq!(octal_digits("0192"), "1");
		assert_eq!(octal_digits("-0172"), "172");
		assert_eq!(octal_digits("08"), "");
		assert_eq!(octal_digits("0777"), "777");
	}

	#[test]
	fn values() {
		assert_eq!(literal_value("017"), 15);
		assert_eq!(literal_value("0192"), 1);
		assert_eq!(literal_value("-010"), -8);
		assert_eq!(literal_value("08"), 0);
		assert_eq!(literal_value("-0"), 0);
		assert_eq!(literal_value("42"), 42);
		assert_eq!(literal_value("-42"), -42);
		assert_eq!(literal_value("0000017"), 15);
	}

	#[test]
	fn clamping() {
		assert_eq!(literal_value("2147483647"), i32::MAX);
		assert_eq!(literal_value("2147483648"), i32::MAX);
		assert_eq!(literal_value("-2147483648"), i32::MIN);
		assert_eq!(literal_value("-2147483649"), i32::MIN);
		assert_eq!(literal_value("99999999999999999999999"), i32::MAX);
		assert_eq!(literal_value("-99999999999999999999999"), i32::MIN);
		assert_eq!(literal_value("-1234567890"), -1234567890);
		assert_eq!(literal_value("037777777777"), i32::MAX);
		assert_eq!(literal_value("-020000000000"), i32::MIN);
		assert_eq!(literal_value("-020000000001"), i32::MIN);
		assert_eq!(literal_value("0777777777777777777777777"), i32::MAX);
		assert_eq!(literal_value("-0777777777777777777777777"), i32::MIN);
		assert_eq!(literal_value("000000000000000000017"), 15);
		assert_eq!(literal_value("020000000000"), i32::MAX);
		assert_eq!(literal_value("017777777777"), i32::MAX);
		assert_eq!(literal_value("-017777777777"), -i32::MAX);
	}

	#[test]
	fn long_octal_is_clamped_without_folding() {
		let lit = format!("0{}", "7".repeat(1_000_000));
		assert_eq!(literal_value(&lit), i32::MAX);
		let lit = format!("-0{}9", "1".repeat(1_000_000));
		assert_eq!(literal_value(&lit), i32::MIN);
	}
}
