//! Saturating binary operators
//!
//! Operands are named by pop order: `first` was on top, `second` below it.
//! Results are computed exactly with [`Integer`] and then clamped into the `i32` range.

use rug::{Integer, ops::Pow as _};
use crate::errors::Diag;

///binary operator commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
	Add,
	Sub,
	Mul,
	Div,
	Rem,
	Pow
}
impl BinOp {
	///command character
	pub fn symbol(self) -> char {
		match self {
			Self::Add => '+',
			Self::Sub => '-',
			Self::Mul => '*',
			Self::Div => '/',
			Self::Rem => '%',
			Self::Pow => '^',
		}
	}

	///Computes `second <op> first`, saturated.
	///
	///Fails without computing anything if `first` is 0 for `/` and `%`, or negative for `^`.
	pub fn apply(self, first: i32, second: i32) -> Result<i32, Diag> {
		let wide = Integer::from(second);
		let res = match self {
			Self::Add => wide + first,
			Self::Sub => wide - first,
			Self::Mul => wide * first,
			Self::Div|Self::Rem if first == 0 => {return Err(Diag::DivideByZero);}
			Self::Div => wide / first,	//truncates toward zero
			Self::Rem => wide % first,	//sign of dividend
			Self::Pow => {
				if first < 0 {return Err(Diag::NegativePower);}
				wide.pow(pow_exponent(second, first as u32))
			}
		};
		Ok(saturate(&res))
	}
}

///clamp into [i32::MIN, i32::MAX]
pub fn saturate(n: &Integer) -> i32 {
	n.to_i32().unwrap_or(if *n < 0 {i32::MIN} else {i32::MAX})
}

#[inline(always)]
///any base of magnitude 2+ leaves the i32 range by the 32nd power, keep parity for the sign
fn pow_exponent(base: i32, exp: u32) -> u32 {
	if base.unsigned_abs() > 1 && exp > 33 {32 + (exp & 1)} else {exp}
}
