//! Fixed-capacity operand stack

use crate::errors::Diag;

///default number of slots
pub const CAPACITY: usize = 23;

///LIFO stack of 32-bit values that refuses pushes once full
#[derive(Debug, Clone)]
pub struct Stack {
	vals: Vec<i32>,
	cap: usize
}
impl Default for Stack {
	fn default() -> Self {
		Self::with_capacity(CAPACITY)
	}
}
impl Stack {
	pub fn with_capacity(cap: usize) -> Self {
		Self {vals: Vec::with_capacity(cap), cap}
	}

	#[inline(always)]
	///append on top, stack is left unchanged if full
	pub fn push(&mut self, n: i32) -> Result<(), Diag> {
		if self.vals.len() < self.cap {
			self.vals.push(n);
			Ok(())
		}
		else {Err(Diag::StackOverflow)}
	}

	#[inline(always)]
	///remove top, `None` means a caller skipped its size check
	pub fn pop(&mut self) -> Option<i32> {
		self.vals.pop()
	}

	#[inline(always)]
	pub fn peek(&self) -> Option<i32> {
		self.vals.last().copied()
	}

	#[inline(always)]
	pub fn size(&self) -> usize {
		self.vals.len()
	}

	pub fn capacity(&self) -> usize {
		self.cap
	}

	///all values from bottom to top, does not mutate
	pub fn dump(&self) -> impl Iterator<Item = i32> + '_ {
		self.vals.iter().copied()
	}

	pub fn as_slice(&self) -> &[i32] {
		&self.vals
	}
}
