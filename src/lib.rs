//! Saturating reverse Polish notation calculator
//!
//! Input is read line by line. Every line is split on whitespace and each token is scanned
//! character by character: digit runs become literals (octal if they start with `0`), the
//! characters `+-*/%^` pop two values and push the result, `=` prints the top value, `d` prints
//! the whole stack, `r` pushes the next value of a fixed pseudo-random sequence and `#` ends the line.
//!
//! All values stay within the `i32` range, results that would leave it are clamped to the nearest bound.

pub mod errors;

pub mod stack;

pub mod arith;

pub mod conv;

pub mod lex;

pub mod replay;

use std::io::{Write, BufRead};
use errors::Diag;
pub use errors::Fault;
use lex::{Cmd, Unit};
use stack::Stack;
use replay::Replay;

///Bundled state storage for one calculator instance
#[derive(Default)]
pub struct State {
	///operand stack
	stk: Stack,
	///source for `r`
	rep: Replay
}
impl State {
	///replace stack with an empty one of different size
	pub fn custom_capacity(mut self, cap: usize) -> Self {
		self.stk = Stack::with_capacity(cap);
		self
	}
	///replace replay sequence, cursor starts over
	pub fn custom_replay(mut self, seq: &'static [i32]) -> Self {
		self.rep = Replay::new(seq);
		self
	}

	pub fn stack(&self) -> &Stack {
		&self.stk
	}
	pub fn replay(&self) -> &Replay {
		&self.rep
	}
}

///Bundle of generic IO streams, for brevity.
pub struct IOTriple<'a> {
	pub input: &'a mut dyn BufRead,
	pub output: &'a mut dyn Write,
	pub error: &'a mut dyn Write
}
#[macro_export]
///Default IO triple using stdin, stdout, stderr
macro_rules! stdio {
	() => {
		::srpn::IOTriple {
			input: &mut ::std::io::BufReader::new(::std::io::stdin()),
			output: &mut ::std::io::stdout(),
			error: &mut ::std::io::stderr()
		}
	}
}

#[inline(always)]
///push, report overflow
fn push(st: &mut State, io: &mut IOTriple, n: i32) -> std::io::Result<()> {
	if let Err(d) = st.stk.push(n) {
		writeln!(io.error, "{d}")?;
	}
	Ok(())
}

///Executes one line of input on the given state.
///
///Usage of the provided IO streams:
///- output: values printed by `=` and `d`, one per line.
///- error: diagnostics (overflow, underflow, division by 0, negative power, unknown characters).
///
///Diagnostics never stop evaluation. Terminates with `Err` if `=` finds an empty stack,
///if `r` runs out of values, or if writing to a stream fails.
pub fn exec(st: &mut State, io: &mut IOTriple, line: &str) -> Result<(), Fault> {
	for tok in line.split_whitespace() {
		for unit in lex::scan(tok) {
			match unit {
				Unit::Literal(lit) => {push(st, io, conv::literal_value(lit))?;},
				Unit::Cmd(cmd) => {dispatch(st, io, cmd)?;},
				Unit::Unknown(c) => {writeln!(io.error, "{}", Diag::Unrecognised(c))?;},
				Unit::Comment => {return Ok(());}	//rest of line is ignored
			}
		}
	}
	Ok(())
}

///execute one non-numeric command
fn dispatch(st: &mut State, io: &mut IOTriple, cmd: Cmd) -> Result<(), Fault> {
	match cmd {
		Cmd::Print => {
			let top = st.stk.peek().ok_or(Fault::EmptyStack('='))?;
			writeln!(io.output, "{top}")?;
		},
		Cmd::Dump => {
			for n in st.stk.dump() {
				writeln!(io.output, "{n}")?;
			}
		},
		Cmd::Recall => {
			let n = st.rep.next().ok_or(Fault::ReplayExhausted(st.rep.len()))?;
			push(st, io, n)?;
		},
		Cmd::Op(op) => {
			if st.stk.size() < 2 {
				writeln!(io.error, "{}", Diag::StackUnderflow)?;
				return Ok(());
			}
			let first = st.stk.pop().ok_or(Fault::EmptyStack(op.symbol()))?;
			let second = st.stk.pop().ok_or(Fault::EmptyStack(op.symbol()))?;
			match op.apply(first, second) {
				Ok(n) => {push(st, io, n)?;},
				Err(d) => {	//put operands back as they were
					push(st, io, second)?;
					push(st, io, first)?;
					writeln!(io.error, "{d}")?;
				}
			}
		}
	}
	Ok(())
}

///Reads `io.input` one line at a time and executes each, until end of input.
///
///Bytes that are not valid UTF-8 become U+FFFD and are reported like any other unknown character.
pub fn run(st: &mut State, io: &mut IOTriple) -> Result<(), Fault> {
	let mut buf = Vec::new();
	loop {
		buf.clear();
		if io.input.read_until(b'\n', &mut buf)? == 0 {
			return Ok(());
		}
		exec(st, io, &String::from_utf8_lossy(&buf))?;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	///run `src` through `exec` line by line, returning stdout and stderr
	fn eval(st: &mut State, src: &str) -> (String, String) {
		let (mut out, mut err) = (Vec::new(), Vec::new());
		{
			let mut io = IOTriple {input: &mut std::io::empty(), output: &mut out, error: &mut err};
			for line in src.lines() {
				exec(st, &mut io, line).unwrap();
			}
		}
		(String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
	}

	#[test]
	fn basic_arithmetic() {
		let mut st = State::default();
		assert_eq!(eval(&mut st, "10 2 - =").0, "8\n");
		assert_eq!(eval(&mut st, "3 ^ =").0, "512\n");
		assert_eq!(st.stack().as_slice(), &[512]);
	}

	#[test]
	fn divide_by_zero_restores_operands() {
		let mut st = State::default();
		let (_, err) = eval(&mut st, "5 0 /");
		assert_eq!(err, "Divide by 0.\n");
		assert_eq!(st.stack().as_slice(), &[5, 0]);
	}

	#[test]
	fn underflow_leaves_stack() {
		let mut st = State::default();
		let (_, err) = eval(&mut st, "7 *");
		assert_eq!(err, "Stack underflow.\n");
		assert_eq!(st.stack().as_slice(), &[7]);
	}

	#[test]
	fn empty_print_is_fatal() {
		let mut st = State::default();
		let (mut out, mut err) = (Vec::new(), Vec::new());
		let mut io = IOTriple {input: &mut std::io::empty(), output: &mut out, error: &mut err};
		assert!(matches!(exec(&mut st, &mut io, "="), Err(Fault::EmptyStack('='))));
	}

	#[test]
	fn small_capacity() {
		let mut st = State::default().custom_capacity(2);
		assert_eq!(st.stack().capacity(), 2);
		let (_, err) = eval(&mut st, "1 2 3");
		assert_eq!(err, "Stack overflow.\n");
		assert_eq!(st.stack().as_slice(), &[1, 2]);
	}
}
