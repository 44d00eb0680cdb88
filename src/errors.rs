//! Diagnostic and fatal error types

use std::fmt;

///recoverable conditions, reported on the error stream while evaluation continues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diag {
	StackOverflow,
	StackUnderflow,
	DivideByZero,
	NegativePower,
	///character that is neither a digit nor a command
	Unrecognised(char)
}
impl fmt::Display for Diag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::StackOverflow => write!(f, "Stack overflow."),
			Self::StackUnderflow => write!(f, "Stack underflow."),
			Self::DivideByZero => write!(f, "Divide by 0."),
			Self::NegativePower => write!(f, "Negative power."),
			Self::Unrecognised(c) => write!(f, "Unrecognised operator or operand \"{c}\"."),
		}
	}
}

///unrecoverable conditions, evaluation stops and the caller decides what to do
#[derive(Debug)]
pub enum Fault {
	///command read the top of an empty stack
	EmptyStack(char),
	///recall ran past the end of the replay sequence, holds its length
	ReplayExhausted(usize),
	///reading input or writing output failed
	Io(std::io::Error)
}
impl fmt::Display for Fault {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::EmptyStack(cmd) => write!(f, "! {cmd}: Stack is empty"),
			Self::ReplayExhausted(len) => write!(f, "! r: All {len} replay values have been used"),
			Self::Io(err) => write!(f, "! IO error: {err}"),
		}
	}
}
impl std::error::Error for Fault {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		if let Self::Io(err) = self {Some(err)} else {None}
	}
}
impl From<std::io::Error> for Fault {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn diag_messages() {
		assert_eq!(Diag::StackOverflow.to_string(), "Stack overflow.");
		assert_eq!(Diag::StackUnderflow.to_string(), "Stack underflow.");
		assert_eq!(Diag::DivideByZero.to_string(), "Divide by 0.");
		assert_eq!(Diag::NegativePower.to_string(), "Negative power.");
		assert_eq!(Diag::Unrecognised('x').to_string(), "Unrecognised operator or operand \"x\".");
	}

	#[test]
	fn io_fault_keeps_source() {
		use std::error::Error;
		let f = Fault::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
		assert!(f.source().is_some());
		assert!(Fault::EmptyStack('=').source().is_none());
		assert_eq!(Fault::EmptyStack('=').to_string(), "! =: Stack is empty");
	}
}
