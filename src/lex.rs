//! Character-level scanner for one whitespace-delimited token
//!
//! Digits are collected into literals, a `-` directly in front of a digit starts a negative
//! literal instead of subtracting, and `#` ends everything that follows on the line.

use phf::phf_map;
use crate::arith::BinOp;

///non-numeric commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
	///pop two, push result
	Op(BinOp),
	///`=` print top
	Print,
	///`d` print everything
	Dump,
	///`r` push next replay value
	Recall
}

///command characters
static CMDS: phf::Map<char, Cmd> = phf_map! {
	'+' => Cmd::Op(BinOp::Add),
	'-' => Cmd::Op(BinOp::Sub),
	'*' => Cmd::Op(BinOp::Mul),
	'/' => Cmd::Op(BinOp::Div),
	'%' => Cmd::Op(BinOp::Rem),
	'^' => Cmd::Op(BinOp::Pow),
	'=' => Cmd::Print,
	'd' => Cmd::Dump,
	'r' => Cmd::Recall,
};

///classified piece of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit<'a> {
	///`-?[0-9]+`, borrowed from the token
	Literal(&'a str),
	Cmd(Cmd),
	Unknown(char),
	///`#`, nothing after it on the line counts
	Comment
}

///command bound to a character, if any
pub fn command(c: char) -> Option<Cmd> {
	CMDS.get(&c).copied()
}

///whether a `-` followed by `rest` opens a literal; a bare `-0` does not
fn negative_prefix(rest: &str) -> bool {
	let mut it = rest.chars();
	match it.next() {
		Some('0') => it.next().is_some_and(|c| c.is_ascii_digit()),
		Some(c) => c.is_ascii_digit(),
		None => false
	}
}

///Iterator over the [`Unit`]s of a single token, scanned left to right with one character of lookahead.
pub struct Scanner<'a> {
	tok: &'a str,
	///byte offset of the next character
	pos: usize,
	///start of the literal being collected
	lit: Option<usize>
}
impl<'a> Scanner<'a> {
	pub fn new(tok: &'a str) -> Self {
		Self {tok, pos: 0, lit: None}
	}
}
impl<'a> Iterator for Scanner<'a> {
	type Item = Unit<'a>;

	fn next(&mut self) -> Option<Unit<'a>> {
		while let Some(c) = self.tok[self.pos..].chars().next() {
			let at = self.pos;
			self.pos += c.len_utf8();
			let rest = &self.tok[self.pos..];

			if c == '#' {
				self.pos = self.tok.len();
				self.lit = None;
				return Some(Unit::Comment);
			}

			if c.is_ascii_digit() {
				let start = *self.lit.get_or_insert(at);
				if !rest.starts_with(|n: char| n.is_ascii_digit()) {	//literal ends here
					self.lit = None;
					return Some(Unit::Literal(&self.tok[start..self.pos]));
				}
				continue;
			}

			match command(c) {
				Some(Cmd::Op(BinOp::Sub)) if negative_prefix(rest) => {self.lit = Some(at);},
				Some(cmd) => {return Some(Unit::Cmd(cmd));},
				None => {return Some(Unit::Unknown(c));}
			}
		}
		None
	}
}

///scan one token
pub fn scan(tok: &str) -> Scanner<'_> {
	Scanner::new(tok)
}
