use srpn::{IOTriple, State, Fault, run};

///output of one session
pub struct Session {
	pub out: String,
	pub err: String,
	pub res: Result<(), Fault>
}

///feed `src` to `run` on the given state
pub fn session(st: &mut State, src: &str) -> Session {
	session_bytes(st, src.as_bytes())
}

///same as `session`, for input that need not be UTF-8
pub fn session_bytes(st: &mut State, mut src: &[u8]) -> Session {
	let (mut out, mut err) = (Vec::new(), Vec::new());
	let res = {
		let mut io = IOTriple {input: &mut src, output: &mut out, error: &mut err};
		run(st, &mut io)
	};
	Session {
		out: String::from_utf8(out).unwrap(),
		err: String::from_utf8(err).unwrap(),
		res
	}
}

///fresh state, panics on a fault
pub fn eval(src: &str) -> (String, String) {
	let s = session(&mut State::default(), src);
	s.res.unwrap();
	(s.out, s.err)
}
