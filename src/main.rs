use srpn::{State, IOTriple, Fault, exec, run, stdio};

const HELPMSG: &str = "\
srpn - saturating reverse Polish notation calculator

Usage: srpn [OPTIONS] [EXPRESSIONS/FILES]

Options:
  -i, --inter   read lines from standard input until end of input (default)
  -e, --expr    evaluate every argument as one line of input
  -f, --file    evaluate every line of the named files
  -h, --help    print this message and exit

-i may be combined with -e or -f to continue interactively afterwards.
Arguments made only of '-' and option letters are options, everything else is an
expression or file name.

Commands:
  [-]digits     push a number, a leading 0 makes it octal
  + - * / % ^   replace the top two values with the result
  =             print the top value
  d             print the whole stack, bottom first
  r             push the next pseudo-random value
  #             ignore the rest of the line";

fn main() {
	//parse options
	let (mut i, mut e, mut f, mut h) = (false, false, false, false);
	let mut names: Vec<String> = Vec::new();
	let args: Vec<String> = std::env::args().skip(1).collect();	//get args, skip name of binary
	if args.is_empty() {i=true};	//default to interactive
	for arg in args {
		if let Some(flag) = arg.strip_prefix("--") {	//long option
			match flag {
				"inter" => {i=true;}
				"expr" => {e=true;}
				"file" => {f=true;}
				"help" => {h=true;}
				_ => {
					eprintln!("! Unrecognized option: --{flag}, use -h for help");
					std::process::exit(2);
				}
			}
			continue;
		}
		if is_short_flags(&arg) {	//short option, multiple at once possible
			for flag in arg.chars() {
				match flag {
					'-' => {}	//allow -f-i or similar
					'i' => {i=true;}
					'e' => {e=true;}
					'f' => {f=true;}
					'h' => {h=true;}
					_ => {}	//filtered by is_short_flags
				}
			}
			continue;
		}
		names.push(arg);
	}

	if h {	//always exits
		println!("{HELPMSG}");
		std::process::exit(0);
	}
	let mut st = State::default();
	let mut io = stdio!();
	let res = match (i, e, f) {
		(_, true, true) => {
			eprintln!("! Invalid options: both -e and -f present");
			std::process::exit(2);
		}
		(false, false, false) => {file_mode(&mut st, &mut io, names, false)}	//no flags: assume filenames
		(true, false, false) => {run(&mut st, &mut io)}
		(_, true, false) => {expression_mode(&mut st, &mut io, names, i)}
		(_, false, true) => {file_mode(&mut st, &mut io, names, i)}
	};
	if let Err(err) = res {
		eprintln!("{err}");
		std::process::exit(1);
	}
}

///`-` followed only by option letters, anything else is an expression or file name
fn is_short_flags(arg: &str) -> bool {
	arg.len() > 1 && arg.starts_with('-') && arg.chars().all(|c| "-iefh".contains(c))
}

fn expression_mode(st: &mut State, io: &mut IOTriple, exprs: Vec<String>, inter: bool) -> Result<(), Fault> {
	if exprs.is_empty() {
		eprintln!("! No expression provided");
	}
	for expr in exprs {
		exec(st, io, &expr)?;
	}
	if inter {run(st, io)} else {Ok(())}
}

fn file_mode(st: &mut State, io: &mut IOTriple, files: Vec<String>, inter: bool) -> Result<(), Fault> {
	if files.is_empty() {
		eprintln!("! No file name provided");
	}
	for file in files {
		match std::fs::read_to_string(&file) {
			Ok(script) => {
				for line in script.lines() {
					exec(st, io, line)?;
				}
			},
			Err(error) => {
				eprintln!("! Unable to read file \"{file}\": {error}");
			}
		}
	}
	if inter {run(st, io)} else {Ok(())}
}
