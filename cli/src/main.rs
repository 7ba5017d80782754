use std::{error::Error, io::Write};

use clap::Parser;
use log::{debug, info};

use cornercube::prelude::*;

/// Number of turns used with --random
const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Turn the corners of a cube and put them into a fixed reference frame
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the start cube, e.g. "R U' x2"
	#[arg(short, long, default_value_t = String::new())]
	sequence: String,

	/// Start from this permutation (cubie at each position 0..7, comma separated)
	#[arg(long, value_delimiter = ',', requires = "orientation")]
	permutation: Option<Vec<u8>>,

	/// Start from this orientation (0, 1 or 2 at each position 0..7, comma separated)
	#[arg(long, value_delimiter = ',', requires = "permutation")]
	orientation: Option<Vec<u8>>,

	/// Scramble the cube before applying the sequence
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Number of turns of the scramble
	#[arg(long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
	random_length: usize,

	/// Normalize the resulting cube and print the rotations used
	#[arg(short, long, default_value_t = false)]
	normalize: bool,

	/// Print turns as codes ("R3") rather than in notation ("R'")
	#[arg(short, long, default_value_t = false)]
	code: bool,

	/// Print the resulting cube as a JSON {"p": [..], "o": [..]} object
	#[arg(short, long, default_value_t = false)]
	json: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

/// Parse the start cube from the arguments
fn start_state(args: &Args) -> Result<State, Box<dyn Error>> {
	let (p, o) = match (&args.permutation, &args.orientation) {
		(Some(p), Some(o)) => (p, o),
		_ => return Ok(State::new()),
	};

	let p: [u8; NUM_CORNERS] = p
		.as_slice()
		.try_into()
		.map_err(|_| format!("Expected {} cubies, got {}", NUM_CORNERS, p.len()))?;
	let o: [u8; NUM_CORNERS] = o
		.as_slice()
		.try_into()
		.map_err(|_| format!("Expected {} orientations, got {}", NUM_CORNERS, o.len()))?;

	Ok(State::from_arrays(&p, &o)?)
}

fn format_turns(turns: &[Turn], code: bool) -> String {
	turns
		.iter()
		.map(|t| if code { t.code() } else { t.to_string() })
		.collect::<Vec<_>>()
		.join(" ")
}

/// Write the cube and what holds true for it
fn write_cube(out: &mut dyn Write, cube: &State, json: bool) -> Result<(), Box<dyn Error>> {
	if json {
		writeln!(out, "{}", serde_json::to_string(&cube.config())?)?;
	} else {
		writeln!(out, "{}", cube)?;
	}
	writeln!(out, "normalized: {}", cube.is_normalized())?;
	writeln!(out, "oriented: {}", cube.is_oriented())?;
	writeln!(out, "solved: {}", cube.is_solved())?;
	Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
	pretty_env_logger::init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn std::io::Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	let mut cube = start_state(&args)?;

	// Generate a random input cube
	if args.random {
		let scramble = random_sequence(args.random_length);
		info!("Scramble: {}", format_turns(&scramble, args.code));
		writeln!(out, "scramble: {}", format_turns(&scramble, args.code))?;
		writeln!(out, "undo: {}", format_turns(&inverse_sequence(&scramble), args.code))?;
		cube = cube.apply_turns(scramble);
	}

	cube = cube.apply_sequence(&args.sequence)?;
	debug!("Cube after the sequence: {}", cube);

	if args.normalize {
		let rotations = cube.normalize()?;
		writeln!(out, "normalize: {}", format_turns(&rotations, args.code))?;
	}

	write_cube(&mut out, &cube, args.json)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn start_from_arrays() {
		let args = Args::parse_from([
			"cornercube-cli",
			"--permutation",
			"4,1,0,3,6,5,2,7",
			"--orientation",
			"2,0,1,0,1,0,2,0",
		]);
		let cube = start_state(&args).unwrap();
		assert_eq!(cube, State::new().apply_sequence("R").unwrap());
	}

	#[test]
	fn bad_start() {
		let args = Args::parse_from([
			"cornercube-cli",
			"--permutation",
			"0,1,2,3",
			"--orientation",
			"0,0,0,0,0,0,0,0",
		]);
		assert!(start_state(&args).is_err());

		let args = Args::parse_from([
			"cornercube-cli",
			"--permutation",
			"0,1,2,3,4,5,6,6",
			"--orientation",
			"0,0,0,0,0,0,0,0",
		]);
		assert!(start_state(&args).is_err());
	}

	#[test]
	fn turn_output() {
		let turns = parse_turns("x' z2 R").unwrap();
		assert_eq!(format_turns(&turns, false), "x' z2 R");
		assert_eq!(format_turns(&turns, true), "x3 z2 R1");
	}

	#[test]
	fn cube_output() {
		let cube = State::new().apply_sequence("R").unwrap();

		let mut out: Vec<u8> = Vec::new();
		write_cube(&mut out, &cube, false).unwrap();
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"[4,1,0,3,6,5,2,7] [2,0,1,0,1,0,2,0]\nnormalized: true\noriented: false\nsolved: false\n"
		);

		let mut out: Vec<u8> = Vec::new();
		write_cube(&mut out, &State::new(), true).unwrap();
		let out = String::from_utf8(out).unwrap();
		let json = out.lines().next().unwrap();
		let config: CornerConfig = serde_json::from_str(json).unwrap();
		assert_eq!(State::try_from(config).unwrap(), State::new());
		assert!(out.contains("oriented: true"));
	}
}
