use cornercube::prelude::*;

fn main() -> Result<(), CubeError> {
	let turns1 = parse_turns("U2 D2 B2 F2 L2 R2")?;
	let turns2 = parse_turns("B2 F2 L2 R2 U2 D2")?;

	let cube = State::new().apply_turns(turns1).apply_turns(turns2);
	assert!(cube.is_solved());

	// A rotated cube is only solved after normalizing
	let mut rotated = cube.apply_sequence("x y2")?;
	assert!(!rotated.is_solved());
	let rotations = rotated.normalize()?;
	assert!(rotated.is_solved());

	for turn in rotations {
		print!("{} ", turn);
	}
	println!();

	Ok(())
}
