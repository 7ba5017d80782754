use bit_set::BitSet;
use serde::{Deserialize, Serialize};

use super::{transform::*, turn::*, *};

/*
 * Bit layout, bit i belongs to position i.
 *
 * permutation:  3 bit-planes. The cubie at position i is
 *               (p2[i] << 2) | (p1[i] << 1) | p0[i]
 * orientation:  8 fields of 2 bits, field i at bits 2i..2i+1,
 *               holding one of the ORI_CODES (00, 01, 11)
 *
 * Example (positions written 7 to 0):
 * permutation:      3, 7, 4, 2, 6, 0, 5, 1
 *          p2 = 0b  0  1  1  0  1  0  1  0
 *          p1 = 0b  1  1  0  1  1  0  0  0
 *          p0 = 0b  1  1  0  0  0  0  1  1
 *
 * orientation:      1, 0, 2, 2, 0, 1, 1, 2
 *          o  = 0b 01 00 11 11 00 01 01 11
 */

/// Builds the identity plane for the given bit of the cubie index:
/// bit i is set iff bit `bit` of i is set.
const fn identity_plane(bit: usize) -> u8 {
	let mut out = 0;
	let mut i = 0;
	while i < NUM_CORNERS {
		out |= (((i >> bit) & 1) as u8) << i;
		i += 1;
	}
	out
}

/// High bit-plane of the identity permutation (0b1111_0000)
pub const PLANE2_SOLVED: u8 = identity_plane(2);
/// Middle bit-plane of the identity permutation (0b1100_1100)
pub const PLANE1_SOLVED: u8 = identity_plane(1);
/// Low bit-plane of the identity permutation (0b1010_1010)
pub const PLANE0_SOLVED: u8 = identity_plane(0);
/// Every corner oriented
pub const ORI_SOLVED: u16 = 0;

/// The position bit of the reference cubie, set in all three identity planes
const REFERENCE_BIT: u8 = 1 << REFERENCE_CUBIE;
/// The low bit of the reference position's orientation field
const REFERENCE_ORI_BIT: u16 = 1 << (2 * REFERENCE_CUBIE);
/// Low bits of all orientation fields
const ORIENTED_MASK: u16 = 0x5555;

/// The corner configuration of the cube.
///
/// States are plain values: applying a turn gives a new state.
/// The only in-place change is [`State::normalize`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct State {
	p2: u8,
	p1: u8,
	p0: u8,
	o: u16,
}

/// The solved state
pub const SOLVED: State = State::new();

/// A corner configuration as plain arrays, indexed by position:
/// `p[i]` is the cubie at position i and `o[i]` its orientation (0, 1 or 2).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CornerConfig {
	pub p: [u8; NUM_CORNERS],
	pub o: [u8; NUM_CORNERS],
}

impl Default for State {
	fn default() -> Self {
		Self::new()
	}
}

impl State {
	/// The solved state
	pub const fn new() -> Self {
		State {
			p2: PLANE2_SOLVED,
			p1: PLANE1_SOLVED,
			p0: PLANE0_SOLVED,
			o: ORI_SOLVED,
		}
	}

	/// Create a state from its bit-planes and orientation field.
	/// Fails if the planes are no permutation or the unused code 10 appears.
	pub fn from_planes(p2: u8, p1: u8, p0: u8, o: u16) -> Result<Self, CubeError> {
		let state = State { p2, p1, p0, o };
		state.check()?;
		Ok(state)
	}

	/// Create a state from a permutation and an orientation array (both indexed by position).
	pub fn from_arrays(p: &[u8; NUM_CORNERS], o: &[u8; NUM_CORNERS]) -> Result<Self, CubeError> {
		let mut state = State {
			p2: 0,
			p1: 0,
			p0: 0,
			o: 0,
		};

		for pos in 0..NUM_CORNERS {
			let cubie = p[pos] as usize;
			if NUM_CORNERS <= cubie {
				return Err(StateDefect::CubieOutOfRange { position: pos, cubie }.into());
			}
			let ori = o[pos] as usize;
			if NUM_ORIENTATIONS <= ori {
				return Err(StateDefect::OrientationOutOfRange { position: pos, ori }.into());
			}

			state.p2 |= (((cubie >> 2) & 1) as u8) << pos;
			state.p1 |= (((cubie >> 1) & 1) as u8) << pos;
			state.p0 |= ((cubie & 1) as u8) << pos;
			state.o |= ORI_CODES[ori] << (2 * pos);
		}

		state.check()?;
		Ok(state)
	}

	/// Check that every cubie occurs once and no orientation field holds 10
	fn check(&self) -> Result<(), StateDefect> {
		for pos in 0..NUM_CORNERS {
			if (self.o >> (2 * pos)) & 0b11 == ORI_CODE_UNUSED {
				return Err(StateDefect::UnusedOrientationCode(pos));
			}
		}

		let mut seen = BitSet::with_capacity(NUM_CORNERS);
		for pos in 0..NUM_CORNERS {
			let cubie = self.cubie_at(pos);
			if !seen.insert(cubie) {
				return Err(StateDefect::DuplicateCubie(cubie));
			}
		}

		Ok(())
	}

	/// The bit-planes (p2, p1, p0)
	pub const fn planes(&self) -> (u8, u8, u8) {
		(self.p2, self.p1, self.p0)
	}

	/// The packed orientation field
	pub const fn orientation_bits(&self) -> u16 {
		self.o
	}

	/// Get the cubie at position 'pos'
	pub const fn cubie_at(&self, pos: usize) -> usize {
		let b2 = (self.p2 >> pos) & 1;
		let b1 = (self.p1 >> pos) & 1;
		let b0 = (self.p0 >> pos) & 1;
		((b2 << 2) | (b1 << 1) | b0) as usize
	}

	/// Get the orientation of the cubie at position 'pos'
	pub const fn orientation_at(&self, pos: usize) -> Ori {
		match ori_from_code(self.o >> (2 * pos)) {
			Some(ori) => ori,
			None => {
				// Constructors reject 10 and TWIST_CODE never produces it
				debug_assert!(false, "unused orientation code 10");
				2
			}
		}
	}

	/// The cubie at every position
	pub fn permutation(&self) -> [usize; NUM_CORNERS] {
		std::array::from_fn(|pos| self.cubie_at(pos))
	}

	/// The orientation at every position
	pub fn orientation(&self) -> [Ori; NUM_CORNERS] {
		std::array::from_fn(|pos| self.orientation_at(pos))
	}

	pub fn config(&self) -> CornerConfig {
		CornerConfig {
			p: std::array::from_fn(|pos| self.cubie_at(pos) as u8),
			o: self.orientation(),
		}
	}

	/// Whether the cube is solved.
	/// Only meaningful on a normalized state, a rotated solved cube reports false.
	pub const fn is_solved(&self) -> bool {
		self.p2 == PLANE2_SOLVED
			&& self.p1 == PLANE1_SOLVED
			&& self.p0 == PLANE0_SOLVED
			&& self.o == ORI_SOLVED
	}

	/// Whether the reference cubie is in its own slot and oriented
	pub const fn is_normalized(&self) -> bool {
		(self.p2 & self.p1 & self.p0 & REFERENCE_BIT) != 0 && (self.o & REFERENCE_ORI_BIT) == 0
	}

	/// Whether every cubie is oriented, regardless of where it is
	pub const fn is_oriented(&self) -> bool {
		(self.o & ORIENTED_MASK) == 0
	}

	// ===== Turning =====

	/// Apply a raw transformation and return the resulting state
	pub fn apply_transformation(&self, t: &CornerList) -> State {
		let mut out = State {
			p2: 0,
			p1: 0,
			p0: 0,
			o: 0,
		};

		for (i, &(src, twist)) in t.iter().enumerate() {
			out.p2 |= ((self.p2 >> src) & 1) << i;
			out.p1 |= ((self.p1 >> src) & 1) << i;
			out.p0 |= ((self.p0 >> src) & 1) << i;

			let code = (self.o >> (2 * src)) & 0b11;
			out.o |= TWIST_CODE[twist as usize][code as usize] << (2 * i);
		}

		out
	}

	/// The state after the given turn
	pub fn apply_turn(&self, turn: Turn) -> State {
		self.apply_transformation(transform(turn))
	}

	/// The state after applying all turns in order
	pub fn apply_turns<I>(&self, turns: I) -> State
	where
		I: IntoIterator<Item = Turn>,
	{
		turns.into_iter().fold(*self, |s, turn| s.apply_turn(turn))
	}

	/// The state after applying a sequence in move notation, e.g. "R U' x2"
	pub fn apply_sequence(&self, sequence: &str) -> Result<State, CubeError> {
		let turns = parse_turns(sequence)?;
		log::trace!("Applying {} turns from \"{}\"", turns.len(), sequence);
		Ok(self.apply_turns(turns))
	}
}

/// Apply a sequence in move notation to the start state (solved if None)
pub fn generate_state(sequence: &str, start: Option<State>) -> Result<State, CubeError> {
	start.unwrap_or_default().apply_sequence(sequence)
}

impl TryFrom<CornerConfig> for State {
	type Error = CubeError;

	fn try_from(value: CornerConfig) -> Result<Self, Self::Error> {
		State::from_arrays(&value.p, &value.o)
	}
}

impl From<State> for CornerConfig {
	fn from(val: State) -> Self {
		val.config()
	}
}

impl std::fmt::Display for State {
	/// e.g. "[0,1,2,3,4,5,6,7] [0,0,0,0,0,0,0,0]"
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let join = |v: Vec<String>| v.join(",");
		let p = join(self.permutation().iter().map(|c| c.to_string()).collect());
		let o = join(self.orientation().iter().map(|o| o.to_string()).collect());
		write!(f, "[{}] [{}]", p, o)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	/// A scrambled state to turn around with
	fn scrambled() -> State {
		SOLVED
			.apply_sequence("R U F' D2 L B' x R2 y' F U' z2 L' D")
			.unwrap()
	}

	#[test]
	fn solved_constants() {
		assert_eq!(PLANE2_SOLVED, 0b1111_0000);
		assert_eq!(PLANE1_SOLVED, 0b1100_1100);
		assert_eq!(PLANE0_SOLVED, 0b1010_1010);

		assert_eq!(SOLVED.permutation(), [0, 1, 2, 3, 4, 5, 6, 7]);
		assert_eq!(SOLVED.orientation(), [0; NUM_CORNERS]);
		assert!(SOLVED.is_solved());
		assert!(SOLVED.is_normalized());
		assert!(SOLVED.is_oriented());
		assert_eq!(State::default(), SOLVED);
		assert_eq!(SOLVED.to_string(), "[0,1,2,3,4,5,6,7] [0,0,0,0,0,0,0,0]");
	}

	#[test]
	/// The layout example from the top of this file
	fn layout_example() {
		let p = [1, 5, 0, 6, 2, 4, 7, 3];
		let o = [2, 1, 1, 0, 2, 2, 0, 1];

		let from_arrays = State::from_arrays(&p, &o).unwrap();
		let from_planes =
			State::from_planes(0b01101010, 0b11011000, 0b11000011, 0b01_00_11_11_00_01_01_11)
				.unwrap();

		assert_eq!(from_arrays, from_planes);
		assert_eq!(from_arrays.planes(), (0b01101010, 0b11011000, 0b11000011));
		assert_eq!(from_arrays.orientation_bits(), 0b01_00_11_11_00_01_01_11);
		assert_eq!(from_arrays.to_string(), "[1,5,0,6,2,4,7,3] [2,1,1,0,2,2,0,1]");
		assert_eq!(from_arrays.config(), CornerConfig { p, o });
		assert!(!from_arrays.is_normalized());
		assert!(!from_arrays.is_oriented());
	}

	#[test]
	fn invalid_states() {
		let o = [0; NUM_CORNERS];
		assert_eq!(
			State::from_arrays(&[0, 1, 2, 3, 4, 5, 6, 6], &o),
			Err(CubeError::InvalidState(StateDefect::DuplicateCubie(6)))
		);
		assert_eq!(
			State::from_arrays(&[0, 1, 2, 3, 4, 5, 6, 8], &o),
			Err(CubeError::InvalidState(StateDefect::CubieOutOfRange { position: 7, cubie: 8 }))
		);
		assert_eq!(
			State::from_arrays(&[0, 1, 2, 3, 4, 5, 6, 7], &[0, 0, 3, 0, 0, 0, 0, 0]),
			Err(CubeError::InvalidState(StateDefect::OrientationOutOfRange { position: 2, ori: 3 }))
		);

		// Every plane all ones: cubie 7 everywhere
		assert_eq!(
			State::from_planes(0xff, 0xff, 0xff, 0),
			Err(CubeError::InvalidState(StateDefect::DuplicateCubie(7)))
		);
		assert_eq!(
			State::from_planes(PLANE2_SOLVED, PLANE1_SOLVED, PLANE0_SOLVED, 0b10 << 6),
			Err(CubeError::InvalidState(StateDefect::UnusedOrientationCode(3)))
		);
		assert_eq!(
			State::from_planes(PLANE2_SOLVED, PLANE1_SOLVED, PLANE0_SOLVED, 0),
			Ok(SOLVED)
		);
	}

	#[test]
	/// Turning doesn't change the input and R keeps the reference slot
	fn right_turn() {
		let turned = SOLVED.apply_turn(Turn::from_str("R1").unwrap());

		assert_eq!(turned.permutation(), [4, 1, 0, 3, 6, 5, 2, 7]);
		assert_eq!(turned.orientation(), [2, 0, 1, 0, 1, 0, 2, 0]);
		assert!(turned.is_normalized());
		assert!(!turned.is_solved());
		assert!(SOLVED.is_solved());
	}

	#[test]
	/// Check that all quarter turns result to neutral after 4 turns, half turns after 2
	fn turn_orders() {
		let start = scrambled();

		for turn in Turn::all() {
			let order = match turn.wise {
				TurnWise::Double => 2,
				_ => 4,
			};

			let mut cube = start;
			for i in 1..=order {
				cube = cube.apply_turn(turn);
				if i < order {
					assert_ne!(cube, start, "Turn {} is neutral after {} turns", turn, i);
				}
			}

			if cube != start {
				panic!(
					"Turn {} doesn't result to neutral element after {} turns.",
					turn, order
				);
			}
		}
	}

	#[test]
	fn inverse_turns() {
		for start in [SOLVED, scrambled()] {
			for turn in Turn::all() {
				let back = start.apply_turn(turn).apply_turn(turn.inverse());
				assert_eq!(back, start, "Turn {}", turn);
			}
		}
	}

	#[test]
	/// No single turn leaves the solved cube solved
	fn single_turns_unsolve() {
		for turn in Turn::all() {
			assert!(!SOLVED.apply_turn(turn).is_solved(), "Turn {}", turn);
		}
	}

	#[test]
	fn sequences() {
		let x = Turn::from_str("x1").unwrap();
		let y = Turn::from_str("y1").unwrap();
		let by_hand = SOLVED.apply_turn(x).apply_turn(y);

		assert_eq!(generate_state("x y", None).unwrap(), by_hand);
		assert_eq!(SOLVED.apply_turns(parse_turn_list(&["x1", "y1"]).unwrap()), by_hand);
		assert_eq!(generate_state("U U U U", None).unwrap(), SOLVED);
		assert_eq!(generate_state("U2 D2 F2 B2 R2 L2 F2 B2 R2 L2 U2 D2", None).unwrap(), SOLVED);

		// Continue from a given start
		let start = generate_state("R U", None).unwrap();
		assert_eq!(
			generate_state("U' R'", Some(start)).unwrap(),
			SOLVED
		);

		assert_eq!(
			generate_state("R U Q", None),
			Err(CubeError::InvalidMove("Q".into()))
		);
	}

	#[test]
	/// Undoing a random scramble solves the cube again and the codes stay valid on the way
	fn random_scrambles() {
		for _ in 0..50 {
			let turns = random_sequence(30);
			let mut cube = SOLVED;

			for turn in turns.iter() {
				cube = cube.apply_turn(*turn);

				let (p2, p1, p0) = cube.planes();
				assert!(State::from_planes(p2, p1, p0, cube.orientation_bits()).is_ok());
				let twist: usize = cube.orientation().iter().map(|o| *o as usize).sum();
				assert_eq!(twist % 3, 0);
			}

			assert!(cube.apply_turns(inverse_sequence(&turns)).is_solved());
		}
	}

	#[test]
	fn config_conversion() {
		let cube = scrambled();
		let config: CornerConfig = cube.into();
		assert_eq!(State::try_from(config), Ok(cube));
	}

	#[test]
	/// The {p, o} object as it is exchanged in JSON
	fn config_json() {
		let cube = SOLVED.apply_turn(Turn::from_str("R1").unwrap());
		let json = serde_json::to_string(&cube.config()).unwrap();
		assert_eq!(json, r#"{"p":[4,1,0,3,6,5,2,7],"o":[2,0,1,0,1,0,2,0]}"#);

		let config: CornerConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(State::try_from(config), Ok(cube));

		// Well formed, but cubie 6 twice
		let config: CornerConfig =
			serde_json::from_str(r#"{"p":[0,1,2,3,4,5,6,6],"o":[0,0,0,0,0,0,0,0]}"#).unwrap();
		assert_eq!(
			State::try_from(config),
			Err(CubeError::InvalidState(StateDefect::DuplicateCubie(6)))
		);

		// Not eight corners
		assert!(serde_json::from_str::<CornerConfig>(r#"{"p":[0,1,2],"o":[0,0,0]}"#).is_err());
	}

	#[test]
	/// Every orientation read back encodes to the field it was read from
	fn orientation_decoding() {
		for _ in 0..50 {
			let cube = SOLVED.apply_turns(random_sequence(20));
			for pos in 0..NUM_CORNERS {
				let code = (cube.orientation_bits() >> (2 * pos)) & 0b11;
				assert_ne!(code, ORI_CODE_UNUSED);
				assert_eq!(ORI_CODES[cube.orientation_at(pos) as usize], code);
			}
		}
	}
}
