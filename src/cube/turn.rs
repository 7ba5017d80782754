use std::str::FromStr;

use rand::Rng;
use strum::IntoEnumIterator;

use super::CubeError;

/// Total number of sides (faces and rotation axes)
pub const NUM_TURNSIDES: usize = 6 + 3;
/// Total number of ways to adjust your turn
pub const NUM_TURNWISES: usize = 3;
/// Number of distinct turns
pub const NUM_TURNS: usize = NUM_TURNSIDES * NUM_TURNWISES;

/// The faces you can turn and the axes you can rotate the whole cube around
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[repr(u8)]
pub enum TurnSide {
	Up,
	Down,
	Front,
	Back,
	Right,
	Left,
	X, // Whole cube, follows R
	Y, // Whole cube, follows U
	Z, // Whole cube, follows F
}

impl TurnSide {
	/// Whether this side turns the entire cube rather than one layer.
	pub const fn is_rotation(self) -> bool {
		matches!(self, TurnSide::X | TurnSide::Y | TurnSide::Z)
	}

	/// The notation letter of the side
	pub const fn letter(self) -> char {
		match self {
			TurnSide::Up => 'U',
			TurnSide::Down => 'D',
			TurnSide::Front => 'F',
			TurnSide::Back => 'B',
			TurnSide::Right => 'R',
			TurnSide::Left => 'L',
			TurnSide::X => 'x',
			TurnSide::Y => 'y',
			TurnSide::Z => 'z',
		}
	}

	pub const fn from_letter(c: char) -> Option<Self> {
		let side = match c {
			'U' => TurnSide::Up,
			'D' => TurnSide::Down,
			'F' => TurnSide::Front,
			'B' => TurnSide::Back,
			'R' => TurnSide::Right,
			'L' => TurnSide::Left,
			'x' => TurnSide::X,
			'y' => TurnSide::Y,
			'z' => TurnSide::Z,
			_ => return None,
		};
		Some(side)
	}
}

/// You can either turn a side in (Counter-)Clockwise and Half turns
/// This is the enum for that
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::EnumCount)]
#[repr(u8)]
pub enum TurnWise {
	Clockwise,
	Double,
	CounterClockwise,
}

impl TurnWise {
	/// Number of clockwise quarter turns (1, 2 or 3)
	pub const fn magnitude(self) -> u8 {
		self as u8 + 1
	}
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
			TurnWise::Double => write!(f, "2"),
		}
	}
}

/// An entire turn
///
/// side: The face (or rotation axis) to turn
/// wise: See the definiton of TurnWise
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub side: TurnSide,
	pub wise: TurnWise,
}

impl Turn {
	pub const fn new(side: TurnSide, wise: TurnWise) -> Self {
		Self { side, wise }
	}

	/// Turn itself to the turn, which negates itself.
	pub fn invert(&mut self) {
		*self = self.inverse();
	}

	/// The turn undoing this one
	pub const fn inverse(self) -> Self {
		let wise = match self.wise {
			TurnWise::Clockwise => TurnWise::CounterClockwise,
			TurnWise::CounterClockwise => TurnWise::Clockwise,
			TurnWise::Double => TurnWise::Double,
		};
		Self { side: self.side, wise }
	}

	/// The canonical code, e.g. "R1", "x2", "U3"
	pub fn code(&self) -> String {
		format!("{}{}", self.side.letter(), self.wise.magnitude())
	}

	/// Iterate over every turn, ordered by side and then by wise.
	pub fn all() -> impl Iterator<Item = Turn> {
		TurnSide::iter().flat_map(|side| TurnWise::iter().map(move |wise| Turn { side, wise }))
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}{}", self.side.letter(), self.wise)
	}
}

impl FromStr for Turn {
	type Err = CubeError;

	/// Accepts compact notation ("R", "R2", "R'") and canonical codes ("R1", "R3").
	fn from_str(item: &str) -> Result<Self, Self::Err> {
		let invalid = || CubeError::InvalidMove(item.to_owned());
		let mut chars = item.chars();

		let side = chars
			.next()
			.and_then(TurnSide::from_letter)
			.ok_or_else(invalid)?;

		let wise = match (chars.next(), chars.next()) {
			(None, _) | (Some('1'), None) => TurnWise::Clockwise,
			(Some('2'), None) => TurnWise::Double,
			(Some('\'' | '3'), None) => TurnWise::CounterClockwise,
			_ => return Err(invalid()),
		};

		Ok(Self { side, wise })
	}
}

/// Parse a whitespace separated sequence of turns
pub fn parse_turns<T>(string: T) -> Result<Vec<Turn>, CubeError>
where
	T: AsRef<str>,
{
	string.as_ref().split_whitespace().map(Turn::from_str).collect()
}

/// Parse an already tokenized sequence of turns
pub fn parse_turn_list<S>(tokens: &[S]) -> Result<Vec<Turn>, CubeError>
where
	S: AsRef<str>,
{
	tokens.iter().map(|t| Turn::from_str(t.as_ref())).collect()
}

/// The sequence undoing the given one: reversed, every turn inverted
pub fn inverse_sequence(turns: &[Turn]) -> Vec<Turn> {
	let mut out = turns.to_vec();
	out.reverse();
	for turn in out.iter_mut() {
		turn.invert();
	}
	out
}

/// Generate a random sequence of face turns.
/// Two consecutive turns never turn the same face.
pub fn random_sequence(length: usize) -> Vec<Turn> {
	let faces: Vec<TurnSide> = TurnSide::iter().filter(|s| !s.is_rotation()).collect();
	let wises: Vec<TurnWise> = TurnWise::iter().collect();

	let mut rng = rand::thread_rng();
	let mut out: Vec<Turn> = Vec::with_capacity(length);

	while out.len() < length {
		let side = faces[rng.gen_range(0..faces.len())];
		if out.last().is_some_and(|t| t.side == side) {
			continue;
		}
		let wise = wises[rng.gen_range(0..wises.len())];
		out.push(Turn { side, wise });
	}

	out
}
