pub mod state;
pub mod transform;
pub mod turn;

/// The number of corner cubies (and corner slots)
pub const NUM_CORNERS: usize = 8;

/// The cubie which fixes the reference frame of the cube.
/// A state is normalized when this cubie sits solved in its own slot.
pub const REFERENCE_CUBIE: usize = 7;

/// A corner orientation value: 0 (solved), 1 (clockwise twist) or 2 (anticlockwise twist)
pub type Ori = u8;

/// Number of distinct orientations of a corner
pub const NUM_ORIENTATIONS: usize = 3;

/// The 2-bit code stored for each orientation value.
///
/// Code 0b10 is never produced, so a corner is oriented iff
/// the low bit of its field is zero.
pub const ORI_CODES: [u16; NUM_ORIENTATIONS] = [0b00, 0b01, 0b11];

/// The unused orientation code
pub const ORI_CODE_UNUSED: u16 = 0b10;

/// Convert a 2-bit orientation code back to its value.
/// Returns None for the unused code.
pub const fn ori_from_code(code: u16) -> Option<Ori> {
	match code & 0b11 {
		0b00 => Some(0),
		0b01 => Some(1),
		0b11 => Some(2),
		_ => None,
	}
}

/// Everything that can be wrong with a raw corner configuration.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateDefect {
	#[error("position {position} holds cubie {cubie}, but there are only {} cubies", NUM_CORNERS)]
	CubieOutOfRange { position: usize, cubie: usize },
	#[error("cubie {0} occurs more than once")]
	DuplicateCubie(usize),
	#[error("position {position} has orientation {ori}, but only 0, 1 and 2 exist")]
	OrientationOutOfRange { position: usize, ori: usize },
	#[error("position {0} uses the unused orientation code 0b10")]
	UnusedOrientationCode(usize),
}

/// The errors the corner engine reports.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
	#[error("Unknown move \"{0}\"")]
	InvalidMove(String),
	#[error("Invalid state: {0}")]
	InvalidState(#[from] StateDefect),
	#[error("No sequence of at most two rotations brings cubie {} home", REFERENCE_CUBIE)]
	NormalizationFailed,
}
