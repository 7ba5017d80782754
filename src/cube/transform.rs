use const_for::const_for;

use super::{turn::*, Ori, NUM_CORNERS, NUM_ORIENTATIONS};

/// t[i] = (src, twist): the cubie at position src moves to position i
/// and its orientation is advanced by twist.
pub type CornerList = [(usize, Ori); NUM_CORNERS];

/*
 * n[i] = s[ t[i] ] holds true for the permutation,
 * the twist is applied on the way.
 *
 * Positions 0..3 are the up layer, 4..7 the down layer.
 * Only the clockwise quarter turns are written out, everything
 * else is chained together at compile time.
 */

#[rustfmt::skip]
const TC_BASE: CornerList = [
	(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0),
];
#[rustfmt::skip]
const TC_UP: CornerList = [
	(2, 0), (0, 0), (3, 0), (1, 0), (4, 0), (5, 0), (6, 0), (7, 0),
];
#[rustfmt::skip]
const TC_DOWN: CornerList = [
	(0, 0), (1, 0), (2, 0), (3, 0), (5, 0), (7, 0), (4, 0), (6, 0),
];
#[rustfmt::skip]
const TC_FRONT: CornerList = [
	(1, 1), (5, 2), (2, 0), (3, 0), (0, 2), (4, 1), (6, 0), (7, 0),
];
#[rustfmt::skip]
const TC_BACK: CornerList = [
	(0, 0), (1, 0), (6, 2), (2, 1), (4, 0), (5, 0), (7, 1), (3, 2),
];
#[rustfmt::skip]
const TC_RIGHT: CornerList = [
	(4, 2), (1, 0), (0, 1), (3, 0), (6, 1), (5, 0), (2, 2), (7, 0),
];
#[rustfmt::skip]
const TC_LEFT: CornerList = [
	(0, 0), (3, 1), (2, 0), (7, 2), (4, 0), (1, 2), (6, 0), (5, 1),
];

// ===== Whole cube rotations =====
// x = R L', y = U D', z = F B'

#[rustfmt::skip]
const TC_X: CornerList = [
	(4, 2), (5, 1), (0, 1), (1, 2), (6, 1), (7, 2), (2, 2), (3, 1),
];
#[rustfmt::skip]
const TC_Y: CornerList = [
	(2, 0), (0, 0), (3, 0), (1, 0), (6, 0), (4, 0), (7, 0), (5, 0),
];
#[rustfmt::skip]
const TC_Z: CornerList = [
	(1, 1), (5, 2), (3, 2), (7, 1), (0, 2), (4, 1), (2, 1), (6, 2),
];

/// Chain 2 transformations (t1 and t2) to one transformation.
/// It returns a new transformation, in which first t1 is applied, then t2.
pub const fn chain_corners(t1: CornerList, t2: CornerList) -> CornerList {
	let mut out = TC_BASE;

	const_for!(i in 0..NUM_CORNERS => {
		let (c2, o2) = t2[i];
		let (c1, o1) = t1[c2];
		out[i] = (c1, (o1 + o2) % NUM_ORIENTATIONS as Ori);
	});

	out
}

const fn generate_transform_table() -> [[CornerList; NUM_TURNWISES]; NUM_TURNSIDES] {
	// Same order as TurnSide
	const BASE: [CornerList; NUM_TURNSIDES] = [
		TC_UP, TC_DOWN, TC_FRONT, TC_BACK, TC_RIGHT, TC_LEFT, TC_X, TC_Y, TC_Z,
	];

	let mut out = [[TC_BASE; NUM_TURNWISES]; NUM_TURNSIDES];

	const_for!(i in 0..NUM_TURNSIDES => {
		out[i][0] = BASE[i];
		out[i][1] = chain_corners(out[i][0], out[i][0]);
		out[i][2] = chain_corners(out[i][0], out[i][1]);
	});

	out
}

/// TRANSFORM[side][wise] is the transformation of that turn
pub static TRANSFORM: [[CornerList; NUM_TURNWISES]; NUM_TURNSIDES] = generate_transform_table();

/// The transformation of a single turn
pub fn transform(turn: Turn) -> &'static CornerList {
	&TRANSFORM[turn.side as usize][turn.wise as usize]
}

/// TWIST_CODE[twist][code] is the orientation code after twisting a corner with the given code.
/// Twist 1 cycles 00 -> 01 -> 11 -> 00, twist 2 cycles 00 -> 11 -> 01 -> 00.
/// The unused code 10 maps to itself.
#[rustfmt::skip]
pub const TWIST_CODE: [[u16; 4]; NUM_ORIENTATIONS] = [
	[0b00, 0b01, 0b10, 0b11],
	[0b01, 0b11, 0b10, 0b00],
	[0b11, 0b00, 0b10, 0b01],
];
