//! Rotating the whole cube so the reference cubie sits solved in its own slot.
//!
//! Only whole-cube rotations are used: they change which corner sits in the
//! reference slot without changing how the cubies relate to each other.

use log::{debug, trace};
use strum::IntoEnumIterator;

use crate::cube::{state::State, turn::*, CubeError, REFERENCE_CUBIE};

/// The longest rotation sequence the search tries
pub const MAX_NORMALIZATION_DEPTH: usize = 2;

/// The 9 whole-cube rotations, ordered x1 x2 x3 y1 y2 y3 z1 z2 z3
pub fn rotations() -> impl Iterator<Item = Turn> {
	TurnSide::iter()
		.filter(|side| side.is_rotation())
		.flat_map(|side| TurnWise::iter().map(move |wise| Turn { side, wise }))
}

/// Find the shortest rotation sequence which normalizes the given state.
///
/// Returns an empty sequence for an already normalized state. Pairs of
/// rotations around the same axis are skipped, they equal a single rotation.
pub fn find_normalization_turns(state: &State) -> Result<Vec<Turn>, CubeError> {
	if state.is_normalized() {
		trace!("{} is already normalized", state);
		return Ok(vec![]);
	}

	// one rotation
	for turn in rotations() {
		if state.apply_turn(turn).is_normalized() {
			debug!("Normalized {} with {}", state, turn);
			return Ok(vec![turn]);
		}
	}

	// two rotations
	for first in rotations() {
		let s1 = state.apply_turn(first);
		for second in rotations() {
			if first.side == second.side {
				continue; // same axis of rotation
			}
			if s1.apply_turn(second).is_normalized() {
				debug!("Normalized {} with {} {}", state, first, second);
				return Ok(vec![first, second]);
			}
		}
	}

	debug!(
		"No rotation of at most {} turns brings cubie {} of {} home",
		MAX_NORMALIZATION_DEPTH, REFERENCE_CUBIE, state
	);
	Err(CubeError::NormalizationFailed)
}

impl State {
	/// Rotate the cube so the reference cubie is in its right place and orientation.
	/// Returns the rotations applied. On error the state is left as it was.
	pub fn normalize(&mut self) -> Result<Vec<Turn>, CubeError> {
		let turns = find_normalization_turns(self)?;
		*self = self.apply_turns(turns.iter().copied());
		Ok(turns)
	}

	/// The normalized equivalent of this state
	pub fn normalized(&self) -> Result<State, CubeError> {
		let mut out = *self;
		out.normalize()?;
		Ok(out)
	}
}
