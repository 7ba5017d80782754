//! The corners of a cube, packed into 40 bits.
//!
//! ```
//! use cornercube::prelude::*;
//!
//! let cube = State::new();
//!
//! let scrambled = cube.apply_sequence("R U R' U' F2").unwrap();
//! assert!(!scrambled.is_solved());
//! assert!(scrambled.apply_sequence("F2 U R U' R'").unwrap().is_solved());
//!
//! // A rotated cube is solved again after normalizing
//! let mut rotated = cube.apply_sequence("x y").unwrap();
//! assert!(!rotated.is_solved());
//! rotated.normalize().unwrap();
//! assert!(rotated.is_solved());
//! ```
//!
//! x, y and z rotate the entire cube and follow R, U and F.

pub mod cube;
pub mod normalize;

pub mod prelude {
	pub use crate::cube::{state::*, transform::CornerList, turn::*, *};
	pub use crate::normalize::{find_normalization_turns, rotations};
}
