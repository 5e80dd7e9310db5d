//! Doors, prizes, and the rules of a single Monty Hall game.
//!
//! ## Core Types
//!
//! - [`Door`]: One of the three doors, numbered 1 through 3
//! - [`Prize`]: What stands behind a door: a goat or the car
//! - [`Game`]: A fixed assignment of prizes to doors, exactly one car
//! - [`Reveal`]: The contestant's pick plus the goat door the host opened
//! - [`Strategy`]: Stay with the pick or switch to the last closed door
//! - [`Outcome`]: Whether the final door hides the car
mod door;
mod game;
mod outcome;
mod prize;
mod reveal;
mod strategy;

pub use door::*;
pub use game::*;
pub use outcome::*;
pub use prize::*;
pub use reveal::*;
pub use strategy::*;
