//! ludo-rng: Die sources for the two-dice analyzer
//!
//! Everything that produces die faces lives here. The simulation never touches
//! a global generator; it borrows a [`DieSource`] for the duration of a run.

mod rng;
mod scripted;

pub use rng::SimRng;
pub use scripted::ScriptedDice;

/// Number of faces on a standard die.
pub const DIE_FACES: u8 = 6;

/// Anything that can roll one fair six-sided die.
///
/// Implementations must return a value in `1..=6`.
pub trait DieSource {
    fn roll_die(&mut self) -> u8;
}
