//! Dice and move tokens.
//!
//! - `Die`: one die with a shake animation
//! - `Dice`: the pair, plus the tokens (usable moves) of the current roll

pub mod die;
pub mod tokens;

pub use die::Die;
pub use tokens::{Dice, MoveToken, TokenState};
