//! 基本型
//!
//! 手番（`Player`）、指し手（`Move`）、評価値（`Score`）を定義する。

mod moves;
mod player;
mod score;

pub use moves::{Move, MoveList};
pub use player::Player;
pub use score::Score;
