pub mod ai;
pub mod controller;
pub mod tui;

#[allow(unused_imports)]
pub use ai::{Difficulty, HeuristicAi};
pub use controller::{PlayerAction, PlayerController};
pub use tui::TuiController;
