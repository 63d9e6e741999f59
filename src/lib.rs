pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;

mod logic_tests;
