pub mod canvas;
pub mod cell;
pub mod config;
pub mod events;
pub mod grid;
pub mod schedule;
pub mod sim;
pub mod term;
pub mod tiling;
