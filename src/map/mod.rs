//! This module defines the maze: its tile codes, layout parsing and the grid itself.

pub mod grid;
pub mod parser;
pub mod tile;
