//! Sprite sheets, the tiles cut from them, and everything that draws tiles.

pub mod animated;
pub mod atlas;
pub mod repository;
pub mod sheet;
pub mod surface;
