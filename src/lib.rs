//! Tile-grid maze engine: sprite-sheet slicing, maze collision geometry and a
//! small arcade game loop.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Excluded from coverage.
#[cfg(feature = "sdl")]
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod app;
pub mod asset;
pub mod collision;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod game;
pub mod input;
pub mod map;
pub mod texture;
pub mod timing;
pub mod world;
