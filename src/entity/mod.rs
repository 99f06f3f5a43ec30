//! Moving characters and the shared movement model.

pub mod direction;
pub mod ghost;
pub mod motion;
pub mod player;
