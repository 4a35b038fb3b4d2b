//! # Game Module
//!
//! Per-demo state advanced once per frame. Nothing here touches the window,
//! so all of it runs in plain unit tests.

pub mod ball;
pub mod cube;

pub use ball::*;
pub use cube::*;
