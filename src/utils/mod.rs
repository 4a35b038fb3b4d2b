//! # Utilities Module
//!
//! Geometry helpers for the demos.

pub mod math;

pub use math::*;
