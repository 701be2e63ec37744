//! Shared test helpers
//!
//! - `assertions` - Tolerance-based comparisons
//! - `fixtures` - Seeded random beliefs and reference scenario values

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
