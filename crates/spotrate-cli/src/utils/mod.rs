//! Small CLI helpers.

pub mod input;
