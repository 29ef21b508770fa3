//! Integration test crate for AnimEdit.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the animedit crates to verify they work together.

#[cfg(test)]
mod timeline;

#[cfg(test)]
mod selection;
