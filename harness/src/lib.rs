//! Wayfind Harness: concrete worlds and an auditable runner for the engine.
//!
//! The harness runs a world through `wayfind_search` and records the result
//! as a [`runner::RunRecord`] with a canonical JSON form and a content hash.
//! Solved plans are verified by replay before they are recorded.
//!
//! The harness does NOT implement search. Worlds provide state spaces only;
//! the runner owns verification and hashing.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod brute;
pub mod contract;
pub mod digest;
pub mod runner;
pub mod worlds;
