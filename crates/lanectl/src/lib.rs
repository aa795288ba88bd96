//! lanectl - create crane lanes and move their cranes
//!
//! Wires the lane engine to `SQLite` storage and a `clap` command line.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod database;

pub use database::LaneDb;
