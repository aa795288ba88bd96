//! # Lane Core
//!
//! Lanes with two cranes on discrete positions, and the rules that keep the
//! cranes from colliding.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Layout
//!
//! - [`domain`]: `Lane` aggregate, `Crane`, `CraneRole`, `LaneId`
//! - [`repository`]: the `LaneRepository` store contract
//! - [`memory`]: in-memory store
//! - [`engine`]: `LaneEngine` (create, query, move)
//! - [`request`] / [`view`]: caller-facing input and output shapes
//! - [`config`]: layered configuration

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod engine;
mod error;
pub mod memory;
pub mod repository;
pub mod request;
pub mod view;

pub use config::Config;
pub use domain::{Crane, CraneRole, Lane, LaneId, MoveOutcome};
pub use engine::LaneEngine;
pub use error::{Error, Result};
pub use memory::InMemoryLaneRepository;
pub use repository::LaneRepository;
pub use request::{CreateLanesRequest, MoveCraneRequest};
pub use view::{CraneView, LaneView};
