//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{types, core, input, term}` so
//! the binary, the integration tests and the benches share one import path.
//! The command-line configuration of the terminal front end lives in
//! [`config`].

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
