//! CLI command implementations.

pub mod common;
pub mod draw;
pub mod run;
pub mod statevector;
pub mod version;
