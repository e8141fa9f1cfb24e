//! Interfaceable command-line front end.
//!
//! Loads interfaces and subject definitions from a JSON manifest, replays
//! every definition through an [`ifc_check::TypeSpace`], and reports the
//! subjects that fail to conform.

pub mod commands;
pub mod manifest;
mod tracing_setup;

pub use tracing_setup::init_tracing;
