//! Test helpers shared across crates in the platform-shim workspace.
//!
//! - [`env`]: serialised, self-restoring mutation of the process environment.
//! - [`stress`]: runs a closure on one thread per available processor.

pub mod env;
pub mod stress;
