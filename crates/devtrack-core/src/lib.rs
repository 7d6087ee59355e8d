//! Service plumbing shared by devtrack binaries: config loading, request ids,
//! tracing setup and serde helpers.

pub mod config;
pub mod middleware;
pub mod serde;
pub mod tracing;
