//! Auth types shared across devtrack services.
//!
//! Authentication happens at the gateway; services only read the identity
//! headers it injects.

pub mod identity;
