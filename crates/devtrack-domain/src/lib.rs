//! Domain types shared across devtrack crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers freely.

pub mod activity;
pub mod device;
pub mod pagination;
pub mod user;
