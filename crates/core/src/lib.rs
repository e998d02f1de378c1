//! Core types for the team-asset registry.
//!
//! This crate holds the domain model, the storage traits, and the storage
//! error types. It has no AWS or network dependencies so backends and
//! consumers can depend on it without pulling in an SDK.

pub mod assets;
pub mod storage;
