//! Team-asset registry accessor.
//!
//! A thin persistence-access layer over a managed document store: five
//! operations (create-if-absent, point read, key enumeration, owner lookup
//! by DNS record, full-record replace) behind the [`AssetRepository`]
//! trait, plus the Vault credential fetch the demo binary uses at startup.
//!
//! [`AssetRepository`]: registry_core::storage::AssetRepository

pub mod config;
pub mod demo;
pub mod secrets;
pub mod storage;
