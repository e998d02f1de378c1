//! DynamoDB storage backend implementation.
//!
//! Provides a DynamoDB-based implementation of [`AssetRepository`] using
//! `aws-sdk-dynamodb`.
//!
//! [`AssetRepository`]: registry_core::storage::AssetRepository

mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
