//! Storage backends for the team-asset collection.

pub mod dynamodb;
pub mod inmemory;
