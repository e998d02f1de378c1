//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use registry_core::assets::TeamAssets;
use registry_core::storage::{AssetRepository, RepositoryError, Result};

const ENTITY_TYPE: &str = "TeamAssets";

/// In-memory storage backend for testing.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
/// The write lock held across each mutation gives the same atomicity the
/// DynamoDB backend gets from condition expressions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    teams: Arc<RwLock<HashMap<String, TeamAssets>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssetRepository for InMemoryRepository {
    async fn create_if_absent(&self, assets: &TeamAssets) -> Result<()> {
        if !assets.is_valid() {
            return Err(RepositoryError::InvalidData(
                "team name must be non-empty".to_string(),
            ));
        }

        let mut teams = self.teams.write().await;
        // First-write-wins: an existing record is left untouched.
        teams
            .entry(assets.team_name.clone())
            .or_insert_with(|| assets.clone());
        Ok(())
    }

    async fn get_team(&self, team_name: &str) -> Result<TeamAssets> {
        let teams = self.teams.read().await;
        teams
            .get(team_name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: ENTITY_TYPE,
                id: team_name.to_string(),
            })
    }

    async fn list_team_names(&self) -> Result<Vec<String>> {
        let teams = self.teams.read().await;
        Ok(teams.keys().cloned().collect())
    }

    async fn find_record_owner(&self, record: &str) -> Result<String> {
        let teams = self.teams.read().await;
        let matches: Vec<&TeamAssets> = teams
            .values()
            .filter(|team| team.owns_record(record))
            .collect();

        if matches.len() > 1 {
            return Err(RepositoryError::AmbiguousOwner {
                record: record.to_string(),
            });
        }

        match matches.first() {
            Some(team) => Ok(team.team_name.clone()),
            None => Err(RepositoryError::NotFound {
                entity_type: "dns record",
                id: record.to_string(),
            }),
        }
    }

    async fn replace_team(&self, team_name: &str, assets: &TeamAssets) -> Result<()> {
        if !assets.is_valid() {
            return Err(RepositoryError::InvalidData(
                "team name must be non-empty".to_string(),
            ));
        }
        if assets.team_name != team_name {
            return Err(RepositoryError::InvalidData(format!(
                "replacement record is for team {} but the key is {}",
                assets.team_name, team_name
            )));
        }

        let mut teams = self.teams.write().await;
        if !teams.contains_key(team_name) {
            return Err(RepositoryError::NotFound {
                entity_type: ENTITY_TYPE,
                id: team_name.to_string(),
            });
        }
        teams.insert(team_name.to_string(), assets.clone());
        Ok(())
    }
}
