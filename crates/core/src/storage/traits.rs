use async_trait::async_trait;

use crate::assets::TeamAssets;

use super::Result;

/// Repository for team-asset records.
///
/// All five operations are single request/response calls against the
/// backing store. The store's own transaction isolation provides any
/// cross-client concurrency control; implementations hold no shared
/// mutable state of their own and never retry internally.
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Creates the record if no record with its team name exists yet.
    ///
    /// First-write-wins: a pre-existing record is left untouched and the
    /// call succeeds as a no-op, so repeated calls with the same input are
    /// idempotent. The existence check and the write are a single atomic
    /// operation against the store.
    async fn create_if_absent(&self, assets: &TeamAssets) -> Result<()>;

    /// Gets a team's record by its name.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no record is keyed by
    /// that name.
    ///
    /// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
    async fn get_team(&self, team_name: &str) -> Result<TeamAssets>;

    /// Lists every team name currently in the collection.
    ///
    /// Order is store-determined. An empty collection yields an empty vec.
    async fn list_team_names(&self) -> Result<Vec<String>>;

    /// Finds the team that owns the given DNS record.
    ///
    /// Drains the full query result before deciding: zero matches fail
    /// with [`RepositoryError::NotFound`] naming the record, more than one
    /// match fails with [`RepositoryError::AmbiguousOwner`].
    ///
    /// [`RepositoryError::NotFound`]: super::RepositoryError::NotFound
    /// [`RepositoryError::AmbiguousOwner`]: super::RepositoryError::AmbiguousOwner
    async fn find_record_owner(&self, record: &str) -> Result<String>;

    /// Replaces an existing team's record wholesale.
    ///
    /// The record keyed by `team_name` must already exist; updates never
    /// create. The replacement overwrites every field, there is no
    /// field-level merge.
    async fn replace_team(&self, team_name: &str, assets: &TeamAssets) -> Result<()>;
}
