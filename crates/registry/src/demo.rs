//! The linear demo flow.
//!
//! Seeds the collection with the two fixed records, reads them back, lists
//! keys, looks up record owners, then replaces one record and re-reads it.
//! The flow is generic over [`AssetRepository`] so it runs against the
//! in-memory backend in tests without a process exit.

use anyhow::Result;
use registry_core::assets::demo_team_assets;
use registry_core::storage::{AssetRepository, RepositoryError};

/// Runs the full create/read/query/update sequence against the repository.
///
/// Every error aborts the run except the deliberate `NotFound`
/// demonstration for the unregistered record `nope`, which is logged and
/// tolerated.
pub async fn run<R: AssetRepository>(repo: &R) -> Result<()> {
    // Populate: skip-if-exists, so re-runs leave existing data untouched.
    for team in demo_team_assets() {
        repo.create_if_absent(&team).await?;
        tracing::debug!(team = %team.team_name, "ensured record exists");
    }

    // Read both records back.
    let karnivool = repo.get_team("karnivool").await?;
    let mars_volta = repo.get_team("marsVolta").await?;
    tracing::info!(?karnivool, ?mars_volta, "all assets");

    // Enumerate every owner in the collection.
    let owners = repo.list_team_names().await?;
    tracing::info!(?owners, "all owners");

    // Owner lookup by record value.
    for record in ["sound.awake", "themata"] {
        let owner = repo.find_record_owner(record).await?;
        tracing::info!(record, owner, "record owner");
    }

    // The one tolerated failure: an unregistered record demonstrates the
    // NotFound path without halting the run.
    match repo.find_record_owner("nope").await {
        Ok(owner) => tracing::info!(record = "nope", owner, "record owner"),
        Err(RepositoryError::NotFound { .. }) => {
            tracing::warn!(record = "nope", "no team owns this record");
        }
        Err(err) => return Err(err.into()),
    }

    // Full-record replace. Guarding the push keeps re-runs stable.
    let mut updated = karnivool;
    if !updated.owns_record("t2r3") {
        updated.dns_records.push("t2r3".to_string());
    }
    repo.replace_team("karnivool", &updated).await?;

    let after = repo.get_team("karnivool").await?;
    tracing::info!(assets = ?after, "updated karnivool assets");

    Ok(())
}
