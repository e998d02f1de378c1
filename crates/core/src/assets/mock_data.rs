//! Demo data for seeding and tests.
//!
//! Pure functions with no side effects, shared by the demo flow, unit
//! tests, and database seeding.

use super::types::TeamAssets;

/// The two fixed records the demo seeds into the store.
///
/// # Example
///
/// ```
/// use registry_core::assets::demo_team_assets;
///
/// let teams = demo_team_assets();
/// assert_eq!(teams.len(), 2);
/// assert_eq!(teams[0].team_name, "marsVolta");
/// ```
pub fn demo_team_assets() -> Vec<TeamAssets> {
    vec![
        TeamAssets::new("marsVolta")
            .with_dns_records(["deloused.in.the.comatorium", "bedlam.in.goliath"])
            .with_health_checks(["eriatarka", "wax.simulacra"]),
        TeamAssets::new("karnivool")
            .with_dns_records(["sound.awake", "themata"])
            .with_health_checks(["simple.boy", "shutterspeed"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_teams_are_valid() {
        for team in demo_team_assets() {
            assert!(team.is_valid());
        }
    }

    #[test]
    fn test_demo_records_are_unique_across_teams() {
        let teams = demo_team_assets();
        let mut seen = std::collections::HashSet::new();
        for team in &teams {
            for record in &team.dns_records {
                assert!(seen.insert(record.as_str()), "duplicate record: {record}");
            }
        }
    }
}
