//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys. All functions
//! are sync and have no side effects.

/// Prefix for team records.
pub const TEAM_PREFIX: &str = "TEAM#";

/// Generate primary key for a team record.
///
/// Pattern: `TEAM#<team_name>`
pub fn team_pk(team_name: &str) -> String {
    format!("{TEAM_PREFIX}{team_name}")
}

/// Generate sort key for a team record.
///
/// Pattern: `TEAM#<team_name>` (same as PK for single-item queries)
pub fn team_sk(team_name: &str) -> String {
    format!("{TEAM_PREFIX}{team_name}")
}

/// Extract the team name from a partition key.
///
/// Returns `None` for keys that do not carry the team prefix, so a
/// keys-only scan can skip foreign items instead of misreading them.
pub fn team_name_from_pk(pk: &str) -> Option<&str> {
    pk.strip_prefix(TEAM_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_pk() {
        assert_eq!(team_pk("karnivool"), "TEAM#karnivool");
    }

    #[test]
    fn test_team_sk_matches_pk() {
        assert_eq!(team_sk("marsVolta"), team_pk("marsVolta"));
    }

    #[test]
    fn test_team_name_from_pk() {
        assert_eq!(team_name_from_pk("TEAM#karnivool"), Some("karnivool"));
        assert_eq!(team_name_from_pk("USER#karnivool"), None);
        assert_eq!(team_name_from_pk("karnivool"), None);
    }

    #[test]
    fn test_round_trip() {
        let pk = team_pk("marsVolta");
        assert_eq!(team_name_from_pk(&pk), Some("marsVolta"));
    }
}
