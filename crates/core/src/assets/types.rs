use serde::{Deserialize, Serialize};

/// The records and healthchecks a team has permission to edit.
///
/// `team_name` doubles as the storage key: every record is addressed by
/// its team name and no two records may share one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssets {
    #[serde(rename = "teamname")]
    pub team_name: String,
    #[serde(rename = "dnsRecords")]
    pub dns_records: Vec<String>,
    #[serde(rename = "healthchecks")]
    pub health_checks: Vec<String>,
}

impl TeamAssets {
    /// Creates a record for the given team with no assets.
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            dns_records: Vec::new(),
            health_checks: Vec::new(),
        }
    }

    /// Sets the DNS records for this team.
    pub fn with_dns_records<I, S>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dns_records = records.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the healthchecks for this team.
    pub fn with_health_checks<I, S>(mut self, checks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.health_checks = checks.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if this record can be stored.
    ///
    /// The team name is the primary key, so it must be non-empty. The asset
    /// lists may both be empty.
    pub fn is_valid(&self) -> bool {
        !self.team_name.is_empty()
    }

    /// Returns true if the team owns the given DNS record.
    pub fn owns_record(&self, record: &str) -> bool {
        self.dns_records.iter().any(|r| r == record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_all_fields() {
        let team = TeamAssets::new("karnivool")
            .with_dns_records(["sound.awake", "themata"])
            .with_health_checks(["simple.boy"]);

        assert_eq!(team.team_name, "karnivool");
        assert_eq!(team.dns_records, vec!["sound.awake", "themata"]);
        assert_eq!(team.health_checks, vec!["simple.boy"]);
    }

    #[test]
    fn test_empty_team_name_is_invalid() {
        assert!(!TeamAssets::new("").is_valid());
        assert!(TeamAssets::new("marsVolta").is_valid());
    }

    #[test]
    fn test_owns_record() {
        let team = TeamAssets::new("karnivool").with_dns_records(["sound.awake"]);
        assert!(team.owns_record("sound.awake"));
        assert!(!team.owns_record("themata"));
    }

    #[test]
    fn test_serde_field_names() {
        let team = TeamAssets::new("marsVolta").with_dns_records(["bedlam.in.goliath"]);
        let json = serde_json::to_value(&team).unwrap();

        assert_eq!(json["teamname"], "marsVolta");
        assert_eq!(json["dnsRecords"][0], "bedlam.in.goliath");
        assert!(json["healthchecks"].as_array().unwrap().is_empty());
    }
}
