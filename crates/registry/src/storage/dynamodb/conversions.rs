//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use registry_core::assets::TeamAssets;
use registry_core::storage::RepositoryError;

use super::keys;

/// Entity type discriminator for team records.
pub const ENTITY_TYPE_TEAM: &str = "TEAM";

/// Convert a TeamAssets record to a DynamoDB item.
pub fn team_to_item(team: &TeamAssets) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::team_pk(&team.team_name)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::team_sk(&team.team_name)),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_TEAM.to_string()),
    );

    // Data
    item.insert(
        "teamName".to_string(),
        AttributeValue::S(team.team_name.clone()),
    );
    item.insert(
        "dnsRecords".to_string(),
        string_list_to_attr(&team.dns_records),
    );
    item.insert(
        "healthChecks".to_string(),
        string_list_to_attr(&team.health_checks),
    );

    item
}

/// Convert a DynamoDB item to a TeamAssets record.
pub fn item_to_team(item: &HashMap<String, AttributeValue>) -> Result<TeamAssets, RepositoryError> {
    Ok(TeamAssets {
        team_name: get_string(item, "teamName")?,
        dns_records: get_string_list(item, "dnsRecords")?,
        health_checks: get_string_list(item, "healthChecks")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Build a list attribute from a string slice.
///
/// Uses an `L` of `S` rather than a string set: sets may not be empty and
/// both asset lists legitimately can be.
fn string_list_to_attr(values: &[String]) -> AttributeValue {
    AttributeValue::L(
        values
            .iter()
            .map(|v| AttributeValue::S(v.clone()))
            .collect(),
    )
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a string-list attribute. A missing attribute reads as an empty list.
fn get_string_list(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Vec<String>, RepositoryError> {
    let Some(attr) = item.get(key) else {
        return Ok(Vec::new());
    };

    let list = attr
        .as_l()
        .map_err(|_| RepositoryError::InvalidData(format!("Field is not a list: {}", key)))?;

    list.iter()
        .map(|v| {
            v.as_s().map(|s| s.to_string()).map_err(|_| {
                RepositoryError::InvalidData(format!("Non-string element in list: {}", key))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_team() -> TeamAssets {
        TeamAssets::new("karnivool")
            .with_dns_records(["sound.awake", "themata"])
            .with_health_checks(["simple.boy", "shutterspeed"])
    }

    #[test]
    fn test_team_to_item_keys() {
        let item = team_to_item(&sample_team());

        assert_eq!(
            item.get("PK").unwrap().as_s().unwrap(),
            "TEAM#karnivool"
        );
        assert_eq!(
            item.get("SK").unwrap().as_s().unwrap(),
            "TEAM#karnivool"
        );
        assert_eq!(item.get("entityType").unwrap().as_s().unwrap(), "TEAM");
    }

    #[test]
    fn test_team_round_trip() {
        let team = sample_team();
        let item = team_to_item(&team);
        let restored = item_to_team(&item).unwrap();

        assert_eq!(restored, team);
    }

    #[test]
    fn test_empty_lists_round_trip() {
        let team = TeamAssets::new("marsVolta");
        let item = team_to_item(&team);
        let restored = item_to_team(&item).unwrap();

        assert!(restored.dns_records.is_empty());
        assert!(restored.health_checks.is_empty());
    }

    #[test]
    fn test_missing_team_name_is_invalid_data() {
        let mut item = team_to_item(&sample_team());
        item.remove("teamName");

        let err = item_to_team(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_missing_list_reads_as_empty() {
        let mut item = team_to_item(&sample_team());
        item.remove("healthChecks");

        let restored = item_to_team(&item).unwrap();
        assert!(restored.health_checks.is_empty());
        assert_eq!(restored.dns_records.len(), 2);
    }

    #[test]
    fn test_non_list_attribute_is_invalid_data() {
        let mut item = team_to_item(&sample_team());
        item.insert(
            "dnsRecords".to_string(),
            AttributeValue::S("sound.awake".to_string()),
        );

        let err = item_to_team(&item).unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }
}
