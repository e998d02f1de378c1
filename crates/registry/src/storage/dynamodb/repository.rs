//! DynamoDB repository implementation.
//!
//! Implements [`AssetRepository`] from `registry_core::storage` using
//! DynamoDB. Atomicity for the two write paths comes from condition
//! expressions, which DynamoDB evaluates atomically with the write: the
//! store-side equivalent of a transactional read-then-put.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use registry_core::assets::TeamAssets;
use registry_core::storage::{AssetRepository, RepositoryError, Result};

use crate::config::StoreConfig;
use crate::secrets::DatastoreCredentials;

use super::conversions::{item_to_team, team_to_item, ENTITY_TYPE_TEAM};
use super::error::{map_get_item_error, map_put_item_error, map_scan_error};
use super::keys;

const ENTITY_TYPE: &str = "TeamAssets";

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository connected per the given store configuration.
    ///
    /// When `credentials` is `Some`, the secrets-manager credentials are
    /// installed as a static provider; otherwise the SDK default credential
    /// chain applies (local development with `AWS_PROFILE` or a local
    /// endpoint).
    pub async fn connect(
        config: &StoreConfig,
        credentials: Option<DatastoreCredentials>,
    ) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        if let Some(creds) = credentials {
            loader = loader.credentials_provider(aws_sdk_dynamodb::config::Credentials::new(
                creds.access_key_id,
                creds.secret_access_key,
                creds.session_token,
                None,
                "secrets-manager",
            ));
        }

        let sdk_config = loader.load().await;
        Ok(Self::new(Client::new(&sdk_config), &config.table_name))
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl AssetRepository for DynamoDbRepository {
    async fn create_if_absent(&self, assets: &TeamAssets) -> Result<()> {
        if !assets.is_valid() {
            return Err(RepositoryError::InvalidData(
                "team name must be non-empty".to_string(),
            ));
        }

        let item = team_to_item(assets);

        match self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => match err.into_service_error() {
                // Record already exists: first-write-wins, the call is a no-op.
                PutItemError::ConditionalCheckFailedException(_) => Ok(()),
                err => Err(map_put_item_error(err)),
            },
        }
    }

    async fn get_team(&self, team_name: &str) -> Result<TeamAssets> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::team_pk(team_name)))
            .key("SK", AttributeValue::S(keys::team_sk(team_name)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => item_to_team(&item),
            None => Err(RepositoryError::NotFound {
                entity_type: ENTITY_TYPE,
                id: team_name.to_string(),
            }),
        }
    }

    async fn list_team_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut start_key = None;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .projection_expression("PK")
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items() {
                if let Some(name) = item
                    .get("PK")
                    .and_then(|v| v.as_s().ok())
                    .and_then(|pk| keys::team_name_from_pk(pk))
                {
                    names.push(name.to_string());
                }
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(names)
    }

    async fn find_record_owner(&self, record: &str) -> Result<String> {
        let mut matches: Vec<TeamAssets> = Vec::new();
        let mut start_key = None;

        // Drain the full result set before deciding; a match on a later
        // page must still trip the ambiguity check.
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("entityType = :entity AND contains(dnsRecords, :record)")
                .expression_attribute_values(
                    ":entity",
                    AttributeValue::S(ENTITY_TYPE_TEAM.to_string()),
                )
                .expression_attribute_values(":record", AttributeValue::S(record.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items() {
                matches.push(item_to_team(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        if matches.len() > 1 {
            return Err(RepositoryError::AmbiguousOwner {
                record: record.to_string(),
            });
        }

        match matches.into_iter().next() {
            Some(team) => Ok(team.team_name),
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

        let item = team_to_item(assets);

        match self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => match err.into_service_error() {
                // No existing record: updates never create.
                PutItemError::ConditionalCheckFailedException(_) => {
                    Err(RepositoryError::NotFound {
                        entity_type: ENTITY_TYPE,
                        id: team_name.to_string(),
                    })
                }
                err => Err(map_put_item_error(err)),
            },
        }
    }
}
