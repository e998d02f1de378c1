use std::env;

use crate::secrets::VaultConfig;

/// Store connection configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Table holding the team-asset collection (default: "sgune")
    pub table_name: String,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub vault: VaultConfig,
    /// Secret path under the KV mount (default: "sre/datastore/registry-demo")
    pub secret_path: String,
    /// Secret field holding the credential blob (default: "config")
    pub secret_field: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "sgune")
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `AWS_ENDPOINT_URL` - Local DynamoDB endpoint (default: unset)
    /// - `VAULT_ADDR` - Vault address (default: "http://127.0.0.1:8200")
    /// - `VAULT_TOKEN` - Vault token (default: empty)
    /// - `VAULT_MOUNT` - KV v2 mount path (default: "secret")
    /// - `VAULT_SECRET_PATH` - Secret path (default: "sre/datastore/registry-demo")
    /// - `VAULT_SECRET_FIELD` - Secret field (default: "config")
    pub fn from_env() -> Self {
        Self {
            store: StoreConfig {
                table_name: env::var("DYNAMODB_TABLE_NAME")
                    .unwrap_or_else(|_| "sgune".to_string()),
                region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            },
            vault: VaultConfig::new(
                env::var("VAULT_ADDR").unwrap_or_else(|_| "http://127.0.0.1:8200".to_string()),
                env::var("VAULT_TOKEN").unwrap_or_default(),
            )
            .with_mount_path(env::var("VAULT_MOUNT").unwrap_or_else(|_| "secret".to_string())),
            secret_path: env::var("VAULT_SECRET_PATH")
                .unwrap_or_else(|_| "sre/datastore/registry-demo".to_string()),
            secret_field: env::var("VAULT_SECRET_FIELD").unwrap_or_else(|_| "config".to_string()),
        }
    }
}

impl StoreConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("DYNAMODB_TABLE_NAME");
        env::remove_var("AWS_REGION");
        env::remove_var("AWS_ENDPOINT_URL");
        env::remove_var("VAULT_ADDR");
        env::remove_var("VAULT_TOKEN");
        env::remove_var("VAULT_MOUNT");
        env::remove_var("VAULT_SECRET_PATH");
        env::remove_var("VAULT_SECRET_FIELD");

        let config = Config::from_env();

        assert_eq!(config.store.table_name, "sgune");
        assert_eq!(config.store.region, "us-east-1");
        assert!(config.store.endpoint_url.is_none());
        assert_eq!(config.vault.address, "http://127.0.0.1:8200");
        assert_eq!(config.vault.mount_path, "secret");
        assert_eq!(config.secret_path, "sre/datastore/registry-demo");
        assert_eq!(config.secret_field, "config");
    }

    #[test]
    fn test_target_display() {
        let local = StoreConfig {
            table_name: "sgune".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: Some("http://localhost:8000".to_string()),
        };
        assert_eq!(
            local.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );

        let remote = StoreConfig {
            endpoint_url: None,
            ..local
        };
        assert_eq!(remote.target_display(), "AWS DynamoDB (region: us-east-1)");
    }
}
