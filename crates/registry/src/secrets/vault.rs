//! HTTP client for Vault's KV v2 secrets engine.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::SecretsError;

/// Vault client configuration.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Vault server address, e.g. `http://127.0.0.1:8200`.
    pub address: String,
    /// Token presented in the `X-Vault-Token` header.
    pub token: String,
    /// KV v2 mount path.
    pub mount_path: String,
}

impl VaultConfig {
    /// Creates a configuration with the default `secret` mount.
    pub fn new(address: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            token: token.into(),
            mount_path: "secret".to_string(),
        }
    }

    /// Sets the KV mount path.
    pub fn with_mount_path(mut self, mount_path: impl Into<String>) -> Self {
        self.mount_path = mount_path.into();
        self
    }
}

#[derive(Deserialize)]
struct VaultResponse {
    data: VaultData,
}

#[derive(Deserialize)]
struct VaultData {
    data: HashMap<String, Value>,
}

/// HTTP client for Vault's KV v2 API.
#[derive(Debug)]
pub struct VaultClient {
    config: VaultConfig,
    http_client: reqwest::Client,
}

impl VaultClient {
    /// Creates a new client for the given Vault server.
    pub fn new(config: VaultConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Reads all string fields of the secret at `path`.
    pub async fn read_secret(&self, path: &str) -> Result<HashMap<String, String>, SecretsError> {
        let url = format!(
            "{}/v1/{}/data/{}",
            self.config.address, self.config.mount_path, path
        );

        let response = self
            .http_client
            .get(&url)
            .header("X-Vault-Token", &self.config.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SecretsError::CredentialUnavailable {
                path: path.to_string(),
                field: "*".to_string(),
                reason: format!("Vault returned status {}", response.status()),
            });
        }

        let vault_response: VaultResponse = response.json().await?;

        Ok(vault_response
            .data
            .data
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect())
    }

    /// Reads a single string field of the secret at `path`.
    pub async fn get_secret_field(&self, path: &str, field: &str) -> Result<String, SecretsError> {
        let mut secret = self.read_secret(path).await?;
        secret
            .remove(field)
            .ok_or_else(|| SecretsError::CredentialUnavailable {
                path: path.to_string(),
                field: field.to_string(),
                reason: "field not present in secret".to_string(),
            })
    }
}
