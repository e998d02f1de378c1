//! Secrets-manager access.
//!
//! The registry talks to the datastore with credentials it never holds in
//! configuration: a single Vault field contains a JSON credential blob that
//! is fetched once at startup. Any failure here fails the whole run.

mod vault;

pub use vault::{VaultClient, VaultConfig};

use serde::Deserialize;
use thiserror::Error;

/// Errors from the credential layer.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// The secrets lookup itself failed: the path or field is missing, or
    /// Vault rejected the request.
    #[error("unable to load secret {path}/{field}: {reason}")]
    CredentialUnavailable {
        path: String,
        field: String,
        reason: String,
    },
    #[error("Vault request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid credential payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Datastore credentials carried in the Vault secret's JSON blob.
#[derive(Debug, Clone, Deserialize)]
pub struct DatastoreCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
}

impl DatastoreCredentials {
    /// Parses the credential blob fetched from the secrets manager.
    pub fn from_json(blob: &str) -> Result<Self, SecretsError> {
        Ok(serde_json::from_str(blob)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_from_json() {
        let blob = r#"{
            "access_key_id": "AKIAEXAMPLE",
            "secret_access_key": "shhh",
            "session_token": "token"
        }"#;

        let creds = DatastoreCredentials::from_json(blob).unwrap();
        assert_eq!(creds.access_key_id, "AKIAEXAMPLE");
        assert_eq!(creds.secret_access_key, "shhh");
        assert_eq!(creds.session_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_session_token_is_optional() {
        let blob = r#"{"access_key_id": "AKIAEXAMPLE", "secret_access_key": "shhh"}"#;
        let creds = DatastoreCredentials::from_json(blob).unwrap();
        assert!(creds.session_token.is_none());
    }

    #[test]
    fn test_malformed_blob_is_invalid_payload() {
        let err = DatastoreCredentials::from_json("not json").unwrap_err();
        assert!(matches!(err, SecretsError::InvalidPayload(_)));
    }

    #[test]
    fn test_credential_unavailable_display() {
        let err = SecretsError::CredentialUnavailable {
            path: "sre/datastore/registry-demo".to_string(),
            field: "config".to_string(),
            reason: "field not present".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to load secret sre/datastore/registry-demo/config: field not present"
        );
    }
}
