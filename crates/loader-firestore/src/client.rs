//! Firestore REST commit client.

use crate::error::FirestoreLoaderError;
use crate::value::{sanitize_document_id, to_fields};
use reqwest::Client;
use record_core::Record;
use serde_json::{json, Value};
use std::time::Duration;

/// Where the target database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub endpoint: String,
    pub project: String,
    pub access_token: Option<String>,
}

impl FirestoreConfig {
    /// `projects/{p}/databases/(default)`
    pub fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)", self.project)
    }
}

/// Build one `update` write (set semantics: the document is replaced).
pub fn update_write(
    database_path: &str,
    collection: &str,
    document_id: &str,
    record: &Record,
) -> Value {
    json!({
        "update": {
            "name": format!(
                "{database_path}/documents/{collection}/{}",
                sanitize_document_id(document_id)
            ),
            "fields": to_fields(record),
        }
    })
}

pub struct FirestoreClient {
    http: Client,
    commit_url: String,
    database_path: String,
    access_token: Option<String>,
}

impl FirestoreClient {
    pub fn new(config: &FirestoreConfig) -> Result<Self, FirestoreLoaderError> {
        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;
        let database_path = config.database_path();
        Ok(Self {
            http,
            commit_url: format!(
                "{}/v1/{}/documents:commit",
                config.endpoint.trim_end_matches('/'),
                database_path
            ),
            database_path,
            access_token: config.access_token.clone(),
        })
    }

    pub fn database_path(&self) -> &str {
        &self.database_path
    }

    /// Apply `writes` atomically.
    pub async fn commit(&self, writes: Vec<Value>) -> Result<(), FirestoreLoaderError> {
        let mut request = self.http.post(&self.commit_url).json(&json!({ "writes": writes }));
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FirestoreLoaderError::Api {
                status: status.as_u16(),
                url: self.commit_url.clone(),
                body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_url() {
        let client = FirestoreClient::new(&FirestoreConfig {
            endpoint: "http://localhost:8080/".to_string(),
            project: "ycsb".to_string(),
            access_token: None,
        })
        .unwrap();
        assert_eq!(
            client.commit_url,
            "http://localhost:8080/v1/projects/ycsb/databases/(default)/documents:commit"
        );
    }

    #[test]
    fn test_update_write() {
        let record = json!({"entityPathKey": "/mysource/schema", "version": 1})
            .as_object()
            .unwrap()
            .clone();

        let write = update_write(
            "projects/p/databases/(default)",
            "namespaces",
            "/mysource/schema",
            &record,
        );

        assert_eq!(
            write["update"]["name"],
            "projects/p/databases/(default)/documents/namespaces/_mysource_schema"
        );
        assert_eq!(
            write["update"]["fields"]["version"],
            json!({"integerValue": "1"})
        );
    }
}
