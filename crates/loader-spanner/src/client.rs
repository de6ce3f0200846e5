//! Minimal Spanner REST client: sessions and commits.

use crate::error::SpannerLoaderError;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// Where the target database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannerConfig {
    pub endpoint: String,
    pub project: String,
    pub instance: String,
    pub database: String,
    pub access_token: Option<String>,
}

impl SpannerConfig {
    /// `projects/{p}/instances/{i}/databases/{d}`
    pub fn database_path(&self) -> String {
        format!(
            "projects/{}/instances/{}/databases/{}",
            self.project, self.instance, self.database
        )
    }
}

#[derive(Deserialize)]
struct Session {
    name: String,
}

/// Build the body of a single-use read-write commit inserting `rows`.
pub fn insert_commit_body(table: &str, columns: &[&str], rows: Vec<Vec<Value>>) -> Value {
    json!({
        "singleUseTransaction": {"readWrite": {}},
        "mutations": [{
            "insert": {
                "table": table,
                "columns": columns,
                "values": rows,
            }
        }]
    })
}

pub struct SpannerClient {
    http: Client,
    base_url: String,
    database_path: String,
    access_token: Option<String>,
}

impl SpannerClient {
    pub fn new(config: &SpannerConfig) -> Result<Self, SpannerLoaderError> {
        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            http,
            base_url: format!("{}/v1", config.endpoint.trim_end_matches('/')),
            database_path: config.database_path(),
            access_token: config.access_token.clone(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(url: &str, response: Response) -> Result<Response, SpannerLoaderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SpannerLoaderError::Api {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        })
    }

    /// Create a session and return its resource name.
    pub async fn create_session(&self) -> Result<String, SpannerLoaderError> {
        let url = format!("{}/{}/sessions", self.base_url, self.database_path);
        debug!("Creating Spanner session at {url}");
        let response = self
            .authorized(self.http.post(&url).json(&json!({})))
            .send()
            .await?;
        let session: Session = Self::check(&url, response).await?.json().await?;
        Ok(session.name)
    }

    /// Commit `body` atomically within `session`.
    pub async fn commit(&self, session: &str, body: &Value) -> Result<(), SpannerLoaderError> {
        let url = format!("{}/{}:commit", self.base_url, session);
        let response = self.authorized(self.http.post(&url).json(body)).send().await?;
        Self::check(&url, response).await?;
        Ok(())
    }

    pub async fn delete_session(&self, session: &str) -> Result<(), SpannerLoaderError> {
        let url = format!("{}/{}", self.base_url, session);
        let response = self.authorized(self.http.delete(&url)).send().await?;
        Self::check(&url, response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path() {
        let config = SpannerConfig {
            endpoint: "http://localhost:9020/".to_string(),
            project: "p".to_string(),
            instance: "spandb1".to_string(),
            database: "ycsb-db".to_string(),
            access_token: None,
        };
        assert_eq!(
            config.database_path(),
            "projects/p/instances/spandb1/databases/ycsb-db"
        );
        let client = SpannerClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:9020/v1");
    }

    #[test]
    fn test_insert_commit_body() {
        let body = insert_commit_body(
            "dac_namespace",
            &["entityId", "entityPathKey"],
            vec![vec![json!("e-1"), json!("/a")], vec![json!("e-2"), json!("/b")]],
        );

        assert_eq!(body["singleUseTransaction"], json!({"readWrite": {}}));
        let insert = &body["mutations"][0]["insert"];
        assert_eq!(insert["table"], "dac_namespace");
        assert_eq!(insert["columns"], json!(["entityId", "entityPathKey"]));
        assert_eq!(insert["values"][1], json!(["e-2", "/b"]));
    }
}
