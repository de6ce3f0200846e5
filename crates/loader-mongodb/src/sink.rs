//! `insert_many` sink.

use crate::error::MongoLoaderError;
use async_trait::async_trait;
use batch_loader::{record_id, BatchSink, LoaderError};
use bson::{Bson, Document};
use mongodb::{Client, Collection, Database};
use record_core::{Record, ServiceKind};
use tracing::info;

/// Default documents per `insert_many`.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Largest accepted chunk.
pub const MAX_BATCH_SIZE: usize = 100_000;

/// Default collection per service.
pub fn default_collection(service: ServiceKind) -> &'static str {
    match service {
        ServiceKind::Job => "jobs",
        ServiceKind::Namespace => "namespaces",
    }
}

/// Writes each chunk with one `insert_many`.
pub struct MongoSink {
    database: Database,
    service: ServiceKind,
    use_record_id: bool,
}

impl MongoSink {
    /// Connect and verify the connection.
    pub async fn connect(
        connection_string: &str,
        database_name: &str,
        service: ServiceKind,
    ) -> Result<Self, MongoLoaderError> {
        let client = Client::with_uri_str(connection_string).await?;
        let database = client.database(database_name);

        // Test connection
        database.list_collection_names().await?;

        Ok(Self::with_database(database, service))
    }

    /// Create a sink with an existing database handle.
    pub fn with_database(database: Database, service: ServiceKind) -> Self {
        Self {
            database,
            service,
            use_record_id: false,
        }
    }

    /// Use the service id field as the document `_id`.
    pub fn with_record_id(mut self, use_record_id: bool) -> Self {
        self.use_record_id = use_record_id;
        self
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }

    /// Drop a collection if it exists.
    pub async fn drop_collection(&self, name: &str) -> Result<(), MongoLoaderError> {
        info!("Dropping collection: {}", name);
        self.collection(name).drop().await?;
        Ok(())
    }

    fn to_documents(&self, records: &[Record]) -> Result<Vec<Document>, LoaderError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| -> Result<Document, LoaderError> {
                let id = if self.use_record_id {
                    Some(record_id(record, self.service, index)?)
                } else {
                    None
                };
                Ok(record_to_document(record, id)?)
            })
            .collect()
    }
}

/// Convert a record to BSON, optionally setting `_id`.
pub fn record_to_document(record: &Record, id: Option<&str>) -> Result<Document, MongoLoaderError> {
    let mut doc = bson::to_document(record)?;
    if let Some(id) = id {
        doc.insert("_id", Bson::String(id.to_string()));
    }
    Ok(doc)
}

#[async_trait]
impl BatchSink for MongoSink {
    fn name(&self) -> &'static str {
        "MongoDB"
    }

    fn max_batch_size(&self) -> usize {
        MAX_BATCH_SIZE
    }

    fn default_batch_size(&self) -> usize {
        DEFAULT_BATCH_SIZE
    }

    async fn write_batch(&self, target: &str, records: &[Record]) -> Result<u64, LoaderError> {
        if records.is_empty() {
            return Ok(0);
        }

        let documents = self.to_documents(records)?;
        let result = self
            .collection(target)
            .insert_many(documents)
            .await
            .map_err(MongoLoaderError::from)?;

        Ok(result.inserted_ids.len() as u64)
    }
}
