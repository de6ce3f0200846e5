//! Services whose records the toolkit knows how to reshape.

use crate::encoding::EncodingSpec;
use crate::error::TransformError;
use crate::projection::ProjectionSpec;
use std::fmt;
use std::str::FromStr;

const JOB_PROJECTION: &str = "jobId,jobState,jobInfo.user,jobInfo.space,jobInfo.dataset,\
jobInfo.datasetVersion,jobInfo.sql,jobInfo.queryType,jobInfo.startTime,jobInfo.endTime,\
jobInfo.duration,jobInfo.queueName,jobInfo.parentDataset,jobInfo.allDatasets";

const NAMESPACE_PROJECTION: &str = "entityPathKey,container.type.entityType,container.type.entityId";

const JOB_ENCODING: &str = "all_keys";

const NAMESPACE_ENCODING: &str = "container";

/// Record family handled by the generator, rewriter and loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Job,
    Namespace,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 2] = [ServiceKind::Job, ServiceKind::Namespace];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Job => "job",
            ServiceKind::Namespace => "namespace",
        }
    }

    /// Fields extracted by the rewriter.
    pub fn projection_spec(&self) -> Result<ProjectionSpec, TransformError> {
        match self {
            ServiceKind::Job => ProjectionSpec::parse(JOB_PROJECTION),
            ServiceKind::Namespace => ProjectionSpec::parse(NAMESPACE_PROJECTION),
        }
    }

    /// Fields re-encoded by the rewriter.
    pub fn encoding_spec(&self) -> Result<EncodingSpec, TransformError> {
        match self {
            ServiceKind::Job => EncodingSpec::parse(JOB_ENCODING, self.all_fields_field()),
            ServiceKind::Namespace => {
                EncodingSpec::parse(NAMESPACE_ENCODING, self.all_fields_field())
            }
        }
    }

    /// Output field holding the whole encoded source record.
    pub fn all_fields_field(&self) -> &'static str {
        match self {
            ServiceKind::Job => "jobResult",
            ServiceKind::Namespace => "all",
        }
    }

    /// Field carrying the record's identity.
    pub fn id_field(&self) -> &'static str {
        match self {
            ServiceKind::Job => "jobId",
            ServiceKind::Namespace => "entityPathKey",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| TransformError::InvalidServiceName(s.to_string()))
    }
}
