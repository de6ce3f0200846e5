//! Flat and dotted key paths.

use crate::error::TransformError;
use crate::Record;
use serde_json::Value;
use std::fmt;

/// Locates a possibly nested value inside a [`Record`].
///
/// `jobId` is a flat path; `jobInfo.startTime` walks `jobInfo` then
/// `startTime`. Every segment before the last must resolve to an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a key path. Empty paths and empty segments (`a..b`) are rejected.
    pub fn parse(raw: &str) -> Result<Self, TransformError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TransformError::InvalidConfig(
                "key path must not be empty".to_string(),
            ));
        }

        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(TransformError::InvalidConfig(format!(
                "key path '{raw}' contains an empty segment"
            )));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when the path has more than one segment.
    pub fn is_dotted(&self) -> bool {
        self.segments.len() > 1
    }

    /// Name used for this path in a projected record: the last segment.
    pub fn output_name(&self) -> &str {
        // parse() guarantees at least one segment
        self.segments.last().map(String::as_str).unwrap_or(&self.raw)
    }

    /// Resolve this path against `record`.
    ///
    /// A missing flat key is [`TransformError::MissingKey`]. For dotted paths,
    /// any segment that is absent, or an intermediate value that is not an
    /// object, is [`TransformError::InvalidPath`].
    pub fn resolve<'a>(&self, record: &'a Record) -> Result<&'a Value, TransformError> {
        if !self.is_dotted() {
            return record
                .get(&self.raw)
                .ok_or_else(|| TransformError::MissingKey(self.raw.clone()));
        }

        let (last, parents) = self
            .segments
            .split_last()
            .ok_or_else(|| TransformError::MissingKey(self.raw.clone()))?;

        let mut current = record;
        for segment in parents {
            current = match current.get(segment) {
                Some(Value::Object(map)) => map,
                _ => return Err(self.invalid_at(segment)),
            };
        }

        current.get(last).ok_or_else(|| self.invalid_at(last))
    }

    fn invalid_at(&self, segment: &str) -> TransformError {
        TransformError::InvalidPath {
            path: self.raw.clone(),
            segment: segment.to_string(),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
