//! Request and response bodies for the few routes this crate decodes itself.
//! Everything else is passed through as raw JSON.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{QueryId, ResourceType};

/// Body of `POST /modalities/{name}/query` (C-FIND).
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct QueryRequest {
    pub level: ResourceType,
    /// DICOM keyword to value (wildcards allowed). Empty values are returned keys.
    pub query: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize: Option<bool>,
}

impl QueryRequest {
    pub fn new(level: ResourceType) -> Self {
        Self {
            level,
            query: Default::default(),
            normalize: None,
        }
    }

    pub fn with(mut self, keyword: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(keyword.into(), value.into());
        self
    }
}

/// Response of a C-FIND: the query is stored server-side under `/queries/{ID}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QueryResponse {
    #[serde(rename = "ID")]
    pub id: QueryId,
    #[serde(rename = "Path")]
    pub path: String,
}

/// Body of `POST /queries/{id}/retrieve` (C-MOVE of all query answers).
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MoveRequest {
    /// AE title receiving the C-MOVE. Orthanc's own AET if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_aet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronous: Option<bool>,
}

/// Body of `POST /modalities/{name}/store` (C-STORE).
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StoreRequest {
    pub synchronous: bool,
    /// Orthanc identifiers of patients, studies, series or instances to send.
    pub resources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StoreResponse {
    pub description: String,
    pub failed_instances_count: usize,
    pub instances_count: usize,
    pub local_aet: String,
    pub parent_resources: Vec<String>,
    pub remote_aet: String,
}

/// Reply of `POST /modalities/{name}/store`: the C-STORE report when
/// synchronous, otherwise the job running it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StoreOutcome {
    Done(StoreResponse),
    Job(Job),
}

/// Body of `POST /tools/find`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct FindRequest {
    pub level: ResourceType,
    pub query: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

impl FindRequest {
    pub fn new(level: ResourceType) -> Self {
        Self {
            level,
            query: Default::default(),
            limit: None,
            since: None,
            case_sensitive: None,
        }
    }

    pub fn with(mut self, keyword: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(keyword.into(), value.into());
        self
    }
}

/// Orthanc asynchronous job response data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Hash)]
pub struct Job {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Path")]
    pub path: String,
}
