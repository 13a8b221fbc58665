//! Client for the REST API of an [Orthanc](https://www.orthanc-server.com/) DICOM server.
//!
//! [Orthanc] has one method per REST route, which sends exactly one HTTP request
//! and returns the raw response. [RemoteModality] is a thin layer over the
//! `/modalities` and `/queries` routes for C-ECHO, C-FIND, C-MOVE and C-STORE.

mod attachments;
mod changes;
mod client;
mod config;
mod error;
mod instances;
mod jobs;
mod metadata;
mod modalities;
mod models;
mod patients;
mod peers;
mod plugins;
mod queries;
mod remote;
mod resources;
mod series;
mod settings;
mod studies;
mod system;
mod tools;
mod types;

pub use client::{Body, Orthanc, Params};
pub use config::get_config;
pub use error::OrthancError;
pub use models::{
    FindRequest, Job, MoveRequest, QueryRequest, QueryResponse, StoreOutcome, StoreRequest,
    StoreResponse,
};
pub use remote::RemoteModality;
pub use reqwest::blocking::Response;
pub use settings::OrthancSettings;
pub use types::{ModalityName, ModalityNameRef, QueryId, QueryIdRef, ResourceType};
