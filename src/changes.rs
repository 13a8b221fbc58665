//! The change log and export log of the server.
use reqwest::blocking::Response;

use crate::client::{Orthanc, Params};
use crate::error::OrthancError;

impl Orthanc {
    /// Changes in the database, paginated with the `since` and `limit` params.
    pub fn get_changes(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/changes", params)
    }

    /// Clear the change log.
    pub fn delete_changes(&self) -> Result<Response, OrthancError> {
        self.delete_request("/changes")
    }

    /// Resources sent to remote modalities or peers.
    pub fn get_exports(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/exports", params)
    }

    /// Clear the export log.
    pub fn delete_exports(&self) -> Result<Response, OrthancError> {
        self.delete_request("/exports")
    }
}
