//! Remote DICOM modalities known to Orthanc, and the DICOM network
//! services Orthanc runs against them as an SCU.
use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params, segment};
use crate::error::OrthancError;

impl Orthanc {
    pub fn get_modalities(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/modalities", params)
    }

    pub fn get_modality(&self, name: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&format!("/modalities/{}", segment(name)), params)
    }

    pub fn delete_modality(&self, name: &str) -> Result<Response, OrthancError> {
        self.delete_request(&format!("/modalities/{}", segment(name)))
    }

    /// Create or update the configuration of a modality.
    pub fn put_modality(
        &self,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.put_request(&format!("/modalities/{}", segment(name)), body)
    }

    /// C-ECHO SCU.
    pub fn post_modality_echo(
        &self,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/modalities/{}/echo", segment(name)), body)
    }

    /// C-MOVE SCU (retrieve).
    pub fn post_modality_move(
        &self,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/modalities/{}/move", segment(name)), body)
    }

    /// C-FIND SCU (query), with subsequent possibility for retrieve.
    pub fn post_modality_query(
        &self,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/modalities/{}/query", segment(name)), body)
    }

    /// C-STORE SCU.
    pub fn post_modality_store(
        &self,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/modalities/{}/store", segment(name)), body)
    }
}
