//! The `/tools` routes: lookups, DICOM creation, server administration.
use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;
use crate::models::FindRequest;

impl Orthanc {
    /// ZIP archive of a set of resources, given as a list of identifiers.
    pub fn post_tools_create_archive(
        &self,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request("/tools/create-archive", body)
    }

    /// Create a DICOM instance from JSON tags, and store it.
    pub fn post_tools_create_dicom(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.post_request("/tools/create-dicom", body)
    }

    pub fn post_tools_create_media(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.post_request("/tools/create-media", body)
    }

    pub fn post_tools_create_media_extended(
        &self,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request("/tools/create-media-extended", body)
    }

    pub fn get_tools_default_encoding(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/tools/default-encoding", params)
    }

    /// Change the default character encoding, e.g. `Latin1`.
    pub fn put_tools_default_encoding(
        &self,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.put_request("/tools/default-encoding", body)
    }

    pub fn get_tools_dicom_conformance(
        &self,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_request("/tools/dicom-conformance", params)
    }

    /// Run a Lua script, given as the raw body.
    pub fn post_tools_execute_script(
        &self,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request("/tools/execute-script", body)
    }

    /// Search for resources matching DICOM tags. See [Orthanc::find] for the typed form.
    pub fn post_tools_find(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.post_request("/tools/find", body)
    }

    /// Identifiers of the resources matching the request.
    pub fn find(&self, request: &FindRequest) -> Result<Vec<String>, OrthancError> {
        let body = serde_json::to_value(request)?;
        let ids = self.post_tools_find(body)?.json()?;
        Ok(ids)
    }

    /// Generate a DICOM UID, `level` param being `patient`, `study`, `series` or `instance`.
    pub fn get_tools_generate_uid(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/tools/generate-uid", params)
    }

    pub fn post_tools_invalidate_tags(
        &self,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request("/tools/invalidate-tags", body)
    }

    /// Map a DICOM UID (or patient ID) to Orthanc identifiers.
    pub fn post_tools_lookup(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.post_request("/tools/lookup", body)
    }

    pub fn get_tools_metrics(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/tools/metrics", params)
    }

    /// Enable (`"1"`) or disable (`"0"`) metrics collection.
    pub fn put_tools_metrics(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.put_request("/tools/metrics", body)
    }

    pub fn get_tools_metrics_prometheus(
        &self,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_request("/tools/metrics-prometheus", params)
    }

    pub fn get_tools_now(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/tools/now", params)
    }

    pub fn get_tools_now_local(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/tools/now-local", params)
    }

    pub fn post_tools_reconstruct(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.post_request("/tools/reconstruct", body)
    }

    /// Hot restart of the server.
    pub fn post_tools_reset(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.post_request("/tools/reset", body)
    }

    pub fn post_tools_shutdown(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.post_request("/tools/shutdown", body)
    }
}
