//! Asynchronous jobs.
use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;

impl Orthanc {
    /// Identifiers of the jobs, or their details with the `expand` param.
    pub fn get_jobs(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/jobs", params)
    }

    pub fn get_job(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&format!("/jobs/{id}"), params)
    }

    pub fn post_job_cancel(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/jobs/{id}/cancel"), body)
    }

    pub fn post_job_pause(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/jobs/{id}/pause"), body)
    }

    /// Resubmit a failed job.
    pub fn post_job_resubmit(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/jobs/{id}/resubmit"), body)
    }

    /// Resume a paused job.
    pub fn post_job_resume(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/jobs/{id}/resume"), body)
    }

    /// Retrieve outputs generated by the job (only valid after job is successful),
    /// e.g. the ZIP of an asynchronous archive job under the key `archive`.
    pub fn get_job_output(
        &self,
        id: &str,
        key: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_request(&format!("/jobs/{id}/{key}"), params)
    }
}
