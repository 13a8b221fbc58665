use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;
use crate::types::ResourceType;

const PATIENT: ResourceType = ResourceType::Patient;

impl Orthanc {
    /// Identifiers of all patients, or their details with the `expand` param.
    pub fn get_patients(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/patients", params)
    }

    pub fn get_patient(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&PATIENT.route(id), params)
    }

    /// Delete a patient with all its studies, series and instances.
    pub fn delete_patient(&self, id: &str) -> Result<Response, OrthancError> {
        self.delete_request(&PATIENT.route(id))
    }

    pub fn post_patient_anonymize(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(PATIENT, id, "anonymize", body.into())
    }

    /// ZIP archive of the patient's DICOM files.
    pub fn get_patient_archive(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "archive", params)
    }

    /// Create a ZIP archive, possibly as an asynchronous job.
    pub fn post_patient_archive(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(PATIENT, id, "archive", body.into())
    }

    pub fn get_patient_instances(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "instances", params)
    }

    pub fn get_patient_instances_tags(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "instances-tags", params)
    }

    /// ZIP archive with a DICOMDIR.
    pub fn get_patient_media(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "media", params)
    }

    pub fn post_patient_media(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(PATIENT, id, "media", body.into())
    }

    pub fn post_patient_modify(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(PATIENT, id, "modify", body.into())
    }

    pub fn get_patient_module(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "module", params)
    }

    /// Whether the patient is protected against recycling (`0` or `1`).
    pub fn get_patient_protected(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "protected", params)
    }

    /// Protect (`"1"`) or unprotect (`"0"`) the patient against recycling.
    pub fn put_patient_protected(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/protected", PATIENT.route(id));
        self.put_request(&route, body)
    }

    pub fn post_patient_reconstruct(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(PATIENT, id, "reconstruct", body.into())
    }

    pub fn get_patient_series(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "series", params)
    }

    pub fn get_patient_shared_tags(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "shared-tags", params)
    }

    pub fn get_patient_statistics(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "statistics", params)
    }

    pub fn get_patient_studies(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(PATIENT, id, "studies", params)
    }
}
