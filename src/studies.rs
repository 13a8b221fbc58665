use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;
use crate::types::ResourceType;

const STUDY: ResourceType = ResourceType::Study;

impl Orthanc {
    pub fn get_studies(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/studies", params)
    }

    pub fn get_study(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&STUDY.route(id), params)
    }

    pub fn delete_study(&self, id: &str) -> Result<Response, OrthancError> {
        self.delete_request(&STUDY.route(id))
    }

    pub fn post_study_anonymize(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(STUDY, id, "anonymize", body.into())
    }

    pub fn get_study_archive(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "archive", params)
    }

    pub fn post_study_archive(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(STUDY, id, "archive", body.into())
    }

    pub fn get_study_instances(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "instances", params)
    }

    pub fn get_study_instances_tags(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "instances-tags", params)
    }

    pub fn get_study_media(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "media", params)
    }

    pub fn post_study_media(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(STUDY, id, "media", body.into())
    }

    /// Merge series into this study. The body lists the `Resources` to move.
    pub fn post_study_merge(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(STUDY, id, "merge", body.into())
    }

    pub fn post_study_modify(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(STUDY, id, "modify", body.into())
    }

    pub fn get_study_module(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "module", params)
    }

    /// Patient module of the study.
    pub fn get_study_module_patient(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "module-patient", params)
    }

    pub fn get_study_patient(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "patient", params)
    }

    pub fn post_study_reconstruct(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(STUDY, id, "reconstruct", body.into())
    }

    pub fn get_study_series(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "series", params)
    }

    pub fn get_study_shared_tags(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "shared-tags", params)
    }

    /// Split this study into a new one. The body lists the `Series` to move.
    pub fn post_study_split(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(STUDY, id, "split", body.into())
    }

    pub fn get_study_statistics(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(STUDY, id, "statistics", params)
    }
}
