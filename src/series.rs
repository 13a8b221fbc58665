use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;
use crate::types::ResourceType;

const SERIES: ResourceType = ResourceType::Series;

impl Orthanc {
    /// Identifiers of all series. See [Orthanc::get_series_by_id] for a single one.
    pub fn get_series(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/series", params)
    }

    pub fn get_series_by_id(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&SERIES.route(id), params)
    }

    pub fn delete_series(&self, id: &str) -> Result<Response, OrthancError> {
        self.delete_request(&SERIES.route(id))
    }

    pub fn post_series_anonymize(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(SERIES, id, "anonymize", body.into())
    }

    pub fn get_series_archive(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "archive", params)
    }

    pub fn post_series_archive(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(SERIES, id, "archive", body.into())
    }

    pub fn get_series_instances(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "instances", params)
    }

    pub fn get_series_instances_tags(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "instances-tags", params)
    }

    pub fn get_series_media(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "media", params)
    }

    pub fn post_series_media(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(SERIES, id, "media", body.into())
    }

    pub fn post_series_modify(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(SERIES, id, "modify", body.into())
    }

    pub fn get_series_module(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "module", params)
    }

    /// Instances of the series sorted by their 3D position.
    pub fn get_series_ordered_slices(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "ordered-slices", params)
    }

    pub fn get_series_patient(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "patient", params)
    }

    pub fn post_series_reconstruct(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(SERIES, id, "reconstruct", body.into())
    }

    pub fn get_series_shared_tags(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "shared-tags", params)
    }

    pub fn get_series_statistics(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "statistics", params)
    }

    /// Parent study of the series.
    pub fn get_series_study(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_resource_field(SERIES, id, "study", params)
    }
}
