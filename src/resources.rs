//! Routes shared by the patient, study, series and instance collections.
use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;
use crate::types::ResourceType;

impl Orthanc {
    pub(crate) fn get_resource_field(
        &self,
        resource_type: ResourceType,
        id: &str,
        field: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/{}", resource_type.route(id), field);
        self.get_request(&route, params)
    }

    pub(crate) fn post_resource_action(
        &self,
        resource_type: ResourceType,
        id: &str,
        action: &str,
        body: Body,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/{}", resource_type.route(id), action);
        self.post_request(&route, body)
    }
}
