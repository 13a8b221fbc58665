use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params, segment};
use crate::error::OrthancError;
use crate::types::ResourceType;

impl Orthanc {
    /// Names of the metadata associated with a resource.
    pub fn get_metadata(
        &self,
        resource_type: ResourceType,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/metadata", resource_type.route(id));
        self.get_request(&route, params)
    }

    pub fn get_metadata_item(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/metadata/{}", resource_type.route(id), segment(name));
        self.get_request(&route, params)
    }

    pub fn delete_metadata_item(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/metadata/{}", resource_type.route(id), segment(name));
        self.delete_request(&route)
    }

    /// Set a metadata value. Orthanc expects the value as the raw request body.
    pub fn put_metadata_item(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/metadata/{}", resource_type.route(id), segment(name));
        self.put_request(&route, body)
    }
}
