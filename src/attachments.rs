//! Files attached to a patient, study, series or instance.
use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params, segment};
use crate::error::OrthancError;
use crate::types::ResourceType;

fn attachment_route(resource_type: ResourceType, id: &str, name: &str) -> String {
    format!("{}/attachments/{}", resource_type.route(id), segment(name))
}

impl Orthanc {
    /// List the files attached to a resource.
    pub fn get_attachments(
        &self,
        resource_type: ResourceType,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/attachments", resource_type.route(id));
        self.get_request(&route, params)
    }

    /// Attachment file by name, e.g. `dicom` or `dicom-as-json`.
    pub fn get_attachment(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_request(&attachment_route(resource_type, id, name), params)
    }

    pub fn delete_attachment(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
    ) -> Result<Response, OrthancError> {
        self.delete_request(&attachment_route(resource_type, id, name))
    }

    /// Create or replace an attachment.
    pub fn put_attachment(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.put_request(&attachment_route(resource_type, id, name), body)
    }

    pub fn post_attachment_compress(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/compress", attachment_route(resource_type, id, name));
        self.post_request(&route, body)
    }

    /// Attachment as stored on disk, possibly compressed.
    pub fn get_attachment_compressed_data(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_attachment_field(resource_type, id, name, "compressed-data", params)
    }

    pub fn get_attachment_compressed_md5(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_attachment_field(resource_type, id, name, "compressed-md5", params)
    }

    pub fn get_attachment_compressed_size(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_attachment_field(resource_type, id, name, "compressed-size", params)
    }

    /// Attachment content, uncompressed.
    pub fn get_attachment_data(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_attachment_field(resource_type, id, name, "data", params)
    }

    pub fn get_attachment_is_compressed(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_attachment_field(resource_type, id, name, "is-compressed", params)
    }

    pub fn get_attachment_md5(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_attachment_field(resource_type, id, name, "md5", params)
    }

    pub fn get_attachment_size(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_attachment_field(resource_type, id, name, "size", params)
    }

    pub fn post_attachment_uncompress(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/uncompress", attachment_route(resource_type, id, name));
        self.post_request(&route, body)
    }

    /// Check that the stored MD5 of the attachment matches its content.
    pub fn post_attachment_verify_md5(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/verify-md5", attachment_route(resource_type, id, name));
        self.post_request(&route, body)
    }

    fn get_attachment_field(
        &self,
        resource_type: ResourceType,
        id: &str,
        name: &str,
        field: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/{}", attachment_route(resource_type, id, name), field);
        self.get_request(&route, params)
    }
}
