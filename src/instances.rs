use camino::Utf8Path;
use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;
use crate::types::ResourceType;

const INSTANCE: ResourceType = ResourceType::Instance;

impl Orthanc {
    /// Identifiers of all instances.
    pub fn get_instances(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/instances", params)
    }

    /// Store a DICOM file, given as a raw body.
    pub fn post_instances(&self, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.post_request("/instances", body)
    }

    /// Read a DICOM file from disk and store it with [Orthanc::post_instances].
    pub fn upload_dicom_file(&self, path: impl AsRef<Utf8Path>) -> Result<Response, OrthancError> {
        let data = fs_err::read(path.as_ref())?;
        tracing::debug!(path = %path.as_ref(), size = data.len(), "uploading DICOM file");
        self.post_instances(Body::Raw(data))
    }

    pub fn get_instance(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&INSTANCE.route(id), params)
    }

    pub fn delete_instance(&self, id: &str) -> Result<Response, OrthancError> {
        self.delete_request(&INSTANCE.route(id))
    }

    pub fn post_instance_anonymize(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(INSTANCE, id, "anonymize", body.into())
    }

    /// List the first-level DICOM tags.
    pub fn get_instance_content(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "content", params)
    }

    /// Raw value of one tag, `group_element` being e.g. `0010-0010`.
    pub fn get_instance_content_tag(
        &self,
        id: &str,
        group_element: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/content/{}", INSTANCE.route(id), group_element);
        self.get_request(&route, params)
    }

    /// Raw access to the content of DICOM sequences, by path below `content`,
    /// e.g. `["0008-1140", "0", "0008-1150"]`.
    pub fn get_instance_content_path(
        &self,
        id: &str,
        path: &[&str],
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/content/{}", INSTANCE.route(id), path.join("/"));
        self.get_request(&route, params)
    }

    pub fn post_instance_export(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(INSTANCE, id, "export", body.into())
    }

    /// The DICOM file.
    pub fn get_instance_file(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "file", params)
    }

    pub fn get_instance_frames(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "frames", params)
    }

    pub fn get_instance_frame_image_int16(
        &self,
        id: &str,
        frame: u32,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_instance_frame(id, frame, "image-int16", params)
    }

    pub fn get_instance_frame_image_uint16(
        &self,
        id: &str,
        frame: u32,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_instance_frame(id, frame, "image-uint16", params)
    }

    pub fn get_instance_frame_image_uint8(
        &self,
        id: &str,
        frame: u32,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_instance_frame(id, frame, "image-uint8", params)
    }

    pub fn get_instance_frame_matlab(
        &self,
        id: &str,
        frame: u32,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_instance_frame(id, frame, "matlab", params)
    }

    /// PNG preview of a frame.
    pub fn get_instance_frame_preview(
        &self,
        id: &str,
        frame: u32,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_instance_frame(id, frame, "preview", params)
    }

    pub fn get_instance_frame_raw(
        &self,
        id: &str,
        frame: u32,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_instance_frame(id, frame, "raw", params)
    }

    pub fn get_instance_frame_raw_gz(
        &self,
        id: &str,
        frame: u32,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_instance_frame(id, frame, "raw.gz", params)
    }

    /// Meta information (header) of the DICOM file.
    pub fn get_instance_header(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "header", params)
    }

    pub fn get_instance_image_int16(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "image-int16", params)
    }

    pub fn get_instance_image_uint16(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "image-uint16", params)
    }

    pub fn get_instance_image_uint8(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "image-uint8", params)
    }

    pub fn get_instance_matlab(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "matlab", params)
    }

    pub fn post_instance_modify(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(INSTANCE, id, "modify", body.into())
    }

    pub fn get_instance_module(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "module", params)
    }

    /// Parent patient of the instance.
    pub fn get_instance_patient(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "patient", params)
    }

    /// Embedded PDF of an Encapsulated PDF instance.
    pub fn get_instance_pdf(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "pdf", params)
    }

    pub fn get_instance_preview(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "preview", params)
    }

    pub fn post_instance_reconstruct(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_resource_action(INSTANCE, id, "reconstruct", body.into())
    }

    /// Parent series of the instance.
    pub fn get_instance_series(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "series", params)
    }

    pub fn get_instance_simplified_tags(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "simplified-tags", params)
    }

    pub fn get_instance_statistics(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "statistics", params)
    }

    /// Parent study of the instance.
    pub fn get_instance_study(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "study", params)
    }

    /// All DICOM tags of the instance as JSON.
    pub fn get_instance_tags(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_resource_field(INSTANCE, id, "tags", params)
    }

    fn get_instance_frame(
        &self,
        id: &str,
        frame: u32,
        field: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        let route = format!("{}/frames/{}/{}", INSTANCE.route(id), frame, field);
        self.get_request(&route, params)
    }
}
