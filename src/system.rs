use reqwest::blocking::Response;

use crate::client::{Orthanc, Params};
use crate::error::OrthancError;

impl Orthanc {
    /// Version, name and DICOM settings of the server.
    pub fn get_system(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/system", params)
    }

    /// Disk usage and resource counts.
    pub fn get_statistics(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/statistics", params)
    }
}
