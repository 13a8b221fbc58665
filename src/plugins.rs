use reqwest::blocking::Response;

use crate::client::{Orthanc, Params};
use crate::error::OrthancError;

impl Orthanc {
    pub fn get_plugins(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/plugins", params)
    }

    pub fn get_plugin(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&format!("/plugins/{id}"), params)
    }

    /// JavaScript extensions that plugins add to Orthanc Explorer.
    pub fn get_plugins_explorer_js(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/plugins/explorer.js", params)
    }
}
