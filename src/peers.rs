//! Orthanc peers, i.e. other Orthanc servers reachable over HTTP.
use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params, segment};
use crate::error::OrthancError;

impl Orthanc {
    pub fn get_peers(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/peers", params)
    }

    pub fn get_peer(&self, peer: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&format!("/peers/{}", segment(peer)), params)
    }

    pub fn delete_peer(&self, peer: &str) -> Result<Response, OrthancError> {
        self.delete_request(&format!("/peers/{}", segment(peer)))
    }

    pub fn put_peer(&self, peer: &str, body: impl Into<Body>) -> Result<Response, OrthancError> {
        self.put_request(&format!("/peers/{}", segment(peer)), body)
    }

    /// Send resources to the peer.
    pub fn post_peer_store(
        &self,
        peer: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/peers/{}/store", segment(peer)), body)
    }
}
