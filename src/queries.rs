//! C-FIND queries issued with [Orthanc::post_modality_query], and their answers.
use reqwest::blocking::Response;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;

impl Orthanc {
    pub fn get_queries(&self, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request("/queries", params)
    }

    pub fn get_query(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&format!("/queries/{id}"), params)
    }

    pub fn delete_query(&self, id: &str) -> Result<Response, OrthancError> {
        self.delete_request(&format!("/queries/{id}"))
    }

    /// Indices of the answers, or their content with the `expand` param.
    pub fn get_query_answers(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_request(&format!("/queries/{id}/answers"), params)
    }

    pub fn get_query_answer_content(
        &self,
        id: &str,
        index: usize,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_request(&format!("/queries/{id}/answers/{index}/content"), params)
    }

    /// C-MOVE of a single answer.
    pub fn post_query_answer_retrieve(
        &self,
        id: &str,
        index: usize,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_query_answer_action(id, index, "retrieve", body.into())
    }

    /// Query the child instances of an answer.
    pub fn post_query_answer_query_instances(
        &self,
        id: &str,
        index: usize,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_query_answer_action(id, index, "query-instances", body.into())
    }

    pub fn post_query_answer_query_series(
        &self,
        id: &str,
        index: usize,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_query_answer_action(id, index, "query-series", body.into())
    }

    pub fn post_query_answer_query_studies(
        &self,
        id: &str,
        index: usize,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_query_answer_action(id, index, "query-studies", body.into())
    }

    pub fn get_query_level(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&format!("/queries/{id}/level"), params)
    }

    pub fn get_query_modality(
        &self,
        id: &str,
        params: Params<'_>,
    ) -> Result<Response, OrthancError> {
        self.get_request(&format!("/queries/{id}/modality"), params)
    }

    /// The query that was sent to the modality.
    pub fn get_query_query(&self, id: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.get_request(&format!("/queries/{id}/query"), params)
    }

    /// C-MOVE of all the answers of the query.
    pub fn post_query_retrieve(
        &self,
        id: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/queries/{id}/retrieve"), body)
    }

    fn post_query_answer_action(
        &self,
        id: &str,
        index: usize,
        action: &str,
        body: Body,
    ) -> Result<Response, OrthancError> {
        self.post_request(&format!("/queries/{id}/answers/{index}/{action}"), body)
    }
}
