//! Query/retrieve against a remote modality, through Orthanc.
use reqwest::blocking::Response;
use serde::Serialize;
use serde_json::Value;

use crate::client::{Body, Orthanc, Params};
use crate::error::OrthancError;
use crate::models::{MoveRequest, QueryResponse, StoreOutcome, StoreRequest};
use crate::types::{ModalityName, ModalityNameRef, QueryIdRef};

/// A remote DICOM modality, as configured in Orthanc.
///
/// ```no_run
/// use orthanc_client::{Orthanc, QueryRequest, RemoteModality, ResourceType};
///
/// let orthanc = Orthanc::new("http://localhost:8042")?;
/// let modality = RemoteModality::new(&orthanc, "sample");
/// let request = QueryRequest::new(ResourceType::Study).with("PatientID", "03HD*");
/// let query = modality.query(&request)?;
/// for answer in modality.get_query_answers(&query.id, &[("expand", "")])? {
///     println!("{answer}");
/// }
/// # Ok::<(), orthanc_client::OrthancError>(())
/// ```
pub struct RemoteModality<'a> {
    orthanc: &'a Orthanc,
    modality: ModalityName,
}

impl<'a> RemoteModality<'a> {
    pub fn new(orthanc: &'a Orthanc, modality: impl Into<ModalityName>) -> Self {
        Self {
            orthanc,
            modality: modality.into(),
        }
    }

    pub fn modality(&self) -> &ModalityNameRef {
        &self.modality
    }

    /// C-ECHO to the remote modality. Returns `false` if the modality did not answer.
    pub fn echo(&self) -> Result<bool, OrthancError> {
        let body = Body::Json(Value::Object(Default::default()));
        let res = self.orthanc.post_modality_echo(self.modality.as_str(), body);
        self.succeeded("C-ECHO", res)
    }

    /// C-FIND with the given body, usually a [crate::QueryRequest].
    pub fn query<T: Serialize>(&self, data: &T) -> Result<QueryResponse, OrthancError> {
        let body = serde_json::to_value(data)?;
        let res = self.orthanc.post_modality_query(self.modality.as_str(), body)?;
        Ok(res.json()?)
    }

    /// C-MOVE from the remote modality to Orthanc (or the `TargetAet` given in the body).
    ///
    /// Returns `false` if the modality refused the request.
    pub fn retrieve<T: Serialize>(&self, data: &T) -> Result<bool, OrthancError> {
        let body = serde_json::to_value(data)?;
        let res = self.orthanc.post_modality_move(self.modality.as_str(), body);
        self.succeeded("C-MOVE", res)
    }

    /// C-MOVE all the answers of a previous [RemoteModality::query] to the AET named in
    /// `request`.
    ///
    /// Returns `false` if the modality refused the request.
    pub fn move_query_results(
        &self,
        query_id: &QueryIdRef,
        request: &MoveRequest,
    ) -> Result<bool, OrthancError> {
        let body = serde_json::to_value(request)?;
        let res = self.orthanc.post_query_retrieve(query_id.as_str(), body);
        self.succeeded("C-MOVE", res)
    }

    /// Answers of a C-FIND: their indices, or their content when
    /// `params` contains `expand`. Empty if nothing matched.
    pub fn get_query_answers(
        &self,
        query_id: &QueryIdRef,
        params: Params<'_>,
    ) -> Result<Vec<Value>, OrthancError> {
        let res = self.orthanc.get_query_answers(query_id.as_str(), params)?;
        Ok(res.json()?)
    }

    /// Content of one answer of a C-FIND.
    pub fn get_query_answer_content(
        &self,
        query_id: &QueryIdRef,
        index: usize,
        params: Params<'_>,
    ) -> Result<Value, OrthancError> {
        let res = self
            .orthanc
            .get_query_answer_content(query_id.as_str(), index, params)?;
        Ok(res.json()?)
    }

    /// C-STORE local resources to the remote modality.
    ///
    /// An asynchronous request (`synchronous: false`) yields the [crate::Job]
    /// sending the resources.
    pub fn store(&self, request: &StoreRequest) -> Result<StoreOutcome, OrthancError> {
        let body = serde_json::to_value(request)?;
        let res = self.orthanc.post_modality_store(self.modality.as_str(), body)?;
        Ok(res.json()?)
    }

    fn succeeded(
        &self,
        operation: &str,
        res: Result<Response, OrthancError>,
    ) -> Result<bool, OrthancError> {
        match res {
            Ok(_) => Ok(true),
            Err(e) if e.is_refusal() => {
                tracing::warn!(
                    modality = self.modality.as_str(),
                    operation,
                    error = %e,
                    "remote modality operation failed"
                );
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
