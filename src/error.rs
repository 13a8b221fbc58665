use reqwest::StatusCode;
use reqwest::blocking::Response;

#[derive(thiserror::Error, Debug)]
pub enum OrthancError {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Settings(#[from] figment::Error),

    #[error("resource not found: {path}")]
    NotFound {
        path: String,
        source: reqwest::Error,
    },

    #[error("({status:?} {reason:?}): {text:?}")]
    Orthanc {
        status: StatusCode,
        reason: &'static str,
        text: Result<String, reqwest::Error>,
        source: reqwest::Error,
    },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl OrthancError {
    /// HTTP status of the response, if Orthanc answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::Orthanc { status, .. } => Some(*status),
            Self::Request(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the server answered the request with an error status
    /// (as opposed to the request never getting an answer).
    ///
    /// Authentication failures are not refusals: they concern this client,
    /// not the request.
    pub fn is_refusal(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Orthanc { status, .. } => {
                !matches!(*status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            }
            _ => false,
        }
    }
}

pub(crate) fn check(res: Response) -> Result<Response, OrthancError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            if status == StatusCode::NOT_FOUND {
                let path = res.url().path().to_string();
                return Err(OrthancError::NotFound { path, source });
            }
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text();
            Err(OrthancError::Orthanc {
                status,
                reason,
                text,
                source,
            })
        }
    }
}
