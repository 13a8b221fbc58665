use std::borrow::Cow;

use reqwest::Method;
use reqwest::blocking::{Client, ClientBuilder, Response};

use crate::error::{OrthancError, check};
use crate::settings::OrthancSettings;

/// Query-string parameters of a GET request, passed through as given.
pub type Params<'a> = &'a [(&'a str, &'a str)];

/// Payload of a POST or PUT request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    /// Sent as `application/json`.
    Json(serde_json::Value),
    /// Sent verbatim, e.g. a DICOM file, a Lua script or a metadata value.
    Raw(Vec<u8>),
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl From<Vec<u8>> for Body {
    fn from(value: Vec<u8>) -> Self {
        Self::Raw(value)
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Self::Raw(value.into_bytes())
    }
}

impl From<&str> for Body {
    fn from(value: &str) -> Self {
        Self::Raw(value.as_bytes().to_vec())
    }
}

#[derive(Clone)]
struct Credentials {
    username: String,
    password: String,
}

/// Client of an Orthanc server's REST API.
///
/// If the server requires authentication, set credentials with
/// [Orthanc::setup_credentials] before sending requests.
#[derive(Clone)]
pub struct Orthanc {
    client: Client,
    url: String,
    credentials: Option<Credentials>,
}

impl Orthanc {
    pub fn new(url: impl Into<String>) -> Result<Self, OrthancError> {
        let client = ClientBuilder::new().use_rustls_tls().build()?;
        Ok(Self::with_client(url, client))
    }

    /// Use a preconfigured HTTP client (timeouts, proxies, certificates...).
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        let url = url.into().trim_end_matches('/').to_string();
        Self {
            client,
            url,
            credentials: None,
        }
    }

    pub fn from_settings(settings: &OrthancSettings) -> Result<Self, OrthancError> {
        let mut builder = ClientBuilder::new().use_rustls_tls();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let mut orthanc = Self::with_client(&settings.url, builder.build()?);
        if let Some((username, password)) = settings.credentials() {
            orthanc.setup_credentials(username, password);
        }
        Ok(orthanc)
    }

    /// Calls [Orthanc::from_settings] using configuration from environment variables.
    pub fn from_env() -> Result<Self, OrthancError> {
        let settings = OrthancSettings::from_env()?;
        Self::from_settings(&settings)
    }

    /// Set HTTP basic credentials, sent with every subsequent request.
    pub fn setup_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.setup_credentials(username, password);
        self
    }

    /// Orthanc server address.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET request to the given route, e.g. `/patients`.
    pub fn get_request(&self, route: &str, params: Params<'_>) -> Result<Response, OrthancError> {
        self.send(Method::GET, route, params, Body::Empty)
    }

    pub fn post_request(
        &self,
        route: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.send(Method::POST, route, &[], body.into())
    }

    pub fn put_request(
        &self,
        route: &str,
        body: impl Into<Body>,
    ) -> Result<Response, OrthancError> {
        self.send(Method::PUT, route, &[], body.into())
    }

    pub fn delete_request(&self, route: &str) -> Result<Response, OrthancError> {
        self.send(Method::DELETE, route, &[], Body::Empty)
    }

    fn send(
        &self,
        method: Method,
        route: &str,
        params: Params<'_>,
        body: Body,
    ) -> Result<Response, OrthancError> {
        let url = join_url(&self.url, route);
        tracing::debug!(%method, %url, "sending request to Orthanc");
        let mut request = self.client.request(method, url);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Raw(bytes) => request.body(bytes),
        };
        check(request.send()?)
    }
}

/// Percent-encode a caller-supplied name for use as one path segment.
pub(crate) fn segment(name: &str) -> Cow<'_, str> {
    urlencoding::encode(name)
}

fn join_url(base: &str, route: &str) -> String {
    if route.starts_with('/') {
        format!("{base}{route}")
    } else {
        format!("{base}/{route}")
    }
}
