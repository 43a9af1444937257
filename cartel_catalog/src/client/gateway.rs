use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::Session;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Request to {path} failed with status {status}{}", describe(.message))]
    Status {
        path: String,
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Request to {path} returned no content")]
    EmptyBody { path: String },

    #[error("Failed to send request {0}")]
    Transport(#[from] reqwest_middleware::Error),

    #[error("Http failure {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode response {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Query parameter {0} is not a plain value")]
    InvalidQuery(String),

    #[error("Invalid header {0}")]
    InvalidHeader(String),

    #[error("Invalid url {0}")]
    InvalidUrl(String),
}

fn describe(message: &Option<String>) -> String {
    message
        .as_ref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

impl GatewayError {
    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(StatusCode::FORBIDDEN)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Successful outcome of a gateway call
pub enum Reply<T> {
    Json(T),
    /// 204, the body was not read
    NoContent,
}

impl<T> Reply<T> {
    pub fn into_json(self) -> Option<T> {
        match self {
            Reply::Json(value) => Some(value),
            Reply::NoContent => None,
        }
    }

    pub fn is_no_content(&self) -> bool {
        matches!(self, Reply::NoContent)
    }
}

/// Flattens a filter struct into query pairs.
/// Null fields are dropped, arrays repeat their key, nested objects are rejected
pub fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>, GatewayError> {
    let fields = match serde_json::to_value(query)? {
        Value::Object(fields) => fields,
        Value::Null => return Ok(vec![]),
        other => return Err(GatewayError::InvalidQuery(other.to_string())),
    };

    let mut pairs = vec![];
    for (key, value) in fields {
        match value {
            Value::Array(values) => {
                for value in values {
                    if let Some(value) = plain_value(&key, value)? {
                        pairs.push((key.clone(), value));
                    }
                }
            }
            value => {
                if let Some(value) = plain_value(&key, value)? {
                    pairs.push((key, value));
                }
            }
        }
    }
    Ok(pairs)
}

fn plain_value(key: &str, value: Value) -> Result<Option<String>, GatewayError> {
    match value {
        Value::Null => Ok(None),
        Value::String(value) => Ok(Some(value)),
        Value::Bool(value) => Ok(Some(value.to_string())),
        Value::Number(value) => Ok(Some(value.to_string())),
        Value::Array(_) | Value::Object(_) => Err(GatewayError::InvalidQuery(key.to_string())),
    }
}

#[derive(Debug, Clone)]
/// One call to the backend: verb, path relative to the base url, query, JSON body and header overrides
pub struct ApiRequest {
    method: Method,
    path: String,
    /// Appended after `path`, each one percent-encoded
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            segments: vec![],
            query: vec![],
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends a path segment, `/`, `?` and `#` in `value` stay inside the segment
    pub fn segment(mut self, value: impl ToString) -> Self {
        self.segments.push(value.to_string());
        self
    }

    /// Appends the set fields of `query`
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, GatewayError> {
        self.query.extend(query_pairs(query)?);
        Ok(self)
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn params(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, GatewayError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Overrides one of the default headers, or adds a new one
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, GatewayError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| GatewayError::InvalidHeader(name.to_string()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| GatewayError::InvalidHeader(name.to_string()))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path as logged and reported in errors, segments are not encoded
    pub fn path(&self) -> String {
        let mut path = self.path.clone();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.query
    }
}

#[derive(Debug, Clone, Default)]
pub struct GatewayOptions {
    /// Retries of transient failures, 0 sends every request exactly once
    pub max_retries: u32,
    pub timeout: Option<Duration>,
}

/// Single entry point to the backend: attaches JSON and bearer headers,
/// maps non success statuses to [`GatewayError::Status`] and 204 to [`Reply::NoContent`]
pub struct Gateway {
    base_url: String,
    client: ClientWithMiddleware,
    /// Only for idempotent methods, a retried POST could create a record twice
    retrying: Option<ClientWithMiddleware>,
    session: Session,
}

impl Gateway {
    pub fn new(base_url: &str, session: Session, options: GatewayOptions) -> anyhow::Result<Self> {
        let mut reqwest_builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .context("Failed to build reqwest client")?;

        let client = ClientBuilder::new(reqwest_client.clone())
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .build();
        let retrying = (options.max_retries > 0).then(|| {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(options.max_retries);
            ClientBuilder::new(reqwest_client)
                .with(TracingMiddleware::default())
                .with(RetryTransientMiddleware::new_with_policy(retry_policy))
                .build()
        });

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retrying,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, request: &ApiRequest) -> Result<Url, GatewayError> {
        let raw = format!("{}{}", self.base_url, request.path);
        let mut url = Url::parse(&raw).map_err(|_| GatewayError::InvalidUrl(raw.clone()))?;
        if !request.segments.is_empty() {
            url.path_segments_mut()
                .map_err(|_| GatewayError::InvalidUrl(raw))?
                .extend(&request.segments);
        }
        Ok(url)
    }

    /// Builds the HTTP request without sending it
    pub fn build(&self, request: &ApiRequest) -> Result<reqwest::Request, GatewayError> {
        let mut builder = self
            .client
            .request(request.method.clone(), self.url(request)?)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .headers(request.headers.clone());

        if !request.headers.contains_key(AUTHORIZATION) {
            if let Some(token) = self.session.token() {
                builder = builder.bearer_auth(token);
            }
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        Ok(builder.build()?)
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<reqwest::Response, GatewayError> {
        let http_request = self.build(&request)?;
        let path = request.path();
        tracing::debug!("{} {}", request.method, path);

        let client = match &self.retrying {
            Some(retrying) if request.method.is_idempotent() => retrying,
            _ => &self.client,
        };
        let response = match client.execute(http_request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("{} {} failed {}", request.method, path, err);
                return Err(err.into());
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = error_message(&response.text().await.unwrap_or_default());
        tracing::error!(
            "{} {} rejected with {} {}",
            request.method,
            path,
            status,
            message.as_deref().unwrap_or_default()
        );
        Err(GatewayError::Status {
            path,
            status,
            message,
        })
    }

    /// Sends the request and decodes the JSON body, a 204 answer is returned as [`Reply::NoContent`]
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Reply<T>, GatewayError> {
        let path = request.path();
        let response = self.dispatch(request).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Reply::NoContent);
        }

        let body = response.bytes().await?;
        match serde_json::from_slice(&body) {
            Ok(value) => Ok(Reply::Json(value)),
            Err(err) => {
                tracing::error!("Failed to decode response of {} {}", path, err);
                Err(err.into())
            }
        }
    }

    /// Like [`Gateway::request`] for calls that always answer with a body
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, GatewayError> {
        let path = request.path();
        self.request(request)
            .await?
            .into_json()
            .ok_or(GatewayError::EmptyBody { path })
    }

    /// For calls answering with a plain text confirmation
    pub async fn fetch_text(&self, request: ApiRequest) -> Result<String, GatewayError> {
        Ok(self.dispatch(request).await?.text().await?)
    }

    /// For calls whose body is irrelevant: true once the backend accepted the request
    pub async fn execute(&self, request: ApiRequest) -> Result<bool, GatewayError> {
        self.dispatch(request).await?;
        Ok(true)
    }
}

/// `message` of a JSON error body, otherwise the raw text
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => match fields.get("message") {
            Some(Value::String(message)) => Some(message.clone()),
            _ => Some(body.to_string()),
        },
        _ => Some(body.to_string()),
    }
}
