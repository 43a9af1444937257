//! In-process stand-in for the Cartel backend. Records every request and
//! answers with a canned response chosen by path.

use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use parking_lot::Mutex;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Body parsed as JSON, Null when empty
    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            return Value::Null;
        }
        serde_json::from_slice(&self.body).expect("Request body is not JSON")
    }
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
    status: u16,
    content_type: Option<&'static str>,
    body: String,
    delay: Option<Duration>,
}

impl CannedResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("application/json"),
            body: body.into(),
            delay: None,
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain"),
            body: body.into(),
            delay: None,
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            content_type: None,
            body: String::new(),
            delay: None,
        }
    }

    /// Answers only after `delay`
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

struct BackendState {
    routes: Vec<(String, CannedResponse)>,
    fallback: CannedResponse,
    requests: Vec<RecordedRequest>,
}

async fn record(
    request: HttpRequest,
    body: web::Bytes,
    state: web::Data<Mutex<BackendState>>,
) -> HttpResponse {
    let query = web::Query::<Vec<(String, String)>>::from_query(request.query_string())
        .map(|query| query.into_inner())
        .unwrap_or_default();
    let headers = request
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    let canned = {
        let mut state = state.lock();
        state.requests.push(RecordedRequest {
            method: request.method().to_string(),
            path: request.path().to_string(),
            query,
            headers,
            body: body.to_vec(),
        });
        state
            .routes
            .iter()
            .find(|(path, _)| path == request.path())
            .map(|(_, canned)| canned.clone())
            .unwrap_or_else(|| state.fallback.clone())
    };
    if let Some(delay) = canned.delay {
        actix_web::rt::time::sleep(delay).await;
    }

    let mut response = HttpResponse::build(
        StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    );
    if let Some(content_type) = canned.content_type {
        response.content_type(content_type);
    }
    response.body(canned.body)
}

pub struct MockBackend {
    url: String,
    state: web::Data<Mutex<BackendState>>,
    handle: ServerHandle,
}

impl MockBackend {
    /// Binds an ephemeral port. Requests whose path is not listed in `routes` get `fallback`
    pub async fn start(routes: Vec<(&str, CannedResponse)>, fallback: CannedResponse) -> Self {
        let state = web::Data::new(Mutex::new(BackendState {
            routes: routes
                .into_iter()
                .map(|(path, canned)| (path.to_string(), canned))
                .collect(),
            fallback,
            requests: vec![],
        }));

        let data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(record))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind mock backend");
        let address = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            url: format!("http://{address}"),
            state,
            handle,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.state
            .lock()
            .requests
            .last()
            .cloned()
            .expect("Mock backend received no request")
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
