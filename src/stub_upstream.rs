//! Local HTTP upstream for client tests: answers canned bodies per path and
//! records every request it receives.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Router,
};

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    routes: Arc<Vec<(String, StatusCode, String)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct StubUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubUpstream {
    /// Serves `(path, status, body)` routes on an ephemeral local port.
    pub async fn start(routes: &[(&str, StatusCode, &str)]) -> StubUpstream {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            routes: Arc::new(
                routes
                    .iter()
                    .map(|(path, status, body)| (path.to_string(), *status, body.to_string()))
                    .collect(),
            ),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubUpstream {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Config with every upstream pointed here.
    pub fn config(&self, secrets: &[(&str, &str)]) -> Config {
        Config::from_lookup(|key| match key {
            "SPOTIFY_ACCOUNTS_URL" | "SPOTIFY_API_URL" | "HF_INFERENCE_URL" => {
                Some(self.base_url.clone())
            }
            _ => secrets
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string()),
        })
        .unwrap()
    }
}

async fn respond(State(state): State<StubState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let header_value = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let path = parts.uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: parts.method.to_string(),
        path: path.clone(),
        query: parts.uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    match state.routes.iter().find(|(route, _, _)| *route == path) {
        Some((_, status, body)) => (
            *status,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
