//! In-process stand-in for the shelter API, used by the listing tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Json;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Canned answers for the two listing endpoints.
#[derive(Debug, Clone)]
pub(crate) struct MockApi {
    pub dogs: (StatusCode, Value),
    pub breeds: (StatusCode, Value),
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            dogs: (
                StatusCode::OK,
                json!([
                    {"id": 1, "name": "Buddy", "breed": "Beagle", "status": "AVAILABLE"},
                    {"id": 2, "name": "Luna", "breed": "Boxer", "status": "PENDING"},
                    {"id": 3, "name": "Max", "breed": "Beagle", "status": "ADOPTED"},
                ]),
            ),
            breeds: (
                StatusCode::OK,
                json!([
                    {"id": 4, "name": "Beagle"},
                    {"id": 7, "name": "Boxer"},
                ]),
            ),
        }
    }
}

struct MockState {
    api: MockApi,
    requests: Mutex<Vec<String>>,
}

pub(crate) struct RunningMock {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl RunningMock {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Path and query of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

pub(crate) async fn spawn_mock(api: MockApi) -> RunningMock {
    let state = Arc::new(MockState {
        api,
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new().fallback(handle).with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    RunningMock { addr, state }
}

/// Base URL of a port nobody listens on.
pub(crate) async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn handle(State(state): State<Arc<MockState>>, uri: Uri) -> (StatusCode, Json<Value>) {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.requests.lock().unwrap().push(target);

    let (status, body) = match uri.path() {
        "/api/dogs" => state.api.dogs.clone(),
        "/api/breeds" => state.api.breeds.clone(),
        path => match path
            .strip_prefix("/api/dogs/")
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| detail(&state.api, id))
        {
            Some(dog) => (StatusCode::OK, dog),
            None => (StatusCode::NOT_FOUND, json!({"error": "Dog not found"})),
        },
    };
    (status, Json(body))
}

fn detail(api: &MockApi, id: i64) -> Option<Value> {
    let dog = api
        .dogs
        .1
        .as_array()?
        .iter()
        .find(|d| d["id"].as_i64() == Some(id))?;
    Some(json!({
        "id": id,
        "name": dog["name"],
        "breed": dog["breed"],
        "age": 4,
        "gender": "Female",
        "description": "Loves long walks.",
        "status": dog["status"],
    }))
}
