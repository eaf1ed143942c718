//! Shared test support: a scripted transport and model builders.
#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, StatusCode};
use notespace_core::model::{MemberRole, Workspace, WorkspaceKind};
use notespace_core::Session;
use notespace_http::{ApiRequest, ClientConfig, RawResponse, Transport};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// In-memory transport: responses are queued per `(method, path)` key and
/// every request is recorded for assertions.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<HashMap<(Method, String), VecDeque<RawResponse>>>,
    requests: Mutex<Vec<(Method, String)>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(ScriptedTransport::default())
    }

    pub fn script(&self, method: Method, path: &str, status: u16, body: Value) {
        self.responses
            .lock()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(RawResponse {
                status: StatusCode::from_u16(status).expect("valid status"),
                body: Bytes::from(body.to_string()),
            });
    }

    pub fn script_success(&self, method: Method, path: &str, data: Value) {
        self.script(method, path, 200, json!({"status": "success", "data": data}));
    }

    pub fn script_error(&self, method: Method, path: &str, status: u16, code: &str) {
        self.script(
            method,
            path,
            status,
            json!({"status": "error", "code": code, "message": code}),
        );
    }

    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> notespace_http::Result<RawResponse> {
        let key = (request.method.clone(), request.path.clone());
        self.requests.lock().push(key.clone());
        let response = self
            .responses
            .lock()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        match response {
            Some(response) => Ok(response),
            None => panic!("no scripted response for {} {}", key.0, key.1),
        }
    }
}

pub fn session_over(transport: Arc<ScriptedTransport>) -> Session {
    Session::with_transport(transport, ClientConfig::default())
}

pub fn workspace(id: i64, name: &str) -> Workspace {
    Workspace {
        id,
        name: name.to_string(),
        description: None,
        kind: WorkspaceKind::Personal,
        my_role: MemberRole::Owner,
        post_count: 0,
        folder_count: 0,
        created_at: None,
        updated_at: None,
    }
}

pub fn workspace_json(id: i64, name: &str) -> Value {
    json!({
        "workspaceId": id,
        "name": name,
        "workspaceType": "PERSONAL",
        "myRole": "OWNER",
        "postCount": 0,
        "folderCount": 0
    })
}
