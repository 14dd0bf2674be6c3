//! Shared helpers for user profile integration tests.

use std::sync::{Arc, Mutex};

use mockito::{Mock, Server, ServerGuard};
use user_profile::domain::UserId;
use user_profile::domain::ports::{DiagnosticSink, UserSourceError};

/// JSON body served for the canonical admin user.
pub const ADA_JSON: &str =
    r#"{"id":42,"name":"Ada","email":"ada@example.com","role":"admin"}"#;

/// Diagnostic sink that keeps every report for later assertions.
#[allow(dead_code, reason = "not every test binary records diagnostics")]
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<(UserId, UserSourceError)>>,
}

#[allow(dead_code, reason = "not every test binary records diagnostics")]
impl RecordingDiagnostics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reports(&self) -> Vec<(UserId, UserSourceError)> {
        self.reports.lock().expect("diagnostics mutex").clone()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn report_fetch_failure(&self, user_id: &UserId, error: &UserSourceError) {
        self.reports
            .lock()
            .expect("diagnostics mutex")
            .push((*user_id, error.clone()));
    }
}

/// Base URL on the loopback interface with nothing listening behind it.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Mock user service kept alive for the duration of a scenario.
#[allow(dead_code, reason = "not every test binary uses the mock service")]
pub struct MockUserService {
    server: Option<ServerGuard>,
    mocks: Vec<Mock>,
    base_url: String,
}

#[allow(dead_code, reason = "not every test binary uses the mock service")]
impl MockUserService {
    /// Start a server and register the mocks returned by `configure`.
    pub fn serving(configure: impl FnOnce(&mut ServerGuard) -> Vec<Mock>) -> Self {
        let mut server = Server::new();
        let mocks = configure(&mut server);
        let base_url = server.url();
        Self {
            server: Some(server),
            mocks,
            base_url,
        }
    }

    /// Service whose base URL refuses connections.
    pub fn unreachable() -> Self {
        Self {
            server: None,
            mocks: Vec::new(),
            base_url: unreachable_base_url(),
        }
    }

    /// Serve `ADA_JSON` for `GET /users/42`.
    pub fn knowing_ada() -> Self {
        Self::serving(|server| {
            vec![
                server
                    .mock("GET", "/users/42")
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(ADA_JSON)
                    .create(),
            ]
        })
    }

    /// Answer `GET /users/{id}` with an empty `status` response.
    pub fn answering(id: UserId, status: u16) -> Self {
        Self::serving(|server| {
            vec![
                server
                    .mock("GET", format!("/users/{id}").as_str())
                    .with_status(usize::from(status))
                    .create(),
            ]
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Whether every registered mock was hit as often as expected.
    pub fn matched(&self) -> bool {
        self.mocks.iter().all(Mock::matched)
    }
}
