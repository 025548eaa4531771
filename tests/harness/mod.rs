//! Test harness for quboo integration tests.
//!
//! Provides an isolated command builder and a one-shot loopback HTTP server
//! that records the request it receives and answers with a canned response.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::process::Output;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment for one test: temp working directory, scrubbed
/// environment, git disabled so identity resolution is deterministic.
pub struct TestEnv {
    pub dir: TempDir,
}

const SCRUBBED_VARS: &[&str] = &[
    "QUBOO_ACCESS_KEY",
    "QUBOO_SECRET_KEY",
    "QUBOO_PLAYER_USERNAME",
    "GITLAB_USER_LOGIN",
    "CIRCLE_USERNAME",
    "QUBOO_UNIQUE_ID",
    "QUBOO_CONFIG_ALWAYS_USE_GIT",
    "QUBOO_API_URL",
    "QUBOO_LOG",
];

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// A quboo command with a clean slate: no inherited Quboo or CI
    /// variables, no reachable git repository, colors off.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("quboo").expect("failed to find quboo binary");
        cmd.current_dir(self.dir.path());
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        // Point git at a directory that does not exist so history queries
        // fail cleanly instead of picking up the host checkout.
        cmd.env("GIT_DIR", self.dir.path().join(".no-git"));
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Command with valid credentials and an explicit player already set.
    pub fn cmd_with_identity(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("QUBOO_ACCESS_KEY", "test-access");
        cmd.env("QUBOO_SECRET_KEY", "test-secret");
        cmd.env("QUBOO_PLAYER_USERNAME", "alice");
        cmd.env("QUBOO_UNIQUE_ID", "abc1234");
        cmd
    }
}

/// One HTTP request, as seen by the mock server.
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body was not valid JSON")
    }
}

/// Loopback HTTP server that serves exactly one request with a canned
/// status/body, then shuts down.
pub struct MockServer {
    pub url: String,
    rx: mpsc::Receiver<RecordedRequest>,
}

impl MockServer {
    pub fn respond_with(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind loopback");
        let addr = listener.local_addr().expect("no local addr");
        let (tx, rx) = mpsc::channel();
        let body = body.to_string();

        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                if let Some(request) = serve_one(stream, status, &body) {
                    let _ = tx.send(request);
                }
            }
        });

        Self {
            url: format!("http://{addr}"),
            rx,
        }
    }

    /// The request the server saw, or a panic if none arrived.
    pub fn received(&self) -> RecordedRequest {
        self.rx
            .recv_timeout(Duration::from_secs(5))
            .expect("server received no request")
    }

    /// Assert the server saw no traffic at all.
    pub fn assert_no_requests(&self) {
        assert!(
            self.rx.recv_timeout(Duration::from_millis(200)).is_err(),
            "expected no HTTP requests, but the server received one"
        );
    }
}

fn serve_one(stream: std::net::TcpStream, status: u16, body: &str) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream.try_clone().ok()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut body_bytes = vec![0u8; content_length];
    reader.read_exact(&mut body_bytes).ok()?;

    let reason = match status {
        200 => "OK",
        403 => "Forbidden",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).ok()?;
    let _ = stream.flush();

    Some(RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body_bytes).into_owned(),
    })
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, got {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        stdout(output),
        stderr(output)
    );
}

pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure, got success\nstdout: {}\nstderr: {}",
        stdout(output),
        stderr(output)
    );
}
