//! Minimal HTTP/1.1 server serving one canned response, for integration tests.
//!
//! Serves the same response to every request; optionally stalls before
//! answering to exercise the transfer deadline.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct ApiServerOptions {
    /// Status line tail, e.g. "200 OK" or "404 Not Found".
    pub status: &'static str,
    pub content_type: &'static str,
    /// Sleep this long after reading the request before responding.
    pub delay: Option<Duration>,
}

impl Default for ApiServerOptions {
    fn default() -> Self {
        Self {
            status: "200 OK",
            content_type: "application/json",
            delay: None,
        }
    }
}

/// Starts a server in a background thread answering every request with
/// `body` as JSON. Returns the origin (e.g. "http://127.0.0.1:12345").
/// The server runs until the process exits.
pub fn start_json(body: String) -> String {
    start_with_options(body, ApiServerOptions::default())
}

/// Like `start_json` but allows customizing status and stall behavior.
pub fn start_with_options(body: String, opts: ApiServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, body: &str, opts: ApiServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(10)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(10)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    if let Some(delay) = opts.delay {
        thread::sleep(delay);
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        opts.content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}
