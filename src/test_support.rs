//! Loopback HTTP server answering exactly one request.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crate::api::client::ApiClient;

pub struct MockServer {
    pub base_url: String,
    requests: Receiver<String>,
}

impl MockServer {
    pub fn respond_once(status_line: &'static str, body: impl Into<Vec<u8>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        let body = body.into();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            let head = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).expect("write head");
            stream.write_all(&body).expect("write body");
            stream.flush().expect("flush");
            let _ = tx.send(request);
        });

        MockServer {
            base_url: format!("http://{addr}"),
            requests: rx,
        }
    }

    /// Raw text of the request the server received.
    pub fn received(&self) -> String {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("mock server saw no request")
    }

    pub fn client(&self) -> ApiClient {
        client_for(&self.base_url)
    }
}

/// A client that bypasses any proxy configured in the environment.
pub fn client_for(base_url: &str) -> ApiClient {
    let http = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("build test client");
    ApiClient::from_parts(base_url.to_string(), http)
}

/// Base URL on which nothing is listening.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{addr}")
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(head_end) = find(&buf, b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
        let body_len = buf.len() - (head_end + 4);
        if let Some(expected) = content_length(&head) {
            if body_len >= expected {
                break;
            }
        } else if head.contains("transfer-encoding: chunked") {
            if buf.ends_with(b"0\r\n\r\n") {
                break;
            }
        } else {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn content_length(head: &str) -> Option<usize> {
    head.lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
