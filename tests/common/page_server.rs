//! Minimal HTTP/1.1 server for the end-to-end tests.
//!
//! Serves a fixed table of paths (status + body) and counts every request it
//! receives, so tests can assert that nothing hit the network.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: Vec::new(),
        }
    }
}

pub struct PageServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:40123"
    pub base: String,
    hits: Arc<AtomicUsize>,
}

impl PageServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. Unknown paths answer 404.
/// The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();

    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let hits = Arc::new(AtomicUsize::new(0));

    let server_hits = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });

    PageServer {
        base: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 4096];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    hits.fetch_add(1, Ordering::SeqCst);

    let request = String::from_utf8_lossy(&request);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let route = routes.get(path).cloned().unwrap_or_else(|| Route::status(404));
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.content_type,
        route.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
