// src/net.rs

// HTTP GET via blocking reqwest. The whole pipeline is sequential,
// one request in flight at a time.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;
use crate::log::Log;

/// Fetch seam. Production uses [`HttpFetcher`]; tests substitute
/// fixture-backed implementations.
///
/// Contract: `None` means "stop or skip", never zero-length success.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Option<String>;
}

pub struct HttpFetcher {
    client: Client,
    log: Box<dyn Log>,
}

impl HttpFetcher {
    pub fn new(log: Box<dyn Log>) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, log })
    }
}

impl Fetch for HttpFetcher {
    /// A response is usable only if the status is 200 and the content
    /// type says html. Transport errors are logged and yield `None`.
    fn fetch(&self, url: &str) -> Option<String> {
        let resp = match self.client.get(url).send() {
            Ok(r) => r,
            Err(e) => {
                self.log.error(&format!("error during request to {url}: {e}"));
                return None;
            }
        };

        if resp.status().as_u16() != 200 || !is_html(&resp) {
            self.log.error(&format!(
                "unusable response from {url}: status {}",
                resp.status()
            ));
            return None;
        }

        match resp.text() {
            Ok(body) => Some(body),
            Err(e) => {
                self.log.error(&format!("error reading body from {url}: {e}"));
                None
            }
        }
    }
}

fn is_html(resp: &reqwest::blocking::Response) -> bool {
    resp.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().contains("html"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;
    use crate::log::NullLog;

    /// One-shot HTTP server on an ephemeral port; returns the URL.
    fn serve_once(
        status_line: &'static str,
        content_type: &'static str,
        body: &'static str,
    ) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf); // drain the request
                let resp = format!(
                    "HTTP/1.1 {status_line}\r\n\
                     Content-Type: {content_type}\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(resp.as_bytes());
            }
        });
        format!("http://{addr}/")
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Box::new(NullLog)).unwrap()
    }

    #[test]
    fn ok_html_response_returns_body() {
        let url = serve_once("200 OK", "text/html; charset=utf-8", "<html>hi</html>");
        assert_eq!(fetcher().fetch(&url).as_deref(), Some("<html>hi</html>"));
    }

    #[test]
    fn non_200_status_is_absent() {
        let url = serve_once("404 Not Found", "text/html", "gone");
        assert!(fetcher().fetch(&url).is_none());
    }

    #[test]
    fn non_html_content_type_is_absent() {
        let url = serve_once("200 OK", "text/plain", "just text");
        assert!(fetcher().fetch(&url).is_none());
    }

    #[test]
    fn content_type_match_is_case_insensitive() {
        let url = serve_once("200 OK", "TEXT/HTML", "<p>ok</p>");
        assert!(fetcher().fetch(&url).is_some());
    }

    #[test]
    fn missing_content_type_is_absent() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
                );
            }
        });
        assert!(fetcher().fetch(&format!("http://{addr}/")).is_none());
    }

    #[test]
    fn connection_error_is_absent_not_a_panic() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // nothing listening on that port now
        assert!(fetcher().fetch(&format!("http://{addr}/")).is_none());
    }
}
