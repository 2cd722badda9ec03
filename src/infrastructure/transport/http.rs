//! HTTP Form Transport
//!
//! Posts the contact fields form-encoded to a hosted form endpoint and asks
//! for a JSON answer. Any 2xx status counts as accepted.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::domain::entities::ContactFields;
use crate::domain::ports::{SubmissionReceipt, SubmissionTransport, TransportError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpFormTransport {
    endpoint: String,
    client: Client,
}

impl HttpFormTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Network {
                message: e.to_string(),
            })?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

impl SubmissionTransport for HttpFormTransport {
    fn submit(&self, fields: &ContactFields) -> Result<SubmissionReceipt, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(&fields.form_pairs()[..])
            .send()
            .map_err(|e| TransportError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(SubmissionReceipt {
                status: status.as_u16(),
            })
        } else {
            Err(TransportError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer a single request with `status`, returning the raw request text.
    fn serve_once(status: &'static str) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/f/test", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut request = String::new();
            let mut content_length = 0usize;

            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
                request.push_str(&line);
                if line == "\r\n" || line.is_empty() {
                    break;
                }
            }

            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();
            request.push_str(&String::from_utf8(body).unwrap());

            let mut stream = reader.into_inner();
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}",
                status
            )
            .unwrap();
            stream.flush().unwrap();
            request
        });

        (url, handle)
    }

    fn fields() -> ContactFields {
        ContactFields::new("Test User", "test@example.com", "Hello there")
    }

    #[test]
    fn success_status_is_accepted() {
        let (url, server) = serve_once("200 OK");
        let transport = HttpFormTransport::new(url, DEFAULT_TIMEOUT).unwrap();

        let receipt = transport.submit(&fields()).unwrap();
        assert_eq!(receipt.status, 200);

        let request = server.join().unwrap().to_ascii_lowercase();
        assert!(request.starts_with("post /f/test"));
        assert!(request.contains("accept: application/json"));
        assert!(request.contains("email=test%40example.com"));
        assert!(request.contains("_gotcha="));
    }

    #[test]
    fn error_status_is_rejected() {
        let (url, server) = serve_once("422 Unprocessable Entity");
        let transport = HttpFormTransport::new(url, DEFAULT_TIMEOUT).unwrap();

        let err = transport.submit(&fields()).unwrap_err();
        assert_eq!(err, TransportError::Rejected { status: 422 });
        server.join().unwrap();
    }

    #[test]
    fn unreachable_endpoint_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/f/test", listener.local_addr().unwrap());
        drop(listener);

        let transport = HttpFormTransport::new(url, Duration::from_secs(2)).unwrap();
        let err = transport.submit(&fields()).unwrap_err();
        assert!(matches!(err, TransportError::Network { .. }));
    }
}
