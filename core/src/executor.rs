//! Performs one GET or POST exchange and buffers the outcome.

use log::debug;

use crate::config::ServiceConfig;
use crate::connection::{Connection, ConnectionFactory, HttpConnectionFactory};
use crate::error::TransportError;
use crate::http::{Method, Request, Response};

/// Executes submissions against a connection factory.
///
/// Generic over [`ConnectionFactory`] so tests can substitute
/// fault-injecting transports; production uses the ureq-backed factory.
pub struct RequestExecutor<F = HttpConnectionFactory> {
    factory: F,
    config: ServiceConfig,
}

impl RequestExecutor<HttpConnectionFactory> {
    /// Executor over the real network transport.
    pub fn new(config: ServiceConfig) -> Self {
        let factory = HttpConnectionFactory::new(&config);
        Self::with_factory(factory, config)
    }
}

impl<F: ConnectionFactory> RequestExecutor<F> {
    pub fn with_factory(factory: F, config: ServiceConfig) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Perform the exchange described by `request`.
    ///
    /// An unrecognized method performs no exchange and yields the empty
    /// result — a deliberate pass-through default, not an error. The
    /// connection is released on every path, including mid-read failures.
    pub fn execute(&self, request: &Request) -> Result<Response, TransportError> {
        match request.method {
            Method::Get => self.get(request),
            Method::Post => self.post(request),
            Method::Unrecognized(code) => {
                if self.config.debug_logging {
                    debug!("unrecognized method code {code}, returning empty result");
                }
                Ok(Response::empty())
            }
        }
    }

    fn get(&self, request: &Request) -> Result<Response, TransportError> {
        let url = request.effective_url();
        if self.config.debug_logging {
            debug!("GET {url}");
        }
        let conn = self.factory.open_get(&url)?;
        self.finish(conn)
    }

    fn post(&self, request: &Request) -> Result<Response, TransportError> {
        // The parameter is the body; it never touches the URL.
        if self.config.debug_logging {
            debug!("POST {}", request.base_url);
        }
        let body = request.parameter.as_deref().unwrap_or("");
        let conn = self.factory.open_post(&request.base_url, body)?;
        self.finish(conn)
    }

    fn finish(&self, mut conn: F::Conn) -> Result<Response, TransportError> {
        let body = conn.read_body()?;
        let status = conn.status();
        if self.config.debug_logging {
            debug!("response code {status}");
        }
        Ok(Response::completed(status, body))
    }
}
