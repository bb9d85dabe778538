//! Transport connection construction.
//!
//! # Design
//! The two traits here are the seam between the executor and the real
//! network: `ConnectionFactory` opens a configured exchange, `Connection`
//! exposes its status and buffered body. Tests substitute fault-injecting
//! factories; production uses [`HttpConnectionFactory`], a thin layer over
//! a shared ureq agent configured once from [`ServiceConfig`].
//!
//! Releasing a connection is tied to ownership: dropping a `Connection`
//! releases it, so every exit path of the executor — including mid-read
//! failures — releases the exchange without explicit cleanup code.

use log::debug;

use crate::config::ServiceConfig;
use crate::error::TransportError;

/// Content type applied to every request, GET and POST alike.
const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// One open exchange. The status is already known; the body has not been
/// read yet. Dropping the value releases the connection.
pub trait Connection {
    /// The numeric status the server responded with.
    fn status(&self) -> u16;

    /// Buffer the entire response body. Bodies are never streamed and have
    /// no size cap.
    fn read_body(&mut self) -> Result<Vec<u8>, TransportError>;
}

/// Opens configured transport connections.
pub trait ConnectionFactory: Send + 'static {
    type Conn: Connection;

    /// Open `url` for a GET exchange.
    fn open_get(&self, url: &str) -> Result<Self::Conn, TransportError>;

    /// Open `url` for a POST exchange, writing `body` as UTF-8 text before
    /// the response is read.
    fn open_post(&self, url: &str, body: &str) -> Result<Self::Conn, TransportError>;
}

/// Production factory backed by a shared ureq agent.
///
/// The agent is configured once: connect and read timeouts, automatic
/// redirect following, and plain-text content type on every request.
/// Non-2xx statuses are returned as data, not errors; the executor passes
/// them through with their body.
pub struct HttpConnectionFactory {
    agent: ureq::Agent,
    debug_logging: bool,
}

impl HttpConnectionFactory {
    pub fn new(config: &ServiceConfig) -> Self {
        let mut builder = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(config.connect_timeout))
            .timeout_recv_response(Some(config.read_timeout))
            .timeout_recv_body(Some(config.read_timeout))
            .max_redirects(10);
        if !config.reuse_connections {
            builder = builder.max_idle_connections(0);
        }
        Self {
            agent: builder.build().new_agent(),
            debug_logging: config.debug_logging,
        }
    }
}

impl ConnectionFactory for HttpConnectionFactory {
    type Conn = HttpConnection;

    fn open_get(&self, url: &str) -> Result<HttpConnection, TransportError> {
        let response = self
            .agent
            .get(url)
            .header("Content-Type", CONTENT_TYPE)
            .call()?;
        Ok(HttpConnection {
            response,
            debug_logging: self.debug_logging,
        })
    }

    fn open_post(&self, url: &str, body: &str) -> Result<HttpConnection, TransportError> {
        // Streamed from a reader so the transport applies its own chunking
        // rather than a pre-computed content length.
        let mut reader = body.as_bytes();
        let response = self
            .agent
            .post(url)
            .content_type(CONTENT_TYPE)
            .send(ureq::SendBody::from_reader(&mut reader))?;
        Ok(HttpConnection {
            response,
            debug_logging: self.debug_logging,
        })
    }
}

/// An exchange opened by [`HttpConnectionFactory`].
pub struct HttpConnection {
    response: ureq::http::Response<ureq::Body>,
    debug_logging: bool,
}

impl Connection for HttpConnection {
    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    fn read_body(&mut self) -> Result<Vec<u8>, TransportError> {
        self.response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(TransportError::from)
    }
}

impl Drop for HttpConnection {
    fn drop(&mut self) {
        if self.debug_logging {
            debug!("releasing connection");
        }
    }
}
