//! Connectivity gating and uniform result synthesis.

use log::debug;

use crate::connection::ConnectionFactory;
use crate::connectivity::ConnectivityProbe;
use crate::error::TransportError;
use crate::executor::RequestExecutor;
use crate::http::{status, Request, Response};

/// Receives the single result of a submission. Consumed on delivery, so a
/// sink cannot observe more than one result.
pub type ResultSink = Box<dyn FnOnce(Response) + Send + 'static>;

/// Turns a submission into exactly one delivered result.
///
/// Every path terminates in one result: the completed exchange, 403 for a
/// not-found transport failure, or 504 for missing connectivity and every
/// other failure. There are no retries, and no failure escapes to the
/// caller undelivered.
pub struct ResultDispatcher<P, F = crate::connection::HttpConnectionFactory> {
    probe: P,
    executor: RequestExecutor<F>,
}

impl<P: ConnectivityProbe, F: ConnectionFactory> ResultDispatcher<P, F> {
    pub fn new(probe: P, executor: RequestExecutor<F>) -> Self {
        Self { probe, executor }
    }

    /// Resolve `request` to the result that must be delivered.
    pub fn dispatch(&self, request: &Request) -> Response {
        let debug_logging = self.executor.config().debug_logging;

        if !self.probe.is_available() {
            if debug_logging {
                debug!("no connectivity, synthesizing {}", status::GATEWAY_TIMEOUT);
            }
            return Response::failure(status::GATEWAY_TIMEOUT);
        }

        match self.executor.execute(request) {
            Ok(response) => response,
            Err(err @ TransportError::NotFound) => {
                if debug_logging {
                    debug!("{err}, synthesizing {}", status::FORBIDDEN);
                }
                Response::failure(status::FORBIDDEN)
            }
            Err(err) => {
                if debug_logging {
                    debug!("{err}, synthesizing {}", status::GATEWAY_TIMEOUT);
                }
                Response::failure(status::GATEWAY_TIMEOUT)
            }
        }
    }

    /// Dispatch `request` and deliver the result to `sink`, exactly once.
    pub fn handle(&self, request: &Request, sink: ResultSink) {
        sink(self.dispatch(request));
    }
}
