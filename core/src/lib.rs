//! Background HTTP courier: single-worker execution of GET/POST submissions
//! with one-shot result delivery.
//!
//! # Overview
//! A submission names a method, a URL and an optional parameter. A dedicated
//! worker thread processes submissions strictly in order: it checks
//! connectivity, performs the exchange with bounded connect/read timeouts,
//! buffers the whole response body, and delivers exactly one result to the
//! submission's sink — the real server status with its body, or a
//! synthesized failure code (403 for not-found transport failures, 504 for
//! missing connectivity and everything else).
//!
//! # Design
//! - `Courier` owns the worker and the FIFO queue; `submit` is
//!   fire-and-forget and never blocks.
//! - `ResultDispatcher` guarantees exactly one delivery per submission; no
//!   transport failure escapes to the caller undelivered.
//! - `RequestExecutor` is generic over `ConnectionFactory`, so tests inject
//!   fault-injecting transports without touching the network.
//! - Non-2xx server statuses are results, not errors; they pass through
//!   verbatim with their body.
//! - Settings travel in an explicit `ServiceConfig`; the response cache is
//!   the only process-wide piece and its installation is best-effort.
//!
//! ```no_run
//! use courier_core::{cache, AlwaysOnline, CacheConfig, Courier, Request, ServiceConfig};
//!
//! cache::install(CacheConfig::new("/tmp/http-cache"));
//! let courier = Courier::spawn(ServiceConfig::default(), AlwaysOnline);
//! courier.submit(
//!     Request::get("http://example.test/items", Some("?page=2".to_string())),
//!     |result| println!("{} ({} bytes)", result.status, result.body.map_or(0, |b| b.len())),
//! );
//! ```

pub mod cache;
pub mod config;
pub mod connection;
pub mod connectivity;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod http;
pub mod service;

pub use cache::CacheConfig;
pub use config::ServiceConfig;
pub use connection::{Connection, ConnectionFactory, HttpConnectionFactory};
pub use connectivity::{AlwaysOnline, ConnectivityProbe};
pub use dispatcher::{ResultDispatcher, ResultSink};
pub use error::TransportError;
pub use executor::RequestExecutor;
pub use http::{Method, Request, Response};
pub use service::Courier;
