//! The background worker: a FIFO queue of submissions, processed one at a
//! time to completion.

use std::sync::mpsc;
use std::thread;

use log::debug;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::connection::{ConnectionFactory, HttpConnectionFactory};
use crate::connectivity::ConnectivityProbe;
use crate::dispatcher::{ResultDispatcher, ResultSink};
use crate::executor::RequestExecutor;
use crate::http::{Request, Response};

struct Submission {
    id: Uuid,
    request: Request,
    sink: ResultSink,
}

/// Handle to a spawned courier worker.
///
/// Submissions are fire-and-forget: [`submit`](Courier::submit) enqueues and
/// returns immediately; the result arrives later through the submission's
/// sink, invoked on the worker thread. One worker processes submissions
/// strictly in submission order, one at a time — a burst of submissions
/// queues behind the serialized worker. There is no mid-flight cancellation;
/// once submitted, a request runs to completion, timeout, or error.
///
/// Dropping the handle (or calling [`shutdown`](Courier::shutdown)) closes
/// the queue; the worker drains what was already submitted and exits.
pub struct Courier {
    queue: Option<mpsc::Sender<Submission>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Courier {
    /// Spawn a worker over the real network transport.
    pub fn spawn(config: ServiceConfig, probe: impl ConnectivityProbe) -> Self {
        let factory = HttpConnectionFactory::new(&config);
        Self::with_factory(factory, config, probe)
    }

    /// Spawn a worker over a caller-supplied transport. Tests use this to
    /// substitute fault-injecting factories.
    pub fn with_factory<F: ConnectionFactory>(
        factory: F,
        config: ServiceConfig,
        probe: impl ConnectivityProbe,
    ) -> Self {
        let debug_logging = config.debug_logging;
        let dispatcher = ResultDispatcher::new(probe, RequestExecutor::with_factory(factory, config));

        let (queue, submissions) = mpsc::channel::<Submission>();
        let worker = thread::spawn(move || {
            for submission in submissions {
                if debug_logging {
                    debug!("processing submission {}", submission.id);
                }
                dispatcher.handle(&submission.request, submission.sink);
            }
        });

        Self {
            queue: Some(queue),
            worker: Some(worker),
        }
    }

    /// Enqueue one submission. Never blocks.
    pub fn submit(&self, request: Request, sink: impl FnOnce(Response) + Send + 'static) {
        let submission = Submission {
            id: Uuid::new_v4(),
            request,
            sink: Box::new(sink),
        };
        if let Some(queue) = &self.queue {
            // The worker outlives this handle, so the queue is open for as
            // long as submissions can be made.
            let _ = queue.send(submission);
        }
    }

    /// Close the queue and wait for the worker to drain outstanding
    /// submissions. Every already-accepted submission still gets its one
    /// delivery before this returns.
    pub fn shutdown(mut self) {
        self.close_and_join();
    }

    fn close_and_join(&mut self) {
        drop(self.queue.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for Courier {
    fn drop(&mut self) {
        self.close_and_join();
    }
}
