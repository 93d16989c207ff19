//! The push event load driver.
//!
//! ## Metrics
//!
//! `requests_sent`: Total number of requests sent
//! `request_ok`: Requests that received a response, labelled by status code
//! `request_failure`: Requests that failed in transport
//! `bytes_received`: Total response body bytes read and discarded
//!

use std::io::Write;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::Uri;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use metrics::counter;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::{
    cadence,
    config::Config,
    event::{self, PushEvent},
};

#[derive(thiserror::Error, Debug)]
/// Errors produced by [`Driver`].
pub enum Error {
    /// Wrapper around [`std::io::Error`], raised by the progress writer.
    #[error("Io error: {0}")]
    Io(#[from] ::std::io::Error),
    /// See [`crate::event::Error`] for details.
    #[error(transparent)]
    Event(#[from] event::Error),
}

/// Outcome of a completed [`Driver`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of iterations run, equal to the number of requests issued
    pub iterations: u64,
    /// Requests that received a response of any status
    pub succeeded: u64,
    /// Requests that failed before a response arrived
    pub failed: u64,
}

/// The push event driver.
///
/// This driver sends one GET per iteration to the configured target, strictly
/// one after another. Transport failures are counted and otherwise ignored.
#[derive(Debug)]
pub struct Driver {
    target: Uri,
    iterations: u64,
    rng: StdRng,
}

impl Driver {
    /// Create a new [`Driver`] instance
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            target: config.target,
            iterations: config.iterations,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Run [`Driver`] to completion, writing progress lines to `out`.
    ///
    /// The final line, `Processed: {n} [Done]`, carries no trailing newline.
    ///
    /// # Errors
    ///
    /// Function will return an error if writing to `out` fails or a request
    /// URI cannot be built from the target. Failed requests are not errors.
    pub async fn spin<W>(mut self, out: &mut W) -> Result<Summary, Error>
    where
        W: Write,
    {
        let client: Client<HttpConnector, Empty<Bytes>> = Client::builder(TokioExecutor::new())
            .pool_max_idle_per_host(1)
            .retry_canceled_requests(false)
            .build_http();

        info!(
            "pushing {iterations} events to {target}",
            iterations = self.iterations,
            target = self.target
        );

        let mut summary = Summary::default();
        let mut index: u64 = 0;
        while index < self.iterations {
            let event: PushEvent = self.rng.random();
            let uri = event.uri(&self.target)?;

            counter!("requests_sent").increment(1);
            match client.get(uri).await {
                Ok(response) => {
                    let status = response.status();
                    counter!("request_ok", "status_code" => status.as_u16().to_string())
                        .increment(1);
                    match response.into_body().collect().await {
                        Ok(body) => {
                            counter!("bytes_received").increment(body.to_bytes().len() as u64);
                        }
                        Err(err) => debug!("Failed to read response body: {err}"),
                    }
                    summary.succeeded += 1;
                }
                Err(err) => {
                    debug!(
                        "Failed to send HTTP request to {target}: {err}",
                        target = self.target
                    );
                    counter!("request_failure").increment(1);
                    summary.failed += 1;
                }
            }

            if cadence::reports(index) {
                writeln!(out, "Processed: {index}")?;
            }
            index += 1;
        }

        summary.iterations = index;
        write!(out, "Processed: {index} [Done]")?;
        out.flush()?;
        Ok(summary)
    }
}
