//! Synthetic push events.
//!
//! A [`PushEvent`] is one data point headed for the ingestion service: a
//! graph title, an object within that graph, a value and an optional comment.
//! Events are drawn fresh for every request and never reused.

use http::Uri;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::Serialize;

/// Path on the ingestion service that accepts push events.
pub const PUSH_PATH: &str = "/push";

const GRAPH_PREFIX: &str = "test_";
const MAX_GRAPH: u8 = 10;
const MAX_OBJECT_ID: u16 = 1_000;
const MAX_VALUE: u8 = 100;

#[derive(thiserror::Error, Debug)]
/// Errors produced when turning a [`PushEvent`] into a request URI.
pub enum Error {
    /// Wrapper around [`serde_qs::Error`].
    #[error("Failed to serialize push event query: {0}")]
    Query(#[from] serde_qs::Error),
    /// Wrapper around [`http::Error`].
    #[error("Failed to build push URI: {0}")]
    Http(#[from] http::Error),
    /// The server URI has no host to send to.
    #[error("Server URI {0} has no authority")]
    NoAuthority(Uri),
}

/// A single synthetic data point.
///
/// Field order here is the order of the query parameters on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushEvent {
    /// Series the point belongs to, `test_0` through `test_10`.
    #[serde(rename = "title")]
    pub graph: String,
    /// Entity within the graph, in `[1, 1000]`.
    pub object_id: u16,
    /// Value of the point, in `[1, 100]`.
    pub value: u8,
    /// Free text, empty half the time.
    pub comment: String,
}

impl PushEvent {
    /// The comment text an event with these fields carries when it has one.
    #[must_use]
    pub fn comment_for(graph: &str, object_id: u16, value: u8) -> String {
        format!("Comment for {graph} and object {object_id} with value {value}")
    }

    /// Serialize this event as a percent-encoded query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the query serializer rejects the event.
    pub fn query(&self) -> Result<String, Error> {
        Ok(serde_qs::to_string(self)?)
    }

    /// Build the URI that pushes this event to `server`.
    ///
    /// Any path on `server` is kept as a prefix of [`PUSH_PATH`].
    ///
    /// # Errors
    ///
    /// Returns an error if `server` has no authority or the resulting URI is
    /// not valid.
    pub fn uri(&self, server: &Uri) -> Result<Uri, Error> {
        let authority = server
            .authority()
            .ok_or_else(|| Error::NoAuthority(server.clone()))?;
        let prefix = server.path().trim_end_matches('/');
        let query = self.query()?;

        let uri = Uri::builder()
            .scheme(server.scheme_str().unwrap_or("http"))
            .authority(authority.as_str())
            .path_and_query(format!("{prefix}{PUSH_PATH}?{query}"))
            .build()?;
        Ok(uri)
    }
}

impl Distribution<PushEvent> for StandardUniform {
    fn sample<R>(&self, rng: &mut R) -> PushEvent
    where
        R: Rng + ?Sized,
    {
        let graph = format!("{GRAPH_PREFIX}{}", rng.random_range(0..=MAX_GRAPH));
        let object_id = rng.random_range(1..=MAX_OBJECT_ID);
        let value = rng.random_range(1..=MAX_VALUE);
        let comment = if rng.random() {
            PushEvent::comment_for(&graph, object_id, value)
        } else {
            String::new()
        };

        PushEvent {
            graph,
            object_id,
            value,
            comment,
        }
    }
}
