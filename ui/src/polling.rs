//! Debounced polling state shared by the read hooks.
//!
//! A [`Poller`] decides when a hook may issue its next request and stores
//! what came back. It does no I/O and owns no timer; the hook drives it
//! from render and tick callbacks:
//!
//! ```text
//!   Idle --(not fetching && now - last_request > debounce)--> Fetching
//!   Fetching --(finish Ok)--> Idle, data replaced, error cleared
//!   Fetching --(finish Err)--> Idle, data kept, error set
//!   Fetching --(cancel)--> Idle, in-flight request dropped
//! ```

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use jiff::{SignedDuration, Timestamp};
use std::future::Future;
use std::time::Duration;

use crate::time::TimeSource;

/// How far `force_refresh` moves the last request into the past.
const FORCE_REFRESH_BACKDATE: SignedDuration = SignedDuration::from_hours(24);

/// Cached result of a polling hook.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiState<T> {
    pub data: Option<T>,
    pub fetching: bool,
    pub error: Option<String>,
    pub last_request: Timestamp,
}

impl<T> Default for ApiState<T> {
    fn default() -> Self {
        Self {
            data: None,
            fetching: false,
            error: None,
            last_request: Timestamp::UNIX_EPOCH,
        }
    }
}

/// Permission to run one request, handed out by [`Poller::begin_fetch`].
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    registration: AbortRegistration,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wrap the request so that [`Poller::cancel`] drops it mid-flight.
    /// Returns the generation to pass back to [`Poller::finish`].
    pub fn abortable<F: Future>(self, request: F) -> (u64, Abortable<F>) {
        (self.generation, Abortable::new(request, self.registration))
    }
}

#[derive(Debug)]
pub struct Poller<T> {
    state: ApiState<T>,
    time_source: TimeSource,
    debounce: SignedDuration,
    generation: u64,
    in_flight: Option<AbortHandle>,
}

impl<T> Poller<T> {
    pub fn new(time_source: TimeSource, debounce: Duration) -> Self {
        Self {
            state: ApiState::default(),
            time_source,
            debounce: SignedDuration::try_from(debounce)
                .unwrap_or(SignedDuration::MAX),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &ApiState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn time_source(&self) -> &TimeSource {
        &self.time_source
    }

    /// Whether a request may start right now.
    pub fn is_due(&self) -> bool {
        let elapsed =
            self.time_source.now().duration_since(self.state.last_request);
        !self.state.fetching && elapsed > self.debounce
    }

    /// Check-and-set: marks the poller as fetching and returns a ticket if
    /// a request is due, otherwise `None`.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.is_due() {
            return None;
        }

        self.state.fetching = true;
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight = Some(handle);

        Some(FetchTicket {
            generation: self.generation,
            registration,
        })
    }

    /// Store the outcome of the request started with `generation`.
    ///
    /// Returns false, leaving the state untouched, when the request was
    /// cancelled after it started.
    pub fn finish(
        &mut self,
        generation: u64,
        result: Result<T, String>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Discarding response of cancelled request {generation}"
            );
            return false;
        }

        match result {
            Ok(data) => {
                self.state.data = Some(data);
                self.state.error = None;
            }
            Err(e) => {
                self.state.error = Some(e);
            }
        }
        self.state.fetching = false;
        self.state.last_request = self.time_source.now();
        self.in_flight = None;
        true
    }

    /// Make the next evaluation start a request regardless of the debounce
    /// window. A request already in flight is left alone.
    pub fn force_refresh(&mut self) {
        self.state.last_request = self
            .time_source
            .now()
            .checked_sub(FORCE_REFRESH_BACKDATE)
            .unwrap_or(Timestamp::MIN);
    }

    /// Abort the in-flight request and ignore its response should it still
    /// arrive.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.generation += 1;
        self.state.fetching = false;
    }
}
