use payloads::{APIClient, ClientError};
use std::rc::Rc;
use yew::prelude::*;

use crate::{Config, TimeSource};

/// Dependencies of the booking hooks.
///
/// Provide one with `ContextProvider<BookingContext>` to choose the backend
/// or the clock; hooks rendered outside a provider build one from
/// [`Config::from_env`] and the system clock.
#[derive(Clone, Debug)]
pub struct BookingContext {
    pub client: Rc<APIClient>,
    pub time_source: TimeSource,
    pub config: Config,
}

impl PartialEq for BookingContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
            && self.time_source.same_clock(&other.time_source)
            && self.config == other.config
    }
}

impl BookingContext {
    pub fn new(
        config: Config,
        time_source: TimeSource,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: Rc::new(config.api_client()?),
            time_source,
            config,
        })
    }

    pub fn from_env() -> Self {
        let config = Config::from_env();
        Self::new(config.clone(), TimeSource::system()).unwrap_or_else(|e| {
            tracing::error!(
                "Failed to build API client, using the default one: {e}"
            );
            Self {
                client: Rc::new(APIClient {
                    address: config.backend_url.clone(),
                    inner_client: reqwest::Client::new(),
                    timeout: config.request_timeout,
                }),
                time_source: TimeSource::system(),
                config,
            }
        })
    }
}

/// The provided [`BookingContext`], or the build-time default.
#[hook]
pub fn use_booking_context() -> BookingContext {
    let provided = use_context::<BookingContext>();
    let fallback = use_memo((), |_| BookingContext::from_env());

    provided.unwrap_or_else(|| (*fallback).clone())
}
