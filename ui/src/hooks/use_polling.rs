use gloo_timers::callback::Interval;
use std::future::Future;
use yew::prelude::*;

use super::use_booking_context;
use crate::polling::Poller;

/// Generic polling hook return type
pub struct PollingHookReturn<T> {
    /// Last successfully fetched value, `None` until the first success.
    pub data: Option<T>,
    pub is_fetching: bool,
    /// Error of the latest request. Earlier data is still in `data`.
    pub error: Option<String>,
    /// Fetch again on the next render, skipping the debounce window.
    pub force_refresh: Callback<()>,
}

/// Keep `fetch_fn`'s result fresh for as long as the component is mounted.
///
/// Every render asks the [`Poller`] whether a request is due and, if so,
/// runs the `fetch_fn` passed to that render. A timer re-renders the
/// component every `poll_tick_ms` so requests keep coming without outside
/// triggers. Unmounting stops the timer and aborts the request in flight.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_events() -> PollingHookReturn<Vec<responses::EventRecord>> {
///     let client = use_booking_context().client;
///     use_polling(move || async move {
///         client.list_events().await.map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_polling<T, F, Fut>(fetch_fn: F) -> PollingHookReturn<T>
where
    T: Clone + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let context = use_booking_context();
    let poller = {
        let time_source = context.time_source.clone();
        let debounce = context.config.poll_debounce;
        use_mut_ref(move || Poller::<T>::new(time_source, debounce))
    };
    let rerender = use_force_update();

    // Periodic re-render; teardown doubles as the cancellation point
    {
        let poller = poller.clone();
        let rerender = rerender.clone();

        use_effect_with(context.config.poll_tick_ms, move |tick_ms| {
            let interval =
                Interval::new(*tick_ms, move || rerender.force_update());
            move || {
                drop(interval);
                poller.borrow_mut().cancel();
            }
        });
    }

    // Re-evaluate after every render
    {
        let poller = poller.clone();
        let rerender = rerender.clone();

        use_effect(move || {
            let ticket = poller.borrow_mut().begin_fetch();
            if let Some(ticket) = ticket {
                tracing::debug!(
                    "Polling: starting request {}",
                    ticket.generation()
                );
                let (generation, request) = ticket.abortable(fetch_fn());

                yew::platform::spawn_local(async move {
                    let Ok(result) = request.await else {
                        tracing::debug!(
                            "Polling: request {generation} aborted"
                        );
                        return;
                    };
                    if let Err(e) = &result {
                        tracing::warn!("Polling request failed: {e}");
                    }
                    let applied =
                        poller.borrow_mut().finish(generation, result);
                    if applied {
                        rerender.force_update();
                    }
                });
            }
            || ()
        });
    }

    let (data, is_fetching, error) = {
        let poller = poller.borrow();
        let state = poller.state();
        (state.data.clone(), state.fetching, state.error.clone())
    };

    let force_refresh = Callback::from(move |_| {
        poller.borrow_mut().force_refresh();
        rerender.force_update();
    });

    PollingHookReturn {
        data,
        is_fetching,
        error,
        force_refresh,
    }
}
