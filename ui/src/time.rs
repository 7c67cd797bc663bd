use jiff::Timestamp;
#[cfg(any(test, feature = "mock-time"))]
use std::sync::{Arc, Mutex};

/// Clock read by the polling hooks.
///
/// Clones share the same clock, so a mock handed to a hook can be advanced
/// from the outside.
#[derive(Clone, Debug)]
pub struct TimeSource {
    #[cfg(any(test, feature = "mock-time"))]
    time: Option<Arc<Mutex<Timestamp>>>,
}

impl TimeSource {
    pub fn system() -> Self {
        Self {
            #[cfg(any(test, feature = "mock-time"))]
            time: None,
        }
    }

    #[cfg(any(test, feature = "mock-time"))]
    pub fn mock(initial_time: Timestamp) -> Self {
        Self {
            time: Some(Arc::new(Mutex::new(initial_time))),
        }
    }

    #[cfg(not(any(test, feature = "mock-time")))]
    pub fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    #[cfg(any(test, feature = "mock-time"))]
    pub fn now(&self) -> Timestamp {
        match &self.time {
            Some(time) => *time.lock().unwrap(),
            None => Timestamp::now(),
        }
    }

    /// Moves a mock clock forward. No effect on the system clock.
    #[cfg(any(test, feature = "mock-time"))]
    pub fn advance(&self, duration: jiff::Span) {
        if let Some(time) = &self.time {
            *time.lock().unwrap() += duration;
        }
    }

    /// Whether both handles read the same clock.
    pub fn same_clock(&self, other: &Self) -> bool {
        #[cfg(any(test, feature = "mock-time"))]
        {
            match (&self.time, &other.time) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }

        #[cfg(not(any(test, feature = "mock-time")))]
        {
            let _ = other;
            true
        }
    }
}

impl Default for TimeSource {
    fn default() -> Self {
        Self::system()
    }
}
