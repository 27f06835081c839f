//! Application state shared across handlers

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::db::DailyStore;

/// Source of "today" for picking the question of the day
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Arc<dyn DailyStore>,
    clock: Clock,
}

impl AppState {
    /// State using the local system date.
    pub fn new(store: Arc<dyn DailyStore>) -> Self {
        Self::with_clock(store, Arc::new(|| Local::now().date_naive()))
    }

    pub fn with_clock(store: Arc<dyn DailyStore>, clock: Clock) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store, clock }),
        }
    }

    pub fn store(&self) -> &dyn DailyStore {
        self.inner.store.as_ref()
    }

    /// Today's date according to the configured clock.
    pub fn today(&self) -> NaiveDate {
        (self.inner.clock)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[test]
    fn fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let state = AppState::with_clock(Arc::new(MemoryStore::new()), Arc::new(move || day));
        assert_eq!(state.today(), day);
    }
}
