use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::store::{MemoryStore, RunStore};
use chrono::NaiveDateTime;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    store: Arc<dyn RunStore>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(MemoryStore::new()),
            clock,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &dyn RunStore {
        self.store.as_ref()
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }
}
