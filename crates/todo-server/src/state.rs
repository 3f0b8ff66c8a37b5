use crate::config::ServerConfig;
use crate::store::TodoStore;

pub struct AppState {
    pub store: TodoStore,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let store = if config.seed {
            TodoStore::seeded()
        } else {
            TodoStore::empty()
        };
        Self::new(store)
    }
}
