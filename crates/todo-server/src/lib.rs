pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod server;
pub mod state;
pub mod store;

pub use config::{Cli, ServerConfig};
pub use error::{Result, TodoError};
pub use server::{app_config, run_server};
pub use state::AppState;
pub use store::{Todo, TodoInput, TodoStore};
