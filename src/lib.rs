pub mod config;
pub mod error;
pub mod msg;
pub mod server;
pub mod state;

pub use crate::config::Config;
pub use crate::error::ApiError;
pub use crate::server::{cors_layer, create_router};
pub use crate::state::{AppState, SessionId, SessionRegistry};
