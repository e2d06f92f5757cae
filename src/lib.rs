pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::{router, serve, serve_with_shutdown, AppState};
pub use config::{CliArgs, ServerConfig};
pub use core::{Destination, DestinationRepository, DestinationService, InMemoryDestinationStore};
pub use utils::error::{ApiError, Result};
