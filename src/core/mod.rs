pub mod service;
pub mod store;

pub use crate::domain::model::Destination;
pub use crate::domain::ports::DestinationRepository;
pub use crate::utils::error::Result;
pub use service::DestinationService;
pub use store::InMemoryDestinationStore;
