// Service exports
pub mod registry;
pub mod vocabulary;

pub use registry::{demo_parties, PartyRegistry, RegistryError};
pub use vocabulary::Vocabulary;
