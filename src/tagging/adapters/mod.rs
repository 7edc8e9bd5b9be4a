//! Adapter implementations of the tagging-client port.

pub mod alchemy;
pub mod delicious;
pub mod memory;
pub mod open_calais;
pub mod yahoo;

pub use alchemy::AlchemyClient;
pub use delicious::DeliciousClient;
pub use memory::{ScriptedClient, ScriptedClientHandle};
pub use open_calais::OpenCalaisClient;
pub use yahoo::YahooClient;
