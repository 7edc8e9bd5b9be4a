//! Application services for descriptor resolution and tag dispatch.

mod dispatcher;
mod registry;
mod resolver;

pub use dispatcher::{DispatchError, TaggingDispatcher};
pub use registry::{ClientFactory, ServiceRegistry};
pub use resolver::ServiceResolver;
