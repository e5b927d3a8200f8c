pub mod registry;
pub mod resolver;
pub mod rule;

pub use registry::RuleRegistry;
pub use resolver::{EmbedDescriptor, Resolver};
pub use rule::{IdExtractor, Rule};
