pub mod cli;
pub mod config;
pub mod core;
pub mod element;
pub mod error;
pub mod net;
pub mod providers;
pub mod utils;

pub use config::Config;
pub use core::{EmbedDescriptor, Resolver, Rule, RuleRegistry};
pub use element::{ElementAttributes, ElementEvent, LiteEmbed, PrefetchRegistry, Stage};
pub use error::{EmbedError, Result};
