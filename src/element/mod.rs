pub mod host;
pub mod lifecycle;
pub mod prefetch;

pub use host::{ElementHost, HintSink, RecordedElement, RecordedHead};
pub use lifecycle::{parse_height, ElementAttributes, ElementEvent, LiteEmbed, Stage, ACTIVATED_CLASS};
pub use prefetch::{HintKind, LinkHint, PrefetchRegistry};
