pub mod warmer;

pub use warmer::HttpWarmer;
