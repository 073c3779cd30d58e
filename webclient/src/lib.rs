// exported modules
pub mod error;
pub mod model;
pub mod sample;
pub mod scrape;
pub mod selector;

// client impls
pub mod client;

// re-exports
pub use client::BojClient;
pub use error::*;
pub use model::*;

// internal modules
mod util;
