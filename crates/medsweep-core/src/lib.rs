pub mod config;
pub mod engine;
pub mod enrich;
pub mod error;
pub mod execute;
pub mod merge;
pub mod model;
pub mod normalizer;
pub mod plan;
pub mod scanner;
pub mod store;
pub mod tmdb;

pub use config::AppConfig;
pub use engine::Engine;
pub use error::Error;
pub use model::MediaKind;
pub use tmdb::{MetadataProvider, TmdbClient};
