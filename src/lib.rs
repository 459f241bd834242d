pub mod analyzers;
pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod schema;
pub mod snapshot;
pub mod stats;
pub mod validate;
