pub mod schema;

pub use schema::{Config, RemoteConfig};
