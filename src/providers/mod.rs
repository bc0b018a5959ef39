pub mod http_client;
pub mod openrouter;
pub mod scrub;
pub mod traits;

pub use http_client::build_provider_client;
pub use openrouter::OpenRouterProvider;
pub use scrub::api_error;
pub use traits::{ModelSettings, Provider};
