mod settings;

pub use settings::{ApiConfig, ServerConfig, Settings};
