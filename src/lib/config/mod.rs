pub mod app;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod provider;
pub mod table;

pub use app::ProviderSettings;
pub use error::ConfigError;
pub use provider::{
    ConnectionConfig, GenerationOptions, ProviderKind, ProviderProfile, ThinkingOptions,
};
pub use table::ProviderTable;
