//! Cached, provider-aware language model handles.
//!
//! [`ModelProvider`] resolves the active provider (from `LLM_PROVIDER` or a
//! configured default), keeps one primary handle per (provider, model) and
//! builds higher-capability specialized handles on demand, falling back to
//! the primary handle when those cannot be built.
//!
//! ```no_run
//! use llm_handles::{ModelProvider, ProviderSettings};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let mut provider = ModelProvider::from_env(ProviderSettings::load(None)?);
//! let primary = provider.primary_handle(None)?;
//! let coder = provider.specialized_handle().await?;
//! println!("{} / {}", primary.model(), coder.model());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use config::{
    ConfigError, GenerationOptions, ProviderKind, ProviderProfile, ProviderSettings,
    ProviderTable, ThinkingOptions,
};
pub use domain::types;
pub use infrastructure::handle::{
    EnvProviderSource, HandleError, HandleTag, ModelProvider, ProviderSource,
    StaticProviderSource,
};
pub use infrastructure::{handle, model};

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global fmt subscriber. Honors `RUST_LOG`, defaults to
/// `info`. Safe to call more than once.
pub fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
