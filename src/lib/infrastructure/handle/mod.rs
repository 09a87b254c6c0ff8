//! Handle selection and caching
//!
//! - `provider` - ModelProvider: cached primary handle, specialized handle
//!   with fallback
//! - `source` - where the active provider identifier is read from
//! - `error` - HandleError, SpecializedFailure

pub mod error;
pub mod provider;
pub mod source;

pub use error::{HandleError, SpecializedFailure};
pub use provider::{HandleTag, ModelProvider};
pub use source::{EnvProviderSource, ProviderSource, StaticProviderSource};
