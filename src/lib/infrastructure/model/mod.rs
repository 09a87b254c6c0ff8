//! Model infrastructure module
//!
//! Provides LLM model clients behind a factory seam so the handle cache
//! never depends on a concrete backend.
//!
//! # Structure
//! - `types` - Request, Response, Error types
//! - `traits` - ModelClient, ClientFactory traits
//! - `adapter` - Message format adapters
//! - `factory` - HTTP client factory
//! - `clients` - Individual client implementations

pub mod adapter;
pub mod clients;
pub mod factory;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use factory::HttpClientFactory;
pub use traits::{ClientFactory, ClientSpec, ModelClient, ModelHandle};
pub use types::{ModelError, ModelRequest, ModelResponse};
