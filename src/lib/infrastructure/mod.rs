pub mod handle;
pub mod model;
