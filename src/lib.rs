pub mod convert;
pub mod loader;
pub mod mapper;

pub use convert::*;
pub use loader::*;
pub use mapper::*;

pub type Result<T> = anyhow::Result<T>;
