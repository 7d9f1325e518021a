pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod paprika;
pub mod presenter;
pub mod storage;
pub mod utils;
pub mod view;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use config::*;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use utils::*;
pub use view::*;

/// Crate version reported at startup
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
