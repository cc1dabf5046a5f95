// Types representing highlight rules and the ranges they apply to

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
