pub mod calculator;
pub mod delimiter;
pub mod error;
pub mod header;

// Re-exports
pub use calculator::*;
pub use delimiter::*;
pub use error::*;
pub use header::*;
