//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs against the loaded watchlist.

pub mod config;
pub mod interactive;
pub mod list;
pub mod options;
pub mod pick;

// Re-export execute functions for convenience
pub use config::execute as config;
pub use interactive::run as interactive;
pub use list::execute as list;
pub use options::execute as options;
pub use pick::execute as pick;
