//! Command implementations for qualify-cli

pub mod get;
pub mod has;
pub mod list;

pub use get::run_get;
pub use has::run_has;
pub use list::run_list;
