//! Library crate root re-exporting the catalog, engine and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod catalog;
pub mod cli;
pub mod engine;
