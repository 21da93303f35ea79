pub mod catalog;
pub mod cli;
pub mod config;
pub mod observability;
pub mod render;

pub use config::Config;
