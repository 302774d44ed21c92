pub mod cli;
pub mod config;
pub mod pipeline;
pub mod render;

pub use cli::{Cli, Commands};
pub use config::{AppConfig, JournalConfig};
pub use pipeline::Pipeline;
