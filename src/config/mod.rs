//! Configuration loading.
//!
//! # Modules
//!
//! - [`schema`] - The [`ToolpinConfig`] settings type
//! - [`loader`] - Project file discovery and `TOOLPIN_*` overrides

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config, load_config_file, load_config_with_env, parse_config,
    CONFIG_FILE,
};
pub use schema::ToolpinConfig;
