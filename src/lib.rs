pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::toml_config::TomlConfig;
pub use config::CliConfig;
pub use core::color::{describe, hex_string, hsl_string, rgb_string};
pub use core::sampler::{random_color, ThreadRngSource};
pub use domain::model::{Color, ColorResponse};
pub use server::{create_router, run_with_shutdown};
pub use utils::error::{ApiError, Result};
