pub mod toml_config;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "color-api")]
#[command(about = "HTTP service that serves randomly generated colors")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub listen: String,

    #[arg(long, help = "Directory of static files served at the site root")]
    pub static_dir: Option<String>,

    #[arg(long = "cors-origin", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    #[arg(long, help = "TOML config file; replaces the other flags when given")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn listen_addr(&self) -> &str {
        &self.listen
    }

    fn static_dir(&self) -> Option<&str> {
        self.static_dir.as_deref()
    }

    fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_listen_addr("listen", &self.listen)?;
        for origin in &self.cors_origins {
            validation::validate_origin("cors_origins", origin)?;
        }
        if let Some(dir) = &self.static_dir {
            validation::validate_static_dir("static_dir", dir)?;
        }
        Ok(())
    }
}
