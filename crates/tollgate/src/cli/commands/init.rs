//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use tollgate_core::config::{write_default_config, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML};

use crate::cli::output;
use crate::cli::Cli;

/// Write a default Tollgate configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;
        let default_name = if self.toml {
            DEFAULT_CONFIG_TOML
        } else {
            DEFAULT_CONFIG_YAML
        };
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(default_name));

        write_default_config(&config_path, self.force)?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!(
                "  1. Edit {} to adjust commit types and sections",
                config_path.display()
            );
            println!(
                "  2. Run {} to try it",
                style("tollgate classify \"feat: hello\"").cyan()
            );
        }

        Ok(())
    }
}
