use clap::{Parser, Subcommand};
use launch_at_login::AutoLaunchOptions;
use std::path::PathBuf;

/// Register an application to start when the user logs in.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Name of the login entry
    #[arg(long, global = true)]
    pub name: Option<String>,
    /// Absolute path of the application (a `.app` bundle on macOS)
    #[arg(long, global = true)]
    pub path: Option<String>,
    /// Launch the application hidden
    #[arg(long, global = true)]
    pub hidden: bool,
    /// macOS: use a Launch Agent instead of a Login Item
    #[arg(long, global = true)]
    pub use_launch_agent: bool,
    /// TOML file with launch options; flags override its values
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
    /// Log level or flexi_logger spec (e.g. `debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Write logs to the per-user logs directory instead of stderr
    #[arg(long, global = true)]
    pub log_file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Register the login entry
    Enable,
    /// Remove the login entry
    Disable,
    /// Print whether the login entry exists
    Status,
}

impl Cli {
    /// Overlay the command line flags on options loaded from a file.
    pub fn options(&self, base: AutoLaunchOptions) -> AutoLaunchOptions {
        let mut opts = base;
        if let Some(name) = &self.name {
            opts.name = Some(name.clone());
        }
        if let Some(path) = &self.path {
            opts.path = Some(path.clone());
        }
        opts.is_hidden |= self.hidden;
        opts.mac.use_launch_agent |= self.use_launch_agent;
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_file_options() {
        let cli = Cli::parse_from([
            "launch-at-login",
            "enable",
            "--name",
            "Other",
            "--hidden",
        ]);
        assert_eq!(cli.command, Command::Enable);
        let base = AutoLaunchOptions::new("MyApp").path("/usr/bin/myapp");
        let opts = cli.options(base);
        assert_eq!(opts.name.as_deref(), Some("Other"));
        assert_eq!(opts.path.as_deref(), Some("/usr/bin/myapp"));
        assert!(opts.is_hidden);
        assert!(!opts.mac.use_launch_agent);
    }

    #[test]
    fn file_values_survive_absent_flags() {
        let cli = Cli::parse_from(["launch-at-login", "status"]);
        let base = AutoLaunchOptions::new("MyApp").hidden(true).use_launch_agent(true);
        assert_eq!(cli.options(base.clone()), base);
    }
}
