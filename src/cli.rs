//! Command-line interface
//!
//! ```bash
//! htserve                      # ./htserve.toml if present, else defaults
//! htserve conf/site            # conf/site.toml
//! htserve --print-config       # show the effective configuration and exit
//! ```

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Clone, Parser)]
#[command(name = "htserve")]
#[command(about = "Minimal single-process static HTTP server")]
#[command(version)]
pub struct Cli {
    /// Config file path, extension optional (default: htserve)
    #[arg(env = "HTSERVE_CONFIG")]
    pub config: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Load the configuration this invocation points at
    pub fn load_config(&self) -> Result<Config, config::ConfigError> {
        match self.config.as_deref() {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["htserve"]).unwrap();
        assert_eq!(cli.config, None);
        assert!(!cli.print_config);
    }

    #[test]
    fn test_config_path_and_print_flag() {
        let cli = Cli::try_parse_from(["htserve", "conf/site", "--print-config"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("conf/site"));
        assert!(cli.print_config);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let args = ["htserve", "--port", "9999", "--print-config"];
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let args = ["htserve", "--help", "--print-config"];
        let err = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_load_config_from_missing_file_uses_defaults() {
        let cli = Cli::try_parse_from(["htserve", "no/such/htserve-config"]).unwrap();
        let cfg = cli.load_config().unwrap();
        assert_eq!(cfg.site.index, "/index.html");
    }
}
