// Configuration module entry point
// Loads layered configuration and derives the listening address

mod state;
mod types;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub use state::AppState;
pub use types::{Config, HttpConfig, LineEnding, LoggingConfig, ServerConfig, SiteConfig};

/// Config file looked up when no path is given (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "htserve";

impl Config {
    /// Load configuration from the default file location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Missing files are not an error, defaults and `HTSERVE_*` environment
    /// variables still apply.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::builder()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("HTSERVE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse configuration from a TOML document layered over the defaults
    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        let settings = Self::builder()?
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        config::Config::builder()
            .set_default("server.host", "")?
            .set_default("server.port", 8000)?
            .set_default("server.backlog", 1)?
            .set_default("server.concurrent", false)?
            .set_default("site.root", "htdocs")?
            .set_default("site.index", "/index.html")?
            .set_default("http.max_request_bytes", 1024)?
            .set_default("http.line_ending", "lf")?
            .set_default("http.not_found_body", "File Not Found")?
            .set_default("logging.level", "info")?
            .set_default("logging.echo_requests", true)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.http.max_request_bytes == 0 {
            return Err(config::ConfigError::Message(
                "http.max_request_bytes must be greater than zero".to_string(),
            ));
        }
        if !self.site.index.starts_with('/') || self.site.index.len() < 2 {
            return Err(config::ConfigError::Message(format!(
                "site.index must be an absolute resource path, got '{}'",
                self.site.index
            )));
        }
        if self.site.root.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "site.root must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Listening address; an empty host binds every IPv4 interface
    pub fn socket_addr(&self) -> Result<SocketAddr, config::ConfigError> {
        let host = self.server.host.trim();
        if host.is_empty() {
            return Ok(SocketAddr::new(
                IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                self.server.port,
            ));
        }

        let ip: IpAddr = host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse()
            .map_err(|e| config::ConfigError::Message(format!("Invalid address '{host}': {e}")))?;
        Ok(SocketAddr::new(ip, self.server.port))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: String::new(),
                port: 8000,
                backlog: 1,
                concurrent: false,
            },
            site: SiteConfig {
                root: "htdocs".to_string(),
                index: "/index.html".to_string(),
            },
            http: HttpConfig {
                max_request_bytes: 1024,
                line_ending: LineEnding::Lf,
                not_found_body: "File Not Found".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                echo_requests: true,
                access_log: true,
                access_log_format: "common".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_values() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg.server.host, "");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.backlog, 1);
        assert!(!cfg.server.concurrent);
        assert_eq!(cfg.site.root, "htdocs");
        assert_eq!(cfg.site.index, "/index.html");
        assert_eq!(cfg.http.max_request_bytes, 1024);
        assert_eq!(cfg.http.line_ending, LineEnding::Lf);
        assert_eq!(cfg.http.not_found_body, "File Not Found");
        assert_eq!(cfg.logging.access_log_format, "common");
    }

    #[test]
    fn test_toml_overrides() {
        let cfg = Config::from_toml_str(
            r#"
            [server]
            port = 8888
            concurrent = true

            [http]
            line_ending = "crlf"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8888);
        assert!(cfg.server.concurrent);
        assert_eq!(cfg.http.line_ending, LineEnding::Crlf);
        // untouched sections keep defaults
        assert_eq!(cfg.site.root, "htdocs");
    }

    #[test]
    fn test_empty_host_binds_all_interfaces() {
        let cfg = Config::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_explicit_host() {
        let mut cfg = Config::default();
        cfg.server.host = "127.0.0.1".to_string();
        cfg.server.port = 8888;
        assert_eq!(
            cfg.socket_addr().unwrap(),
            "127.0.0.1:8888".parse::<SocketAddr>().unwrap()
        );

        cfg.server.host = "[::1]".to_string();
        assert!(cfg.socket_addr().unwrap().is_ipv6());
    }

    #[test]
    fn test_invalid_host_rejected() {
        let mut cfg = Config::default();
        cfg.server.host = "not an address".to_string();
        assert!(cfg.socket_addr().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut cfg = Config::default();
        cfg.http.max_request_bytes = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.site.index = "index.html".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.site.root = "  ".to_string();
        assert!(cfg.validate().is_err());

        assert!(Config::from_toml_str("[http]\nmax_request_bytes = 0").is_err());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let text = Config::default().to_toml().unwrap();
        assert!(text.contains("[server]"));
        let cfg = Config::from_toml_str(&text).unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.http.line_ending, LineEnding::Lf);
    }
}
