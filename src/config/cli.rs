// src/config/cli.rs
//! Command line and environment settings.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use url::Url;

/// Browse a fileshare server's directories from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "fileshare", version, about)]
pub struct Config {
    /// Base URL of the fileshare server
    #[arg(long, env = "FILESHARE_SERVER", default_value = "http://localhost:8080")]
    pub server: Url,

    /// Append logs to this file (the terminal is used by the UI)
    #[arg(long, env = "FILESHARE_LOG")]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_server() {
        let config = Config::try_parse_from(["fileshare"]).unwrap();

        assert_eq!(config.server.as_str(), "http://localhost:8080/");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn accepts_server_and_logging_flags() {
        let config = Config::try_parse_from([
            "fileshare",
            "--server",
            "http://nas.lan:9000",
            "--log-file",
            "/tmp/fileshare.log",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.server.host_str(), Some("nas.lan"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/fileshare.log")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_invalid_server_url() {
        assert!(Config::try_parse_from(["fileshare", "--server", "not a url"]).is_err());
    }
}
