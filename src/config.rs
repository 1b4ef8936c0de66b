// src/config.rs

use anyhow::{Context, Result};
use std::path::PathBuf;
use url::Url;

use crate::fetch::DEFAULT_API_URL;

/// Runtime settings for one invocation, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint the dataset is fetched from.
    pub api_url: Url,
    /// Read the payload from this file instead of the network.
    pub input: Option<PathBuf>,
    /// Directory `export.csv` is written into.
    pub out_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Build a config from the command line; anything not given falls back
    /// to the DataUSA endpoint, the current directory and `info` logging.
    pub fn from_parts(
        api_url: Option<&str>,
        input: Option<PathBuf>,
        out_dir: Option<PathBuf>,
        verbose: bool,
        quiet: bool,
    ) -> Result<Self> {
        let url = api_url.unwrap_or(DEFAULT_API_URL);
        let api_url = Url::parse(url).with_context(|| format!("parsing API URL {}", url))?;
        let log_filter = match (verbose, quiet) {
            (true, _) => "debug",
            (false, true) => "warn",
            (false, false) => "info",
        };
        Ok(Self {
            api_url,
            input,
            out_dir: out_dir.unwrap_or_else(|| PathBuf::from(".")),
            log_filter: log_filter.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::from_parts(None, None, None, false, false).unwrap();
        assert_eq!(cfg.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(cfg.out_dir, PathBuf::from("."));
        assert!(cfg.input.is_none());
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_parts(
            Some("http://localhost:8080/api/data"),
            Some(PathBuf::from("payload.json")),
            Some(PathBuf::from("out")),
            true,
            true,
        )
        .unwrap();
        assert_eq!(cfg.api_url.host_str(), Some("localhost"));
        assert_eq!(cfg.input, Some(PathBuf::from("payload.json")));
        assert_eq!(cfg.out_dir, PathBuf::from("out"));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn test_quiet() {
        let cfg = Config::from_parts(None, None, None, false, true).unwrap();
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn test_bad_url() {
        assert!(Config::from_parts(Some("not a url"), None, None, false, false).is_err());
    }
}
