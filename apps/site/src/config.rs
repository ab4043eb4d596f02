use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process configuration loaded from environment variables.
/// Every variable is optional; the site runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `styles/` and `assets/`.
    pub asset_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let asset_dir = match std::env::var("ASSET_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir().context("Cannot resolve the current directory")?,
        };

        Ok(Config {
            asset_dir,
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    raw.unwrap_or("8080")
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_8080() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    #[test]
    fn test_port_parses_override() {
        assert_eq!(parse_port(Some("3000")).unwrap(), 3000);
    }

    #[test]
    fn test_malformed_port_is_rejected() {
        let err = parse_port(Some("eighty")).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
