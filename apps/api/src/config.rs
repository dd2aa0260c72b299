use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::catalog::PackSizeCatalog;
use crate::fulfillment::ReoptimizeMode;

const DEFAULT_PACK_SIZES: [i64; 5] = [250, 500, 1000, 2000, 5000];

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file holding the persisted pack-size catalog.
    pub pack_sizes_path: PathBuf,
    /// Seed catalog used when nothing has been persisted yet.
    pub default_pack_sizes: PackSizeCatalog,
    pub reoptimize_mode: ReoptimizeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            pack_sizes_path: PathBuf::from("packSizeConfig.json"),
            default_pack_sizes: PackSizeCatalog::from_sizes(DEFAULT_PACK_SIZES).unwrap_or_default(),
            reoptimize_mode: ReoptimizeMode::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let default_pack_sizes = match lookup("DEFAULT_PACK_SIZES") {
            Some(raw) => parse_pack_sizes(&raw).context("DEFAULT_PACK_SIZES is invalid")?,
            None => defaults.default_pack_sizes,
        };

        let reoptimize_mode = match lookup("REOPTIMIZE_MODE") {
            Some(raw) => raw
                .parse::<ReoptimizeMode>()
                .map_err(|e| anyhow!(e))
                .context("REOPTIMIZE_MODE is invalid")?,
            None => defaults.reoptimize_mode,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            pack_sizes_path: lookup("PACK_SIZES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.pack_sizes_path),
            default_pack_sizes,
            reoptimize_mode,
        })
    }
}

/// Parses a comma-separated list such as `250,500,1000`.
fn parse_pack_sizes(raw: &str) -> Result<PackSizeCatalog> {
    let sizes = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .with_context(|| format!("'{part}' is not an integer"))
        })
        .collect::<Result<Vec<_>>>()?;

    let catalog = PackSizeCatalog::from_sizes(sizes)?;
    if catalog.is_empty() {
        return Err(anyhow!("at least one pack size is required"));
    }
    Ok(catalog)
}
