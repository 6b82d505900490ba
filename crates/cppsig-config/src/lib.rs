//! # cppsig-config
//!
//! Layered configuration loading for cppsig using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CPPSIG_*` prefix, `__` as separator)
//! 2. Project-level `.cppsig/config.toml`
//! 3. User-level `~/.config/cppsig/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CPPSIG_PARSER__ENCODING` -> `parser.encoding` and
//! `CPPSIG_PARSER__KEEP_SOURCE_TEXT` -> `parser.keep_source_text`.
//!
//! # Usage
//!
//! ```no_run
//! use cppsig_config::CppsigConfig;
//!
//! let config = CppsigConfig::load().expect("config");
//! println!("default encoding: {}", config.parser.encoding);
//! ```

mod encoding;
mod error;
mod parser;

pub use encoding::Encoding;
pub use error::ConfigError;
pub use parser::ParserConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "CPPSIG_";
const ENV_SEPARATOR: &str = "__";
const PROJECT_CONFIG: &str = ".cppsig/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CppsigConfig {
    #[serde(default)]
    pub parser: ParserConfig,
}

impl CppsigConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env` files. Use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] when a source cannot be read or a value
    /// does not deserialize (for example an unknown encoding name).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after exporting the nearest `.env` file.
    ///
    /// Variables already present in the environment are not overwritten.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = load_dotenv();
        Self::load()
    }

    /// Defaults, then each config file that exists, then `CPPSIG_*` variables.
    #[must_use]
    pub fn figment() -> Figment {
        config_files()
            .into_iter()
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR))
    }
}

/// Existing config files, lowest precedence first.
fn config_files() -> Vec<PathBuf> {
    let global = dirs::config_dir().map(|dir| dir.join("cppsig").join("config.toml"));
    global
        .into_iter()
        .chain(Some(PathBuf::from(PROJECT_CONFIG)))
        .filter(|path| path.exists())
        .collect()
}

/// Export the first `.env` found beside the crate or up to the workspace root,
/// else the first one found from the working directory upwards.
fn load_dotenv() -> Option<PathBuf> {
    let beside_manifest = std::env::var_os("CARGO_MANIFEST_DIR").and_then(|manifest_dir| {
        Path::new(&manifest_dir)
            .ancestors()
            .take(3)
            .map(|dir| dir.join(".env"))
            .find(|path| path.exists())
    });
    match beside_manifest {
        Some(path) => dotenvy::from_path(&path).ok().map(|()| path),
        None => dotenvy::dotenv().ok(),
    }
}
