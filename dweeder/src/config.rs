//! Persistent configuration: where the database is and how expensive
//! password hashing should be.

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use butane::db::{Connection, ConnectionSpec};
use serde::{Deserialize, Serialize};

use crate::digest::Digester;
use crate::{Error, Result};

/// File name used when [`Config::load`] or [`Config::save`] is given a directory.
pub const CONFIG_FILE: &str = "dweeder.json";

/// Environment variable overriding [`Config::hashing`]. Accepts
/// `minimum`, `default`, or `<memory_kib>,<iterations>`.
pub const COST_ENV: &str = "DWEEDER_HASH_COST";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Config {
    /// Butane backend name and connection string.
    pub connection: ConnectionSpec,
    #[serde(default)]
    pub hashing: Digester,
}

impl Config {
    pub fn new(connection: ConnectionSpec) -> Self {
        Config {
            connection,
            hashing: Digester::default(),
        }
    }

    /// Load a previously saved config. `path` may be the file or the
    /// directory containing [`CONFIG_FILE`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = complete_if_dir(path.as_ref());
        let file = fs::File::open(&path)?;
        let config: Config = serde_json::from_reader(file)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save the config. `path` may be a file or an existing directory.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = complete_if_dir(path.as_ref());
        let mut f = fs::File::create(&path)?;
        f.write_all(serde_json::to_string_pretty(self)?.as_bytes())?;
        Ok(())
    }

    /// Digester for the configured cost, unless [`COST_ENV`] overrides it.
    pub fn digester(&self) -> Result<Digester> {
        match std::env::var(COST_ENV) {
            Ok(value) => parse_cost(&value),
            Err(_) => Ok(self.hashing),
        }
    }

    pub fn connect(&self) -> Result<Connection> {
        Ok(butane::db::connect(&self.connection)?)
    }
}

fn parse_cost(value: &str) -> Result<Digester> {
    let invalid = || Error::Config(format!("{COST_ENV}={value:?} is not a valid hash cost"));
    match value.trim() {
        "minimum" => Ok(Digester::minimum()),
        "default" => Ok(Digester::default()),
        cost => {
            let (memory_kib, iterations) = cost.split_once(',').ok_or_else(invalid)?;
            let memory_kib = memory_kib.trim().parse().map_err(|_| invalid())?;
            let iterations = iterations.trim().parse().map_err(|_| invalid())?;
            Ok(Digester::new(memory_kib, iterations))
        }
    }
}

fn complete_if_dir(path: &Path) -> Cow<'_, Path> {
    if path.is_dir() {
        Cow::from(path.join(CONFIG_FILE))
    } else {
        Cow::from(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn save_and_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new(ConnectionSpec::new("sqlite", "db.sqlite"));
        config.hashing = Digester::minimum();
        config.save(dir.path()).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn hashing_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let spec = serde_json::to_value(ConnectionSpec::new("sqlite", ":memory:")).unwrap();
        let json = serde_json::json!({ "connection": spec });
        fs::write(&path, json.to_string()).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.hashing, Digester::default());
    }

    #[test]
    fn cost_values() {
        assert_eq!(parse_cost("minimum").unwrap(), Digester::minimum());
        assert_eq!(parse_cost(" default ").unwrap(), Digester::default());
        assert_eq!(parse_cost("64, 3").unwrap(), Digester::new(64, 3));
        assert!(matches!(parse_cost("cheap"), Err(Error::Config(_))));
        assert!(matches!(parse_cost("64"), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::IO(_)));
    }
}
