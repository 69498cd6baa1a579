use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::Deserialize;

use crate::util::ext::PathExt;

/// Read if present. `~` is `$HOME`, or the passwd home directory if that is unset.
pub const DEFAULT_PATH: &str = "~/.config/lsflags.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub output: OutputCfg,
	pub walk: WalkCfg,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputCfg {
	/// Long attribute names instead of letters
	pub long: bool,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WalkCfg {
	/// Include dot-entries when listing directory contents
	pub all: bool,
	/// Silently skip entries found while listing directories that have no flags to get, e.g.
	/// symlinks, sockets and device nodes. Paths given explicitly are always reported.
	pub skip_unsupported: bool,
}

impl Default for WalkCfg {
	fn default() -> Self {
		WalkCfg {
			all: false,
			skip_unsupported: true,
		}
	}
}

impl Config {
	pub fn parse(data: &str) -> anyhow::Result<Config> {
		Ok(toml::from_str(data)?)
	}

	pub fn load(path: &Path) -> anyhow::Result<Config> {
		debug!("reading config from {path:?}");
		let data = std::fs::read_to_string(path)
			.with_context(|| format!("unable to read config file {path:?}"))?;
		Self::parse(&data).with_context(|| format!("invalid config file {path:?}"))
	}

	/// Loads `explicit` if given, otherwise [`DEFAULT_PATH`] if it exists, otherwise the defaults
	pub fn load_or_default(explicit: Option<&Path>) -> anyhow::Result<Config> {
		match explicit {
			Some(path) => Self::load(&path.tilde_expand()),
			None => {
				let path: PathBuf = Path::new(DEFAULT_PATH).tilde_expand();
				if path.exists() {
					Self::load(&path)
				} else {
					debug!("no config file at {path:?}, using defaults");
					Ok(Config::default())
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_is_default() {
		let cfg = Config::parse("").unwrap();
		assert_eq!(cfg, Config::default());
		assert!(!cfg.output.long);
		assert!(!cfg.walk.all);
		assert!(cfg.walk.skip_unsupported);
	}

	#[test]
	fn partial_tables() {
		let cfg = Config::parse("[output]\nlong = true\n\n[walk]\nall = true\n").unwrap();
		assert!(cfg.output.long);
		assert!(cfg.walk.all);
		assert!(cfg.walk.skip_unsupported);
	}

	#[test]
	fn rejects_unknown_keys_and_wrong_types() {
		assert!(Config::parse("[output]\nlon = true\n").is_err());
		assert!(Config::parse("[walk]\nall = \"yes\"\n").is_err());
	}

	#[test]
	fn explicit_missing_file_is_error() {
		let temp = assert_fs::TempDir::new().unwrap();
		assert!(Config::load_or_default(Some(temp.path().join("nope.toml").as_path())).is_err());
	}
}
