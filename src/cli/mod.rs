//! Contains the argument handling and main logic of the CLI

use std::error::Error;
use std::io::{self, stdout, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser};
use exitcode::{ExitCode, CONFIG, IOERR};
use log::{debug, error, info, trace, LevelFilter};
use walkdir::WalkDir;

use crate::config::{self, Config};
use crate::file::{getflags, lsattr};
use crate::util::ext::PathExt;

// Structure based on the recommendations in
// https://rust-cli-recommendations.sunshowers.io/handling-arguments.html

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    long_about,
    after_long_help = "\
    1. Logging: is controlled via the LSFLAGS_LOG and LSFLAGS_LOG_STYLES environment variables. \
    Set LSFLAGS_LOG to error, warn, info, debug or trace to adjust verbosity. For examples, see \
    RUST_LOG and RUST_LOG_STYLES mentions in https://docs.rs/env_logger/0.10.0/env_logger/\
    \n\
    \n\
    2. Configuration: defaults for the listing options are read from ~/.config/lsflags.toml if \
    it exists, or from the file given via --config. Switches on the command line can only turn \
    options on.\
    \n\
    \n\
    3. Symlinks, sockets, FIFOs and device nodes have no flags on Linux. They are reported as \
    unsupported when named explicitly, and skipped while listing directories unless \
    `walk.skip_unsupported` is disabled in the config file."
)]
pub struct Lsflags {
	#[clap(flatten)]
	pub global_opts: GlobalOpts,

	#[clap(flatten)]
	list_opts: ListOpts,

	/// Files and directories to list, defaults to the current directory
	paths: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
	/// Verbosity level, can be specified multiple times, equivalent to LSFLAGS_LOG={info,debug,trace}
	#[arg(group="verbosity", long, short, global=true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Quiet mode, equivalent to LSFLAGS_LOG=error
	#[arg(group = "verbosity", long, short, global = true)]
	pub quiet: bool,

	/// Silent mode, equivalent to LSFLAGS_LOG=off
	#[arg(group = "verbosity", long, short, global = true)]
	pub silent: bool,

	/// Config file to use instead of ~/.config/lsflags.toml
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ListOpts {
	/// Recursively list the contents of directories
	#[arg(short('R'), long)]
	recursive: bool,

	/// Include dot-entries when listing directory contents
	#[arg(short, long)]
	all: bool,

	/// List directories themselves, not their contents
	#[arg(short, long)]
	directory: bool,

	/// Print long attribute names instead of single letters
	#[arg(short, long)]
	long: bool,
}

/// Command line switches merged with the config file
#[derive(Debug)]
struct Listing {
	recursive: bool,
	all: bool,
	directory: bool,
	long: bool,
	skip_unsupported: bool,
}

impl Lsflags {
	pub fn exec(self) -> Result<(), Box<dyn Error>> {
		self.init_logging();

		info!("version {} starting up", env!("CARGO_PKG_VERSION"));
		info!("log level set to {}", log::max_level());
		debug!("getting flags via {}", getflags::native().name());

		let cfg = match Config::load_or_default(self.global_opts.config.as_deref()) {
			Ok(cfg) => cfg,
			Err(e) => die(
				CONFIG,
				&format!(
					"{e:#}, exiting. See `lsflags --help` for the format of {}",
					config::DEFAULT_PATH
				),
			),
		};
		trace!("{cfg:?}");

		let listing = Listing {
			recursive: self.list_opts.recursive,
			all: self.list_opts.all || cfg.walk.all,
			directory: self.list_opts.directory,
			long: self.list_opts.long || cfg.output.long,
			skip_unsupported: cfg.walk.skip_unsupported,
		};

		let paths = if self.paths.is_empty() {
			vec![PathBuf::from(".")]
		} else {
			self.paths
		};

		let mut sink = stdout().lock();
		let mut failed_cnt = 0u64;
		for path in &paths {
			failed_cnt += listing.list(&mut sink, path)?;
		}
		sink.flush()?;

		if failed_cnt > 0 {
			die(
				IOERR,
				&format!("unable to get the flags of {failed_cnt} path(s), exiting"),
			)
		}

		info!("process exiting successfully");
		Ok(())
	}

	/// Warn by default, then `LSFLAGS_LOG`, then `-v`/`-q`/`-s`
	fn init_logging(&self) {
		let mut logging_builder = env_logger::Builder::new();

		logging_builder
			.filter_level(LevelFilter::Warn)
			.format_timestamp_nanos()
			.parse_env(
				env_logger::Env::new()
					.filter("LSFLAGS_LOG")
					.write_style("LSFLAGS_LOG_STYLES"),
			);

		if let Some(level) = self.global_opts.level_override() {
			logging_builder.filter_level(level);
		}

		logging_builder.init();
	}
}

impl GlobalOpts {
	/// Level requested on the command line, if any. clap keeps the three switches exclusive.
	fn level_override(&self) -> Option<LevelFilter> {
		match (self.silent, self.quiet, self.verbose) {
			(true, _, _) => Some(LevelFilter::Off),
			(_, true, _) => Some(LevelFilter::Error),
			(_, _, 0) => None,
			(_, _, 1) => Some(LevelFilter::Info),
			(_, _, 2) => Some(LevelFilter::Debug),
			_ => Some(LevelFilter::Trace),
		}
	}
}

impl Listing {
	/// Lists `path`, or the contents of `path` if it is a directory. Returns the number of entries
	/// whose flags could not be read.
	fn list(&self, sink: &mut dyn Write, path: &Path) -> io::Result<u64> {
		// lstat, like lsattr(1): a symlink to a directory is not listed as a directory
		let is_dir = path.symlink_metadata().is_ok_and(|md| md.is_dir());
		if !is_dir || self.directory {
			return self.report(sink, path, false);
		}

		let max_depth = if self.recursive { usize::MAX } else { 1 };
		let mut failed_cnt = 0u64;
		for entry in WalkDir::new(path)
			.min_depth(1)
			.max_depth(max_depth)
			.sort_by_file_name()
			.into_iter()
			.filter_entry(|entry| self.all || !entry.path().is_hidden())
		{
			match entry {
				Ok(entry) => failed_cnt += self.report(sink, entry.path(), self.skip_unsupported)?,
				Err(e) => {
					error!("{e}");
					failed_cnt += 1;
				}
			}
		}
		Ok(failed_cnt)
	}

	fn report(&self, sink: &mut dyn Write, path: &Path, skip_unsupported: bool) -> io::Result<u64> {
		match getflags::get_flags(path) {
			Ok(flags) => {
				lsattr::write_line(sink, self.long, flags, path)?;
				Ok(0)
			}
			Err(e) if skip_unsupported && e.is_unsupported() => {
				trace!("skipping {path:?}: {e}");
				Ok(0)
			}
			Err(e) => {
				error!("{path:?}: {e}");
				Ok(1)
			}
		}
	}
}

/// Logs `msg` at error level and exits with `code`
pub fn die(code: ExitCode, msg: &str) -> ! {
	log::error!("{}", msg);
	std::process::exit(code)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn opts(args: &[&str]) -> GlobalOpts {
		Lsflags::try_parse_from(std::iter::once("lsflags").chain(args.iter().copied()))
			.unwrap()
			.global_opts
	}

	#[test]
	fn verbosity_switches() {
		assert_eq!(opts(&[]).level_override(), None);
		assert_eq!(opts(&["-v"]).level_override(), Some(LevelFilter::Info));
		assert_eq!(opts(&["-vv"]).level_override(), Some(LevelFilter::Debug));
		assert_eq!(opts(&["-vvvv"]).level_override(), Some(LevelFilter::Trace));
		assert_eq!(opts(&["-q"]).level_override(), Some(LevelFilter::Error));
		assert_eq!(opts(&["-s", "x"]).level_override(), Some(LevelFilter::Off));
	}

	#[test]
	fn verbosity_switches_exclusive() {
		assert!(Lsflags::try_parse_from(["lsflags", "-q", "-v"]).is_err());
	}
}
