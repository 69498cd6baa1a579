//! Getting the attribute flags of a path through whichever mechanism the target platform offers.
//!
//! The mechanism is fixed at compile time:
//! - Linux and Android: `FS_IOC_GETFLAGS` on a short-lived descriptor ([`ioctl`])
//! - macOS with the `ext2-fsctl` feature: `fsctl(2)` with `EXT2_IOC_GETFLAGS` ([`fsctl`])
//! - macOS, iOS and the BSDs: `st_flags` of `stat(2)`, translated ([`st_flags`])
//! - anything else: [`Unsupported`]

#[cfg(all(target_os = "macos", feature = "ext2-fsctl"))]
pub mod fsctl;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod ioctl;
#[cfg(all(
	any(
		target_os = "macos",
		target_os = "ios",
		target_os = "freebsd",
		target_os = "netbsd",
		target_os = "openbsd",
		target_os = "dragonfly"
	),
	not(all(target_os = "macos", feature = "ext2-fsctl"))
))]
pub mod st_flags;

use std::path::Path;

use log::{debug, trace};

use super::{error::Error, flags::FlagSet};

/// A way of getting the attribute flags of a path
pub trait FlagSource: Sync {
	/// Short name of the mechanism, for logging
	fn name(&self) -> &'static str;

	fn get_flags(&self, path: &Path) -> Result<FlagSet, Error>;
}

/// Fallback for platforms without any mechanism. Never touches the filesystem.
pub struct Unsupported;

impl FlagSource for Unsupported {
	fn name(&self) -> &'static str {
		"unsupported"
	}

	fn get_flags(&self, path: &Path) -> Result<FlagSet, Error> {
		trace!("no flag source on this platform, not looking at {path:?}");
		Err(Error::Unsupported)
	}
}

#[cfg(any(target_os = "linux", target_os = "android"))]
static NATIVE: &dyn FlagSource = &ioctl::Ioctl;

#[cfg(all(target_os = "macos", feature = "ext2-fsctl"))]
static NATIVE: &dyn FlagSource = &fsctl::Fsctl;

#[cfg(all(
	any(
		target_os = "macos",
		target_os = "ios",
		target_os = "freebsd",
		target_os = "netbsd",
		target_os = "openbsd",
		target_os = "dragonfly"
	),
	not(all(target_os = "macos", feature = "ext2-fsctl"))
))]
static NATIVE: &dyn FlagSource = &st_flags::StFlags;

#[cfg(not(any(
	target_os = "linux",
	target_os = "android",
	target_os = "macos",
	target_os = "ios",
	target_os = "freebsd",
	target_os = "netbsd",
	target_os = "openbsd",
	target_os = "dragonfly"
)))]
static NATIVE: &dyn FlagSource = &Unsupported;

/// The flag source selected for this build
pub fn native() -> &'static dyn FlagSource {
	NATIVE
}

/// Gets the attribute flags of `path` via [`native()`]. Any failure is returned as-is, nothing is
/// retried.
pub fn get_flags<P: AsRef<Path>>(path: P) -> Result<FlagSet, Error> {
	let path = path.as_ref();
	NATIVE.get_flags(path).map_err(|e| {
		debug!("{}({path:?}) failed: {e}", NATIVE.name());
		e
	})
}

/// Maps native flag bits to their normalized counterparts. Native bits missing from the table
/// are dropped.
pub type Translation = [(u32, FlagSet)];

pub fn translate(native: u32, table: &Translation) -> FlagSet {
	table
		.iter()
		.filter(|(bit, _)| native & bit != 0)
		.fold(FlagSet::empty(), |acc, (_, normalized)| acc | *normalized)
}

/// Rejects entries the control request does not apply to. Only regular files and directories
/// qualify. A failing `lstat` is not an error here, the request itself will report it.
#[cfg(any(
	target_os = "linux",
	target_os = "android",
	all(target_os = "macos", feature = "ext2-fsctl")
))]
fn check_entry_type(path: &Path) -> Result<(), Error> {
	match std::fs::symlink_metadata(path) {
		Ok(md) if !md.is_file() && !md.is_dir() => {
			trace!("{path:?} is {:?}, not a file or directory", md.file_type());
			Err(Error::Unsupported)
		}
		_ => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const TABLE: &Translation = &[
		(0x2, FlagSet::IMMUTABLE),
		(0x4, FlagSet::APPEND),
		(0x1, FlagSet::NODUMP),
	];

	#[test]
	fn translate_each_entry() {
		for (native, normalized) in TABLE {
			assert_eq!(translate(*native, TABLE), *normalized);
		}
	}

	#[test]
	fn translate_drops_unknown_bits() {
		assert_eq!(translate(0, TABLE), FlagSet::empty());
		assert_eq!(translate(0x8000_0010, TABLE), FlagSet::empty());
		assert_eq!(
			translate(0x8000_0003, TABLE),
			FlagSet::IMMUTABLE | FlagSet::NODUMP
		);
	}

	#[test]
	fn unsupported_never_touches_fs() {
		let err = Unsupported
			.get_flags(Path::new("/nonexistent/unsupported"))
			.unwrap_err();
		assert!(err.is_unsupported());
	}
}
