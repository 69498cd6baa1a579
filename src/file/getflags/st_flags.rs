use std::path::Path;

use log::trace;
use nix::sys::stat::stat;

use super::{translate, FlagSource, Translation};
use crate::file::{error::Error, flags::FlagSet};

/// `st_flags` bits with an ext2 counterpart. The rest (`SF_*`, `UF_HIDDEN`, ...) are dropped.
pub const TRANSLATION: &Translation = &[
	(libc::UF_IMMUTABLE as u32, FlagSet::IMMUTABLE),
	(libc::UF_APPEND as u32, FlagSet::APPEND),
	(libc::UF_NODUMP as u32, FlagSet::NODUMP),
];

/// Flags read from the `st_flags` field of `stat(2)`. Follows symlinks.
pub struct StFlags;

impl FlagSource for StFlags {
	fn name(&self) -> &'static str {
		"st_flags"
	}

	fn get_flags(&self, path: &Path) -> Result<FlagSet, Error> {
		let st = stat(path).map_err(|errno| Error::Stat(errno.into()))?;
		trace!("{path:?}: st_flags {:#x}", st.st_flags);
		Ok(translate(st.st_flags as u32, TRANSLATION))
	}
}
