use std::{
	fs::OpenOptions,
	io,
	os::{fd::AsRawFd, unix::fs::OpenOptionsExt},
	path::Path,
};

use log::trace;

use super::{check_entry_type, FlagSource};
use crate::file::{error::Error, flags::FlagSet};

/// `FS_IOC_GETFLAGS` on a descriptor held for the duration of the call
pub struct Ioctl;

impl FlagSource for Ioctl {
	fn name(&self) -> &'static str {
		"FS_IOC_GETFLAGS"
	}

	fn get_flags(&self, path: &Path) -> Result<FlagSet, Error> {
		check_entry_type(path)?;

		// auto-closed (ignoring errors) by Drop impl, including after a failed ioctl. std opens
		// with open64(), so there is no O_LARGEFILE to add.
		let file = OpenOptions::new()
			.read(true)
			.custom_flags(libc::O_NONBLOCK)
			.open(path)
			.map_err(Error::Open)?;

		// the kernel only ever fills in an int, whatever width the request code claims
		let mut flags: libc::c_int = 0;
		let ret = unsafe {
			ioctls::fs_ioc_getflags(
				file.as_raw_fd(),
				&mut flags as *mut libc::c_int as *mut libc::c_long,
			)
		};
		if ret < 0 {
			// errno must be read before `file` is dropped
			return Err(Error::Ioctl(io::Error::last_os_error()));
		}

		trace!("{path:?}: FS_IOC_GETFLAGS {flags:#x}");
		Ok(FlagSet::from_bits_retain(flags as u32))
	}
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
	use std::fs::File;

	use super::*;

	/// Same request, straight into an int
	fn raw_getflags(path: &Path) -> Result<u32, i32> {
		let file = File::open(path).unwrap();
		let mut flags: libc::c_int = 0;
		let ret = unsafe { libc::ioctl(file.as_raw_fd(), libc::FS_IOC_GETFLAGS as _, &mut flags) };
		if ret < 0 {
			Err(io::Error::last_os_error().raw_os_error().unwrap())
		} else {
			Ok(flags as u32)
		}
	}

	#[test]
	fn matches_int_sized_request() {
		for path in [
			concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"),
			env!("CARGO_MANIFEST_DIR"),
		] {
			let path = Path::new(path);
			let ours = Ioctl
				.get_flags(path)
				.map(|flags| flags.bits())
				.map_err(|e| e.raw_os_error());
			assert_eq!(ours, raw_getflags(path), "{path:?}");
		}
	}
}
