use std::{ffi::CString, io, os::unix::ffi::OsStrExt, path::Path};

use log::trace;

use super::{check_entry_type, FlagSource};
use crate::file::{error::Error, flags::FlagSet};

/// `_IOR('f', 1, long)` in BSD ioctl encoding
const EXT2_IOC_GETFLAGS: libc::c_ulong =
	nix::request_code_read!(b'f', 1, std::mem::size_of::<libc::c_long>()) as libc::c_ulong;

/// `EXT2_IOC_GETFLAGS` through `fsctl(2)`, for Darwin ext2 drivers. Works on the path, no
/// descriptor involved.
pub struct Fsctl;

impl FlagSource for Fsctl {
	fn name(&self) -> &'static str {
		"fsctl(EXT2_IOC_GETFLAGS)"
	}

	fn get_flags(&self, path: &Path) -> Result<FlagSet, Error> {
		check_entry_type(path)?;

		let c_path =
			CString::new(path.as_os_str().as_bytes()).map_err(|e| Error::Open(e.into()))?;

		let mut flags: libc::c_long = 0;
		#[allow(deprecated)]
		let ret = unsafe {
			libc::syscall(
				libc::SYS_fsctl,
				c_path.as_ptr(),
				EXT2_IOC_GETFLAGS,
				&mut flags as *mut libc::c_long,
				0 as libc::c_uint,
			)
		};

		// Either -1 with errno set, or the error code itself
		match ret {
			0 => {
				trace!("{path:?}: EXT2_IOC_GETFLAGS {flags:#x}");
				Ok(FlagSet::from_bits_retain(flags as u32))
			}
			-1 => Err(Error::Ioctl(io::Error::last_os_error())),
			code => Err(Error::Ioctl(io::Error::from_raw_os_error(code))),
		}
	}
}
