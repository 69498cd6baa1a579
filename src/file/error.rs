use std::{fmt, io};

/// Failure to get the flags of a path. Every variant except [`Error::Unsupported`] carries the OS
/// error of the call that failed.
#[derive(Debug)]
pub enum Error {
	/// `stat(2)` on the path failed
	Stat(io::Error),
	/// Opening the path for the control request failed
	Open(io::Error),
	/// The "get flags" control request failed. The errno is captured before the descriptor is
	/// closed, so it is never clobbered by `close(2)`.
	Ioctl(io::Error),
	/// No retrieval mechanism for this entry type or platform
	Unsupported,
}

impl Error {
	/// OS error code of the failure, `EOPNOTSUPP` for [`Error::Unsupported`].
	pub fn raw_os_error(&self) -> i32 {
		match self {
			Error::Stat(e) | Error::Open(e) | Error::Ioctl(e) => {
				e.raw_os_error().unwrap_or(libc::EIO)
			}
			Error::Unsupported => libc::EOPNOTSUPP,
		}
	}

	pub fn is_unsupported(&self) -> bool {
		matches!(self, Error::Unsupported)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::Stat(e) => write!(f, "stat: {e}"),
			Error::Open(e) => write!(f, "open: {e}"),
			Error::Ioctl(e) => write!(f, "get flags request: {e}"),
			Error::Unsupported => write!(f, "Operation not supported"),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Stat(e) | Error::Open(e) | Error::Ioctl(e) => Some(e),
			Error::Unsupported => None,
		}
	}
}

impl From<Error> for io::Error {
	fn from(e: Error) -> io::Error {
		match e {
			Error::Stat(e) | Error::Open(e) | Error::Ioctl(e) => e,
			Error::Unsupported => io::Error::from_raw_os_error(libc::EOPNOTSUPP),
		}
	}
}
