//! Kept in its own test binary, other tests running in parallel would skew the descriptor count.
#![cfg(any(target_os = "linux", target_os = "android"))]

use lsflags::{get_flags, Error};

fn open_fds() -> usize {
	std::fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn descriptor_released_on_every_path() {
	let before = open_fds();

	// procfs files open fine but have no flags, so the request itself fails
	let err = get_flags("/proc/self/status").unwrap_err();
	assert!(matches!(err, Error::Ioctl(_)), "{err:?}");
	assert_ne!(err.raw_os_error(), 0);
	assert_eq!(open_fds(), before);

	let _ = get_flags(env!("CARGO_MANIFEST_DIR"));
	assert_eq!(open_fds(), before);

	let _ = get_flags("/nonexistent/lsflags");
	assert_eq!(open_fds(), before);
}
