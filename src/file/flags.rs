use bitflags::bitflags;
use linux_raw_sys::general::*;

bitflags! {
	/// Filesystem attribute flags in the ext2/ext4 `FS_*_FL` numbering, independent of the host
	/// platform's native layout.
	///
	/// Values returned by `FS_IOC_GETFLAGS` are kept as-is, so bits without a name here survive a
	/// round trip through `bits()`.
	#[repr(transparent)]
	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
	pub struct FlagSet: u32 {
		const SECRM = FS_SECRM_FL;
		const UNRM = FS_UNRM_FL;
		const COMPR = FS_COMPR_FL;
		const SYNC = FS_SYNC_FL;
		const IMMUTABLE = FS_IMMUTABLE_FL;
		const APPEND = FS_APPEND_FL;
		const NODUMP = FS_NODUMP_FL;
		const NOATIME = FS_NOATIME_FL;
		const NOCOMP = FS_NOCOMP_FL;
		const ENCRYPT = FS_ENCRYPT_FL;
		const INDEX = FS_INDEX_FL;
		const JOURNAL_DATA = FS_JOURNAL_DATA_FL;
		const NOTAIL = FS_NOTAIL_FL;
		const DIRSYNC = FS_DIRSYNC_FL;
		const TOPDIR = FS_TOPDIR_FL;
		const EXTENT = FS_EXTENT_FL;
		const VERITY = FS_VERITY_FL;
		const NOCOW = FS_NOCOW_FL;
		const DAX = FS_DAX_FL;
		const INLINE_DATA = FS_INLINE_DATA_FL;
		const PROJINHERIT = FS_PROJINHERIT_FL;
		const CASEFOLD = FS_CASEFOLD_FL;

		const _ = !0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conventional_numbering() {
		// chattr(1) values, these must never depend on the host
		assert_eq!(FlagSet::IMMUTABLE.bits(), 0x10);
		assert_eq!(FlagSet::APPEND.bits(), 0x20);
		assert_eq!(FlagSet::NODUMP.bits(), 0x40);
		assert_eq!(FlagSet::EXTENT.bits(), 0x0008_0000);
	}

	#[test]
	fn unknown_bits_retained() {
		let raw = FlagSet::IMMUTABLE.bits() | 0x0100;
		let flags = FlagSet::from_bits_retain(raw);
		assert!(flags.contains(FlagSet::IMMUTABLE));
		assert_eq!(flags.bits(), raw);
	}
}
