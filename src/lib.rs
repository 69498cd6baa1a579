//! Get filesystem attribute flags (immutable, append-only, nodump, ...) of files.
//!
//! Flags are always reported in the ext2/ext4 `FS_*_FL` numbering, see [`FlagSet`], whether they
//! come from `FS_IOC_GETFLAGS` on Linux or from `st_flags` on the BSDs and macOS.
//!
//! ```no_run
//! let flags = lsflags::get_flags("/etc/passwd")?;
//! if flags.contains(lsflags::FlagSet::IMMUTABLE) {
//!     println!("immutable");
//! }
//! # Ok::<(), lsflags::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod file;
pub mod util;

pub use file::{error::Error, flags::FlagSet, getflags::get_flags};
