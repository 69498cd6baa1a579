//! lsattr(1)-style rendering of [`FlagSet`]s

use std::io::{self, Write};

use super::flags::FlagSet;

/// Flag, short letter and long name, in e2fsprogs' display order
pub const TABLE: [(FlagSet, char, &str); 22] = [
	(FlagSet::SECRM, 's', "Secure_Deletion"),
	(FlagSet::UNRM, 'u', "Undelete"),
	(FlagSet::SYNC, 'S', "Synchronous_Updates"),
	(FlagSet::DIRSYNC, 'D', "Synchronous_Directory_Updates"),
	(FlagSet::IMMUTABLE, 'i', "Immutable"),
	(FlagSet::APPEND, 'a', "Append_Only"),
	(FlagSet::NODUMP, 'd', "No_Dump"),
	(FlagSet::NOATIME, 'A', "No_Atime"),
	(FlagSet::COMPR, 'c', "Compression_Requested"),
	(FlagSet::ENCRYPT, 'E', "Encrypted"),
	(FlagSet::JOURNAL_DATA, 'j', "Journaled_Data"),
	(FlagSet::INDEX, 'I', "Indexed_directory"),
	(FlagSet::NOTAIL, 't', "No_Tailmerging"),
	(FlagSet::TOPDIR, 'T', "Top_of_Directory_Hierarchies"),
	(FlagSet::EXTENT, 'e', "Extents"),
	(FlagSet::NOCOW, 'C', "No_COW"),
	(FlagSet::DAX, 'x', "DAX"),
	(FlagSet::CASEFOLD, 'F', "Casefold"),
	(FlagSet::INLINE_DATA, 'N', "Inline_Data"),
	(FlagSet::PROJINHERIT, 'P', "Project_Hierarchy"),
	(FlagSet::VERITY, 'V', "Verity"),
	(FlagSet::NOCOMP, 'm', "Dont_Compress"),
];

/// One column per [`TABLE`] entry, the letter if set, `-` otherwise
pub fn short(flags: FlagSet) -> String {
	TABLE
		.iter()
		.map(|(flag, ch, _)| if flags.contains(*flag) { *ch } else { '-' })
		.collect()
}

/// Comma-separated long names of the set flags, `---` if there are none
pub fn long(flags: FlagSet) -> String {
	let names: Vec<_> = TABLE
		.iter()
		.filter(|(flag, _, _)| flags.contains(*flag))
		.map(|(_, _, name)| *name)
		.collect();

	if names.is_empty() {
		"---".to_owned()
	} else {
		names.join(", ")
	}
}

/// Writes one lsattr-style line for `path` to `sink`
pub fn write_line(
	sink: &mut dyn Write,
	long_format: bool,
	flags: FlagSet,
	path: &std::path::Path,
) -> io::Result<()> {
	if long_format {
		writeln!(sink, "{:<28} {}", path.display(), long(flags))
	} else {
		writeln!(sink, "{} {}", short(flags), path.display())
	}
}
