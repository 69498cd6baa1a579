use std::{
	ffi::OsString,
	os::unix::prelude::{OsStrExt, OsStringExt},
	path::{Path, PathBuf},
};

pub trait PathExt {
	fn tilde_expand(&self) -> PathBuf;
	fn tilde_expand_in(&self, home: Option<&Path>) -> PathBuf;
	fn is_hidden(&self) -> bool;
}

impl PathExt for Path {
	/// Expands a leading `~` to `$HOME`, falling back to the passwd entry if it is unset
	fn tilde_expand(&self) -> PathBuf {
		let home = std::env::var_os("HOME").map(PathBuf::from);
		self.tilde_expand_in(home.as_deref())
	}

	/// `~` and `~/...` go to `home` if given and non-empty. `~user/...` and everything else is
	/// left to the tilde-expand crate.
	fn tilde_expand_in(&self, home: Option<&Path>) -> PathBuf {
		match (home, self.strip_prefix("~")) {
			(Some(home), Ok(rest)) if !home.as_os_str().is_empty() => {
				if rest.as_os_str().is_empty() {
					home.to_path_buf()
				} else {
					home.join(rest)
				}
			}
			_ => OsString::from_vec(tilde_expand::tilde_expand(self.as_os_str().as_bytes())).into(),
		}
	}

	/// True for dot-entries, matching ls(1). `.` and `..` have no file name and are not hidden.
	fn is_hidden(&self) -> bool {
		self.file_name()
			.is_some_and(|name| name.as_bytes().first() == Some(&b'.'))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden() {
		assert!(Path::new("a/.git").is_hidden());
		assert!(!Path::new("a/git").is_hidden());
		assert!(!Path::new(".").is_hidden());
		assert!(!Path::new("/").is_hidden());
	}

	#[test]
	fn tilde_only_at_start() {
		assert_eq!(Path::new("/a/~/b").tilde_expand(), PathBuf::from("/a/~/b"));
		assert_eq!(
			Path::new("/a/~/b").tilde_expand_in(Some(Path::new("/h"))),
			PathBuf::from("/a/~/b")
		);
	}

	#[test]
	fn tilde_uses_given_home() {
		let home = Some(Path::new("/h"));
		assert_eq!(
			Path::new("~/.config/lsflags.toml").tilde_expand_in(home),
			PathBuf::from("/h/.config/lsflags.toml")
		);
		assert_eq!(Path::new("~").tilde_expand_in(home), PathBuf::from("/h"));
		assert!(!Path::new("~someone/x")
			.tilde_expand_in(home)
			.starts_with("/h"));
	}
}
