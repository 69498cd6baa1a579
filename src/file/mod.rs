pub mod error;
pub mod flags;
pub mod getflags;
pub mod lsattr;
