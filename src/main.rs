use clap::Parser;

use lsflags::cli::Lsflags;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	Lsflags::parse().exec()
}
