//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use flate2::{Compression, write::GzEncoder};
use tempfile::TempDir;

use super::{Cli, CliError, run_cli};

/// A hub with four leaves, one of which has a pendant neighbour.
pub(super) const HUB_WITH_TAIL: &str = "\
# hub 1, tail 5-6
1 2
1 3
1 4
1 5
5 6
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn write_edge_list(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn write_gzip_edge_list(
    dir: &TempDir,
    name: &str,
    contents: &str,
) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
    encoder.write_all(contents.as_bytes())?;
    encoder.finish()?;
    Ok(path)
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
