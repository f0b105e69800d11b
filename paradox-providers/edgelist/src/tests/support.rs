use std::{fs, io::Write, path::PathBuf};

use flate2::{Compression, write::GzEncoder};
use tempfile::TempDir;

/// Writes `contents` to `name` inside `dir`, gzip-compressed when asked.
pub(super) fn write_fixture(dir: &TempDir, name: &str, contents: &str, gzip: bool) -> PathBuf {
    let path = dir.path().join(name);
    if gzip {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(contents.as_bytes())
            .expect("in-memory write succeeds");
        let bytes = encoder.finish().expect("gzip stream finishes");
        fs::write(&path, bytes).expect("fixture is writable");
    } else {
        fs::write(&path, contents).expect("fixture is writable");
    }
    path
}

pub(super) const TRIANGLE_WITH_TAIL: &str = "\
% konect-style header
# comment line
1 2
2 3 0.5 1700000000
3 1

3 4  # trailing comment
";
