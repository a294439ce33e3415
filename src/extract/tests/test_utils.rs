use std::fs;
use std::path::PathBuf;

/// Creates a fresh scratch directory for one test
///
/// Named after the test so parallel tests never collide.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("imagesieve_test_{}_{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes `size` bytes of filler into the file at `path`
pub fn write_filler(path: &std::path::Path, size: usize) {
    fs::write(path, vec![0u8; size]).unwrap();
}
