//! Path helpers for output folder derivation

use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Base name of `path` with its final extension stripped
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Pick an output folder name for `stem` that is unused in this batch
///
/// Two inputs sharing a stem would otherwise write into the same folder;
/// later ones get a numeric suffix instead.
pub fn unique_folder_name(stem: &str, used: &mut HashSet<String>) -> String {
    if used.insert(stem.to_string()) {
        return stem.to_string();
    }

    let mut counter = 2;
    loop {
        let candidate = format!("{}_{}", stem, counter);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        counter += 1;
    }
}

/// Number of regular files directly inside `dir`
///
/// Used to approximate the extracted-image count for tools that do not
/// report one themselves. Subdirectories (including strategy temp dirs)
/// are not counted.
pub fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_file())
                .count()
        })
        .unwrap_or(0)
}
