#![allow(dead_code)]

pub mod command;

pub const REGISTERED: [&str; 5] = ["init", "add", "commit", "log", "checkout"];

/// Panics if anything was created inside `dir`.
pub fn assert_dir_untouched(dir: &std::path::Path) {
    let entries = std::fs::read_dir(dir)
        .expect("Failed to read temp dir")
        .map(|entry| entry.expect("Failed to read dir entry").file_name())
        .collect::<Vec<_>>();

    assert!(entries.is_empty(), "expected no files, found {entries:?}");
}
