#![allow(dead_code)]

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use textconvert::cli::{run, Args, GenerationReport};
use walkdir::WalkDir;

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |dir: &Path| {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect::<std::collections::HashSet<_>>()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {dir1:?}");
    println!("Expected output: {dir2:?}");

    for file in files1.difference(&files2) {
        println!("  + {file:?} (only in actual output)");
    }
    for file in files2.difference(&files1) {
        println!("  - {file:?} (only in expected output)");
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let expected = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if actual != expected {
            println!("\n  File: {file:?}");
            println!("  --- Actual content:\n{actual}");
            println!("  --- Expected content:\n{expected}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Arguments for a plain generation run.
pub fn generate_args(root_dir: &Path, output_dir: &Path) -> Args {
    Args {
        root_dir: root_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        only: vec![],
        context: None,
        context_file: None,
        dry_run: false,
        check: false,
    }
}

/// Runs a generation of `root_dir` into a fresh directory and asserts the
/// output tree is identical to `expected_dir`.
///
/// # Arguments
/// * `root_dir` - Root directory holding `Templates`.
/// * `expected_dir` - Path to the directory with expected output.
/// * `context` - Optional inline JSON context.
pub fn run_and_assert(
    root_dir: &str,
    expected_dir: &str,
    context: Option<&str>,
) -> (tempfile::TempDir, GenerationReport) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut args = generate_args(Path::new(root_dir), tmp_dir.path());
    args.context = context.map(str::to_string);

    let report = run(args).unwrap();
    match dir_diff::is_different(tmp_dir.path(), expected_dir) {
        Ok(true) => {
            print_dir_diff(tmp_dir.path(), expected_dir.as_ref());
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => debug!("Error comparing directories: {e:?}"),
    }
    assert!(!dir_diff::is_different(tmp_dir.path(), expected_dir).unwrap());
    (tmp_dir, report)
}

/// Writes `files` (relative path, content) under `root`.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path: PathBuf = relative.split('/').fold(root.to_path_buf(), |p, s| p.join(s));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}
