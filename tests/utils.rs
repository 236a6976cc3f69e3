#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Root of the templates bundled with the crate.
pub fn bundled_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("init-templates")
}

/// Relative paths of every file and directory below `dir`.
pub fn relative_entries(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = relative_entries(dir1);
    let files2 = relative_entries(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let (path1, path2) = (dir1.join(file), dir2.join(file));
        if path1.is_file() && fs::read(&path1).unwrap() != fs::read(&path2).unwrap() {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&fs::read(&path1).unwrap()));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&fs::read(&path2).unwrap()));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two trees are identical, printing the differences first if not.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

/// Creates `<root>/<name>/info.json` and the given files under the template directory.
pub fn write_template(root: &Path, name: &str, metadata: &str, files: &[(&str, &[u8])]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("info.json"), metadata).unwrap();
    for (relative, content) in files {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}
