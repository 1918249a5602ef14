//! Infrastructure traits for abstracting I/O operations.
//!
//! Report ingestion, configuration loading and output writing go through
//! [`FileSystem`] so they can be exercised against in-memory fakes.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;

    /// Whether the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Every regular file under `root`, recursively, in no particular order.
    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}
