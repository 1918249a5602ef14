//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .size-deltas.toml in the given directory
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use size_deltas::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Reports source: {:?}", config.sketches_reports_source);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(workspace: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(workspace, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(workspace: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = workspace.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, workspace.display());
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .size-deltas.toml");
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .size-deltas.toml")?;
        config
            .validate()
            .context("Invalid .size-deltas.toml configuration")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    struct MockFileSystem {
        file_content: Option<String>,
        should_fail_read: bool,
    }

    impl MockFileSystem {
        fn new() -> Self {
            Self {
                file_content: None,
                should_fail_read: false,
            }
        }

        fn with_content(content: &str) -> Self {
            Self {
                file_content: Some(content.to_string()),
                should_fail_read: false,
            }
        }

        fn with_read_error() -> Self {
            Self {
                file_content: None,
                should_fail_read: true,
            }
        }
    }

    impl FileSystem for MockFileSystem {
        fn read_to_string(&self, _path: &Path) -> io::Result<String> {
            if self.should_fail_read {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.file_content
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
        }

        fn write(&self, _path: &Path, _contents: impl AsRef<[u8]>) -> io::Result<()> {
            unimplemented!()
        }

        fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
            unimplemented!()
        }

        fn is_dir(&self, _path: &Path) -> bool {
            unimplemented!()
        }

        fn walk_files(&self, _root: &Path) -> io::Result<Vec<PathBuf>> {
            unimplemented!()
        }
    }

    #[test]
    fn test_loader_loads_from_valid_toml() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "sketches-reports-source = \"size-deltas-reports\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(temp.path()).unwrap();
        assert_eq!(
            config.sketches_reports_source.as_deref(),
            Some("size-deltas-reports")
        );
    }

    #[test]
    fn test_loader_with_missing_file_uses_defaults() {
        let fs = MockFileSystem::new();
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_loader_with_invalid_toml_returns_error() {
        let fs = MockFileSystem::with_content("invalid { toml syntax");
        let result = ConfigLoader::load_with_fs(Path::new("/test"), &fs);
        assert!(result.is_err(), "Expected error for invalid TOML");
    }

    #[test]
    fn test_loader_with_permission_error_returns_error() {
        let fs = MockFileSystem::with_read_error();
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_loader_rejects_blank_source() {
        let fs = MockFileSystem::with_content("sketches-reports-source = \"\"");
        let err = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap_err();
        assert!(format!("{:#}", err).contains("cannot be empty"));
    }

    #[test]
    fn test_loader_handles_empty_file() {
        let fs = MockFileSystem::with_content("");
        let config = ConfigLoader::load_with_fs(Path::new("/test"), &fs).unwrap();
        assert!(config.sketches_reports_source.is_none());
    }
}
