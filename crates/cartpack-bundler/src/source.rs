//! Filesystem access used by asset discovery.
//!
//! Discovery never touches `std::fs` directly; it goes through [`AssetSource`]
//! so a project tree can be supplied in memory. [`FsAssetSource`] reads the
//! real disk, [`MemoryAssetSource`] holds a fixed set of file paths.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Read-only view of the project tree.
pub trait AssetSource: std::fmt::Debug {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`, sorted.
    fn list_dirs(&self, path: &Path) -> Result<Vec<String>>;

    /// Every regular file below `path` at any depth, sorted.
    ///
    /// A missing directory yields an empty list.
    fn walk_files(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// [`AssetSource`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetSource;

impl AssetSource for FsAssetSource {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<String>> {
        let mut dirs = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| walk_error(path, e))?;
            if entry.file_type().is_dir() {
                let name = entry.file_name().to_str().ok_or_else(|| Error::NonUtf8Path {
                    path: entry.path().to_path_buf(),
                })?;
                dirs.push(name.to_string());
            }
        }
        Ok(dirs)
    }

    fn walk_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| walk_error(path, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    Error::Io {
        path,
        source: err.into(),
    }
}

/// [`AssetSource`] over an in-memory set of files.
///
/// Directories exist implicitly as ancestors of the stored files. Paths are
/// cleaned on insert and lookup, so `a/./b/../c.js` and `a/c.js` are the same
/// file.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    files: BTreeSet<PathBuf>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.add_file(path);
        self
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>) {
        self.files.insert(path.as_ref().clean());
    }

    /// Files strictly below `dir`.
    fn below<'a>(&'a self, dir: &'a Path) -> impl Iterator<Item = &'a PathBuf> + 'a {
        self.files
            .range(dir.to_path_buf()..)
            .take_while(move |file| file.starts_with(dir))
            .filter(move |file| file.as_path() != dir)
    }
}

impl AssetSource for MemoryAssetSource {
    fn exists(&self, path: &Path) -> bool {
        let path = path.clean();
        self.files.contains(&path) || self.below(&path).next().is_some()
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<String>> {
        let path = path.clean();
        let mut dirs = BTreeSet::new();
        for file in self.below(&path) {
            let Ok(rest) = file.strip_prefix(&path) else {
                continue;
            };
            let mut components = rest.components();
            // a file directly inside `path` is not a directory
            let (Some(Component::Normal(name)), Some(_)) = (components.next(), components.next())
            else {
                continue;
            };
            let name = name.to_str().ok_or_else(|| Error::NonUtf8Path {
                path: path.join(name),
            })?;
            dirs.insert(name.to_string());
        }
        Ok(dirs.into_iter().collect())
    }

    fn walk_files(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let path = path.clean();
        Ok(self.below(&path).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn memory() -> MemoryAssetSource {
        MemoryAssetSource::new()
            .with_file("/c/app/cartridge/client/default/js/main.js")
            .with_file("/c/app/cartridge/client/default/js/checkout/cart.js")
            .with_file("/c/app/cartridge/client/en_GB/js/main.js")
            .with_file("/c/app/cartridge/client/readme.md")
    }

    #[test]
    fn memory_directories_are_implicit() {
        let source = memory();
        assert!(source.exists(Path::new("/c/app/cartridge/client")));
        assert!(source.exists(Path::new("/c/app/cartridge/client/readme.md")));
        assert!(!source.exists(Path::new("/c/other/cartridge/client")));
        // sibling with a shared name prefix is not a child
        assert!(!source.exists(Path::new("/c/ap")));
    }

    #[test]
    fn memory_list_dirs_skips_files() {
        let dirs = memory()
            .list_dirs(Path::new("/c/app/cartridge/client"))
            .unwrap();
        assert_eq!(dirs, ["default", "en_GB"]);
    }

    #[test]
    fn memory_walk_is_recursive_and_sorted() {
        let files = memory()
            .walk_files(Path::new("/c/app/cartridge/client/default/js"))
            .unwrap();
        assert_eq!(
            files,
            [
                PathBuf::from("/c/app/cartridge/client/default/js/checkout/cart.js"),
                PathBuf::from("/c/app/cartridge/client/default/js/main.js"),
            ]
        );
    }

    #[test]
    fn memory_paths_are_cleaned() {
        let source = MemoryAssetSource::new().with_file("/c/a/./b/../main.js");
        assert!(source.exists(Path::new("/c/a/main.js")));
    }

    #[test]
    fn fs_source_lists_and_walks() {
        let dir = TempDir::new().unwrap();
        let js = dir.path().join("default/js/nested");
        fs::create_dir_all(&js).unwrap();
        fs::create_dir_all(dir.path().join("mobile")).unwrap();
        fs::write(js.join("a.js"), "").unwrap();
        fs::write(dir.path().join("default/js/b.js"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let source = FsAssetSource;
        assert_eq!(source.list_dirs(dir.path()).unwrap(), ["default", "mobile"]);

        let files = source.walk_files(&dir.path().join("default")).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.starts_with(dir.path().join("default"))));

        assert!(source.walk_files(&dir.path().join("absent")).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn fs_walk_fails_on_symlink_loop() {
        let dir = TempDir::new().unwrap();
        let js = dir.path().join("default/js");
        fs::create_dir_all(&js).unwrap();
        fs::write(js.join("main.js"), "").unwrap();
        std::os::unix::fs::symlink(&js, js.join("loop")).unwrap();

        let err = FsAssetSource.walk_files(&js).unwrap_err();
        match err {
            Error::Io { path, .. } => assert!(path.starts_with(&js)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_variant_names_are_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let client = Path::new("/c/app/cartridge/client");
        let source = MemoryAssetSource::new()
            .with_file(client.join(OsStr::from_bytes(b"v\xff")).join("js/main.js"));

        let err = source.list_dirs(client).unwrap_err();
        assert!(matches!(err, Error::NonUtf8Path { .. }));
    }
}
