//! Directory trees that detection probes are run against.
//!
//! A tree answers one question: does a file called `name` exist inside the
//! sub-folder `folder`? Both parts compare case-insensitively, since RTP
//! folders copied between platforms rarely preserve case. Asset names in
//! the identity tables carry no extension, so a name also matches a file
//! whose stem equals it when the extension is a known asset format.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{RtpError, Result};
use crate::table::fold_case;

/// File extensions runtime package assets are shipped with.
pub const ASSET_EXTENSIONS: &[&str] = &[
    "png", "bmp", "xyz", "wav", "ogg", "mid", "midi", "mp3", "wma", "opus", "avi", "mpg",
];

/// Read-only, case-insensitive view of an asset directory.
pub trait DirectoryTree {
    /// Locate `name` inside the `folder` sub-folder.
    fn find(&self, folder: &str, name: &str) -> Option<&Path>;

    /// Whether `name` exists inside `folder`.
    fn contains(&self, folder: &str, name: &str) -> bool {
        self.find(folder, name).is_some()
    }
}

#[derive(Debug, Clone, Default)]
struct FolderIndex {
    by_name: HashMap<String, PathBuf>,
    by_stem: HashMap<String, PathBuf>,
}

/// Folded folder name -> folded file names.
#[derive(Debug, Clone, Default)]
struct TreeIndex {
    folders: HashMap<String, FolderIndex>,
}

impl TreeIndex {
    fn insert(&mut self, folder: &str, file_name: &str, path: PathBuf) {
        let entry = self.folders.entry(fold_case(folder)).or_default();
        let file = Path::new(file_name);

        let is_asset = file
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ASSET_EXTENSIONS.contains(&fold_case(ext).as_str()));
        if is_asset {
            if let Some(stem) = file.file_stem().and_then(OsStr::to_str) {
                entry
                    .by_stem
                    .entry(fold_case(stem))
                    .or_insert_with(|| path.clone());
            }
        }

        entry.by_name.entry(fold_case(file_name)).or_insert(path);
    }

    fn find(&self, folder: &str, name: &str) -> Option<&Path> {
        let folder = self.folders.get(&fold_case(folder))?;
        let name = fold_case(name);
        folder
            .by_name
            .get(&name)
            .or_else(|| folder.by_stem.get(&name))
            .map(PathBuf::as_path)
    }

    fn file_count(&self) -> usize {
        self.folders.values().map(|f| f.by_name.len()).sum()
    }
}

/// An asset directory on disk, indexed once by [`FsTree::scan`].
///
/// Only the first two levels are read: category folders directly below
/// the root and the files inside them.
#[derive(Debug, Clone)]
pub struct FsTree {
    root: PathBuf,
    index: TreeIndex,
}

impl FsTree {
    /// Index the asset directory at `root`.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(RtpError::TreeScan {
                path: root.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }

        let mut index = TreeIndex::default();
        for entry in WalkDir::new(root)
            .min_depth(2)
            .max_depth(2)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // A dangling link inside a folder is just a missing asset.
                Err(e)
                    if e.depth() >= 2
                        && e.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) =>
                {
                    trace!(path = ?e.path(), "Skipping dangling entry");
                    continue;
                }
                Err(e) => {
                    return Err(RtpError::TreeScan {
                        path: e
                            .path()
                            .map(Path::to_path_buf)
                            .unwrap_or_else(|| root.to_path_buf()),
                        message: e.to_string(),
                    })
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let folder = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .and_then(OsStr::to_str);
            let file_name = entry.file_name().to_str();
            match (folder, file_name) {
                (Some(folder), Some(file_name)) => {
                    index.insert(folder, file_name, entry.path().to_path_buf())
                }
                _ => trace!(path = %entry.path().display(), "Skipping non UTF-8 path"),
            }
        }

        debug!(
            root = %root.display(),
            folders = index.folders.len(),
            files = index.file_count(),
            "Scanned asset tree"
        );
        Ok(Self {
            root: root.to_path_buf(),
            index,
        })
    }

    /// The scanned directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of files indexed.
    pub fn file_count(&self) -> usize {
        self.index.file_count()
    }
}

impl DirectoryTree for FsTree {
    fn find(&self, folder: &str, name: &str) -> Option<&Path> {
        self.index.find(folder, name)
    }
}

/// An in-memory tree.
///
/// ```
/// use rtpkit::detection::{DirectoryTree, MemoryTree};
///
/// let tree = MemoryTree::new().with_file("Music", "Battle1.wav");
/// assert!(tree.contains("music", "BATTLE1"));
/// assert!(!tree.contains("Sound", "Battle1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    index: TreeIndex,
}

impl MemoryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    pub fn with_file(mut self, folder: &str, file_name: &str) -> Self {
        self.add_file(folder, file_name);
        self
    }

    /// Add a file. Its path is `folder/file_name`.
    pub fn add_file(&mut self, folder: &str, file_name: &str) {
        let path = Path::new(folder).join(file_name);
        self.index.insert(folder, file_name, path);
    }

    /// Number of files added.
    pub fn file_count(&self) -> usize {
        self.index.file_count()
    }
}

impl DirectoryTree for MemoryTree {
    fn find(&self, folder: &str, name: &str) -> Option<&Path> {
        self.index.find(folder, name)
    }
}
