use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use super::{FileType, Store};

/// Collection files stored under a directory of the local file system.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalFs { root: root.into() }
    }

    /// Directory holding the collection files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, FileType::Collection))
    }
}

impl Store for LocalFs {
    type Reader = BufReader<File>;
    type Writer = BufWriter<File>;

    fn open_read(&self, name: &str) -> io::Result<Self::Reader> {
        File::open(self.path(name)).map(BufReader::new)
    }

    fn open_write(&self, name: &str) -> io::Result<Self::Writer> {
        fs::create_dir_all(&self.root)?;
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.path(name))
            .map(BufWriter::new)
    }
}
