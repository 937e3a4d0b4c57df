//! Named byte resources that collections are loaded from and saved to.

mod local;
mod mem;

use std::{
    fmt::{Display, Formatter},
    io::{self, Read, Write},
};

pub use local::LocalFs;
pub use mem::{MemFs, MemWriter};

/// Kinds of files written by [`LocalFs`], displayed as their extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// A saved collection.
    Collection,
}

impl Display for FileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Collection => write!(f, "col"),
        }
    }
}

/// A provider of byte streams scoped to a single load or save.
///
/// Readers and writers are dropped before the calling operation returns.
pub trait Store {
    /// Source handed out by [`Store::open_read`].
    type Reader: Read;
    /// Sink handed out by [`Store::open_write`].
    type Writer: Write;

    /// Open `name` for reading. Fails if the resource does not exist.
    fn open_read(&self, name: &str) -> io::Result<Self::Reader>;

    /// Open `name` for writing, creating it or truncating existing contents.
    fn open_write(&self, name: &str) -> io::Result<Self::Writer>;
}
