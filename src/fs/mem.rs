use std::{
    cell::RefCell,
    collections::HashMap,
    io::{self, Cursor, Write},
    rc::Rc,
};

use super::Store;

type Files = Rc<RefCell<HashMap<String, Vec<u8>>>>;

/// In-memory named buffers. Clones share the same buffers.
#[derive(Debug, Clone, Default)]
pub struct MemFs {
    files: Files,
}

impl MemFs {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the bytes stored under `name`.
    pub fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(name).cloned()
    }

    /// Replace the bytes stored under `name`.
    pub fn insert(&self, name: impl Into<String>, bytes: Vec<u8>) {
        self.files.borrow_mut().insert(name.into(), bytes);
    }

    /// Whether a resource called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.files.borrow().contains_key(name)
    }
}

impl Store for MemFs {
    type Reader = Cursor<Vec<u8>>;
    type Writer = MemWriter;

    fn open_read(&self, name: &str) -> io::Result<Self::Reader> {
        self.contents(name)
            .map(Cursor::new)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }

    fn open_write(&self, name: &str) -> io::Result<Self::Writer> {
        self.files.borrow_mut().insert(name.to_string(), Vec::new());
        Ok(MemWriter {
            name: name.to_string(),
            files: self.files.clone(),
        })
    }
}

/// Sink appending to one [`MemFs`] buffer.
#[derive(Debug)]
pub struct MemWriter {
    name: String,
    files: Files,
}

impl Write for MemWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.files
            .borrow_mut()
            .entry(self.name.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use super::*;

    #[test]
    fn clones_share_buffers() {
        let store = MemFs::new();
        let other = store.clone();

        store.open_write("a").unwrap().write_all(b"xyz").unwrap();
        assert_eq!(other.contents("a").as_deref(), Some(&b"xyz"[..]));

        let mut buf = Vec::new();
        other.open_read("a").unwrap().read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"xyz");
    }

    #[test]
    fn open_write_truncates() {
        let store = MemFs::new();
        store.insert("a", b"stale".to_vec());

        let writer = store.open_write("a").unwrap();
        drop(writer);
        assert_eq!(store.contents("a"), Some(Vec::new()));
    }

    #[test]
    fn missing_resource_fails_to_open() {
        let store = MemFs::new();
        assert!(!store.contains("absent"));
        assert_eq!(
            store.open_read("absent").unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
    }
}
