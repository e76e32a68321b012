use std::collections::HashMap;
use std::io::{ErrorKind, Result};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, warn};

use crate::errors;

// Durable string key-value storage; the only thing the session store needs from its backing
// medium.
pub trait Storage {
  fn get(&self, key: &str) -> Result<Option<String>>;
  fn set(&self, key: &str, value: &str) -> Result<()>;
  fn remove(&self, key: &str) -> Result<()>;
}

type Entries = HashMap<String, String>;

fn parse_entries(bytes: &[u8]) -> serde_json::Result<Entries> {
  if bytes.is_empty() {
    return Ok(Entries::new());
  }

  serde_json::from_slice(bytes)
}

// Keeps every entry in a single json object on disk. Each write re-reads the file so separate
// invocations of the cli see each other's changes.
pub struct FileStorage {
  _path: PathBuf,
  _lock: Mutex<()>,
}

impl std::fmt::Debug for FileStorage {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "FileStorage<{}>", self._path.display())
  }
}

impl FileStorage {
  pub fn open<P: AsRef<Path>>(path: P) -> Self {
    FileStorage {
      _path: path.as_ref().to_path_buf(),
      _lock: Mutex::new(()),
    }
  }

  pub fn path(&self) -> &Path {
    &self._path
  }

  fn read_bytes(&self) -> Result<Vec<u8>> {
    match std::fs::read(&self._path) {
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
      other => other,
    }
  }

  fn read_entries(&self) -> Result<Entries> {
    parse_entries(&self.read_bytes()?).map_err(errors::humanize_error)
  }

  fn write_entries(&self, entries: &Entries) -> Result<()> {
    let serialized = serde_json::to_vec_pretty(entries).map_err(errors::humanize_error)?;
    debug!("writing {} storage entries to {:?}", entries.len(), self._path);
    std::fs::write(&self._path, serialized)
  }

  fn modify<F>(&self, change: F) -> Result<()>
  where
    F: FnOnce(&mut Entries),
  {
    let _guard = self
      ._lock
      .lock()
      .map_err(|_| errors::e("storage lock poisoned"))?;
    let mut entries = parse_entries(&self.read_bytes()?).unwrap_or_else(|e| {
      warn!("discarding unparseable storage file {:?} - {}", self._path, e);
      Entries::new()
    });
    change(&mut entries);
    self.write_entries(&entries)
  }
}

impl Storage for FileStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    let _guard = self
      ._lock
      .lock()
      .map_err(|_| errors::e("storage lock poisoned"))?;
    Ok(self.read_entries()?.remove(key))
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    self.modify(|entries| {
      entries.insert(key.to_string(), value.to_string());
    })
  }

  fn remove(&self, key: &str) -> Result<()> {
    self.modify(|entries| {
      entries.remove(key);
    })
  }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
  _entries: Mutex<Entries>,
}

impl MemoryStorage {
  pub fn with_entry(key: &str, value: &str) -> Self {
    let mut entries = Entries::new();
    entries.insert(key.to_string(), value.to_string());
    MemoryStorage {
      _entries: Mutex::new(entries),
    }
  }

  pub fn contains(&self, key: &str) -> bool {
    self
      ._entries
      .lock()
      .map(|entries| entries.contains_key(key))
      .unwrap_or(false)
  }
}

impl Storage for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    let entries = self
      ._entries
      .lock()
      .map_err(|_| errors::e("storage lock poisoned"))?;
    Ok(entries.get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<()> {
    let mut entries = self
      ._entries
      .lock()
      .map_err(|_| errors::e("storage lock poisoned"))?;
    entries.insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<()> {
    let mut entries = self
      ._entries
      .lock()
      .map_err(|_| errors::e("storage lock poisoned"))?;
    entries.remove(key);
    Ok(())
  }
}
