use std::{
    cell::RefCell,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{document::StoreDocument, error::StorageError, store::Store};

/// How a [`Loaded`] store came to be.
#[derive(Debug)]
pub enum LoadStatus {
    /// An existing document was read.
    Restored,
    /// No document existed yet.
    Fresh,
    /// The document could not be read or parsed; starting empty.
    Recovered(StorageError),
}

#[derive(Debug)]
pub struct Loaded {
    pub store: Store,
    pub status: LoadStatus,
}

impl Loaded {
    fn empty(status: LoadStatus) -> Self {
        Self {
            store: Store::new(),
            status,
        }
    }
}

/// Where the running log lives between runs.
pub trait StoreBackend {
    /// Never fails: unreadable state is reported through [`LoadStatus`].
    fn load(&self) -> Loaded;
    fn save(&self, store: &Store) -> Result<(), StorageError>;
}

/// JSON document on disk, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl StoreBackend for FileStore {
    fn load(&self) -> Loaded {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "no running log yet, starting empty");
                return Loaded::empty(LoadStatus::Fresh);
            }
            Err(source) => {
                let err = StorageError::Read {
                    path: self.path.clone(),
                    source,
                };
                warn!(error = %err, "could not read running log, starting empty");
                return Loaded::empty(LoadStatus::Recovered(err));
            }
        };

        match serde_json::from_slice::<StoreDocument>(&bytes) {
            Ok(doc) => {
                let store = doc.into_store();
                info!(path = %self.path.display(), days = store.len(), "loaded running log");
                Loaded {
                    store,
                    status: LoadStatus::Restored,
                }
            }
            Err(source) => {
                let err = StorageError::Parse {
                    path: self.path.clone(),
                    source,
                };
                warn!(error = %err, "running log is corrupt, starting empty");
                Loaded::empty(LoadStatus::Recovered(err))
            }
        }
    }

    fn save(&self, store: &Store) -> Result<(), StorageError> {
        let data = serde_json::to_vec_pretty(&StoreDocument::from(store))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.write_err(e))?;

        // Write beside the target and rename over it so readers never see a partial file.
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.write_err(e))?;
        tmp.write_all(&data).map_err(|e| self.write_err(e))?;
        tmp.flush().map_err(|e| self.write_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_err(e.error))?;

        debug!(path = %self.path.display(), days = store.len(), "saved running log");
        Ok(())
    }
}

/// In-process backend for tests and headless use. Holds the last saved JSON.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<Vec<u8>>>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every save fails, for exercising write-error paths.
    pub fn failing() -> Self {
        Self {
            saved: RefCell::new(None),
            fail_writes: true,
        }
    }

    pub fn saved_json(&self) -> Option<String> {
        self.saved
            .borrow()
            .as_ref()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

impl StoreBackend for MemoryStore {
    fn load(&self) -> Loaded {
        match self.saved.borrow().as_deref() {
            None => Loaded::empty(LoadStatus::Fresh),
            Some(bytes) => match serde_json::from_slice::<StoreDocument>(bytes) {
                Ok(doc) => Loaded {
                    store: doc.into_store(),
                    status: LoadStatus::Restored,
                },
                Err(source) => Loaded::empty(LoadStatus::Recovered(StorageError::Parse {
                    path: PathBuf::from("<memory>"),
                    source,
                })),
            },
        }
    }

    fn save(&self, store: &Store) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        let data = serde_json::to_vec_pretty(&StoreDocument::from(store))?;
        *self.saved.borrow_mut() = Some(data);
        Ok(())
    }
}
