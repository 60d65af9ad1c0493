use crate::api::{Comment, Error};

/// Where the comment list gets persisted.
///
/// `save` always receives the whole list and overwrites whatever was stored
/// before.
pub trait Storage {
    /// Returns the stored comments, or an empty list if nothing was ever saved
    fn load(&self) -> Result<Vec<Comment>, Error>;

    fn save(&mut self, comments: &[Comment]) -> Result<(), Error>;
}

pub fn encode(comments: &[Comment]) -> Result<String, Error> {
    serde_json::to_string(comments)
        .map_err(|e| Error::Storage(format!("serializing comments: {e}")))
}

/// Parses a stored blob. An empty blob is the same as no blob at all.
pub fn decode(blob: &str) -> Result<Vec<Comment>, Error> {
    if blob.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(blob).map_err(|e| Error::Deserialization(e.to_string()))
}

/// Keeps the serialized comment list in memory
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    blob: Option<String>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> MemoryStorage {
        MemoryStorage {
            blob: Some(blob.into()),
            saves: 0,
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of times `save` was called
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Comment>, Error> {
        match &self.blob {
            None => Ok(Vec::new()),
            Some(blob) => decode(blob),
        }
    }

    fn save(&mut self, comments: &[Comment]) -> Result<(), Error> {
        self.blob = Some(encode(comments)?);
        self.saves += 1;
        Ok(())
    }
}
