use gloo_storage::{LocalStorage, Storage as GlooStorage};
use parley_client::{
    api::{Comment, Error},
    storage, Storage,
};

/// Persists the comment list as JSON in the browser's local storage
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: String) -> BrowserStorage {
        BrowserStorage { key }
    }
}

fn parse_blob(blob: Option<String>) -> Result<Vec<Comment>, Error> {
    match blob {
        None => Ok(Vec::new()),
        Some(blob) => storage::decode(&blob),
    }
}

impl Storage for BrowserStorage {
    fn load(&self) -> Result<Vec<Comment>, Error> {
        let blob = LocalStorage::raw()
            .get_item(&self.key)
            .map_err(|e| Error::Storage(format!("reading {:?}: {e:?}", self.key)))?;
        parse_blob(blob)
    }

    fn save(&mut self, comments: &[Comment]) -> Result<(), Error> {
        let blob = storage::encode(comments)?;
        LocalStorage::raw()
            .set_item(&self.key, &blob)
            .map_err(|e| Error::Storage(format!("writing {:?}: {e:?}", self.key)))
    }
}
