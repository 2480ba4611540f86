//! Durable cart persistence.
//!
//! The cart lives under a single unversioned JSON file: the serialized
//! item sequence, written after every mutation. Concurrent carts over the
//! same path are last-writer-wins.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use vitrine_commerce::cart::CartItem;

/// Backend for persisting the cart item sequence.
pub trait CartStorage: Send {
    /// Read the persisted sequence. Malformed or absent state yields an
    /// empty cart; restoring must never fail.
    fn load(&self) -> Vec<CartItem>;

    /// Persist the sequence. Best effort; failures are logged, not raised,
    /// so a full disk never blocks a cart mutation.
    fn save(&self, items: &[CartItem]);
}

/// Cart persisted as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Persist under the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Vec<CartItem> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn save(&self, items: &[CartItem]) {
        match serde_json::to_string(items) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::warn!(path = %self.path.display(), error = %e, "cart save failed");
                }
            }
            Err(e) => tracing::warn!(error = %e, "cart serialization failed"),
        }
    }
}

/// In-memory storage for carts that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<Vec<CartItem>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Vec<CartItem> {
        self.items.lock().map(|i| i.clone()).unwrap_or_default()
    }

    fn save(&self, items: &[CartItem]) {
        if let Ok(mut stored) = self.items.lock() {
            *stored = items.to_vec();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::ids::ProductId;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, "not json {{{").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));

        let items = vec![CartItem {
            product_id: ProductId::new("1"),
            quantity: 2,
        }];
        storage.save(&items);
        assert_eq!(storage.load(), items);
    }
}
