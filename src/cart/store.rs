use crate::cart::manager::CartItem;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug)]
pub enum CartStoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl std::error::Error for CartStoreError {}

impl std::fmt::Display for CartStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartStoreError::Io(e) => write!(f, "Cart storage I/O failed: {e}"),
            CartStoreError::Serde(e) => write!(f, "Cart snapshot (de)serialization failed: {e}"),
        }
    }
}

/// Durable home for the cart between sessions. The cart is entirely
/// device-local; there is no server-side cart table.
pub trait CartStore {
    fn load(&self) -> Result<Vec<CartItem>, CartStoreError>;
    fn save(&self, items: &[CartItem]) -> Result<(), CartStoreError>;
}

/// JSON-file-backed store. A missing file is an empty cart; an unreadable
/// snapshot is discarded rather than surfaced, so a corrupt file can never
/// wedge the cart.
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileCartStore { path: path.into() }
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Result<Vec<CartItem>, CartStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CartStoreError::Io(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!("Discarding unreadable cart snapshot: {e}");
                let _ = std::fs::remove_file(&self.path);
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CartStoreError> {
        let raw = serde_json::to_string(items).map_err(CartStoreError::Serde)?;
        std::fs::write(&self.path, raw).map_err(CartStoreError::Io)
    }
}

/// In-memory store for fresh sessions and tests.
#[derive(Default)]
pub struct MemoryCartStore {
    items: Mutex<Vec<CartItem>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Vec<CartItem>, CartStoreError> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn save(&self, items: &[CartItem]) -> Result<(), CartStoreError> {
        *self
            .items
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = items.to_vec();
        Ok(())
    }
}
