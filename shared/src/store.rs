use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::auth::User;
use crate::dataset::{default_booths, find_booth, replace_booth};
use crate::error::{Error, ErrorCode, Result};
use crate::models::Booth;
use crate::notify::{Notifier, Subscription};
use crate::validation::validate_booth;

pub const BOOTH_DATA_KEY: &str = "boothData";
pub const USER_KEY: &str = "user";
pub const OFFICER_BOOTH_PREFIX: &str = "officerBooth_";

pub fn officer_booth_key(username: &str) -> String {
    format!("{OFFICER_BOOTH_PREFIX}{username}")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::new(ErrorCode::Storage, e.to_string())
    }
}

/// String key/value backend, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError>;
    fn remove(&self, key: &str) -> std::result::Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    BoothsUpdated { booth_id: Option<u32> },
    SessionChanged,
}

/// Application data context: booth list, officer assignments and session,
/// all backed by one key/value store, with change notification for views.
pub struct BoothStore<S: KeyValueStore> {
    storage: S,
    notifier: Notifier<StoreEvent>,
}

impl<S: KeyValueStore> BoothStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage, notifier: Notifier::new() }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn subscribe(&self, listener: impl Fn(&StoreEvent) + 'static) -> Subscription<StoreEvent> {
        self.notifier.subscribe(listener)
    }

    /// Re-broadcasts a change that happened outside this store (another tab).
    pub fn publish(&self, event: StoreEvent) {
        self.notifier.publish(&event);
    }

    /// Persisted booth list, or the bundled dataset if nothing usable is stored.
    pub fn load_booths(&self) -> Vec<Booth> {
        let raw = match self.storage.get(BOOTH_DATA_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default_booths(),
            Err(e) => {
                warn!("Could not read saved booth data: {}", e);
                return default_booths();
            }
        };

        match serde_json::from_str::<Vec<Booth>>(&raw) {
            Ok(booths) => {
                debug!("Loaded {} booths from storage", booths.len());
                booths
            }
            Err(e) => {
                warn!("Error parsing saved booth data, using bundled dataset: {}", e);
                default_booths()
            }
        }
    }

    pub fn save_booths(&self, booths: &[Booth]) -> Result<()> {
        let json = serde_json::to_string(booths)
            .map_err(|e| Error::with_details(ErrorCode::Storage, "Failed to encode booth data", e.to_string()))?;
        self.storage.set(BOOTH_DATA_KEY, &json)?;
        debug!("Saved {} booths", booths.len());
        Ok(())
    }

    pub fn find_booth(&self, id: u32) -> Option<Booth> {
        find_booth(&self.load_booths(), id).cloned()
    }

    /// Validates and persists an edited booth. Nothing is written on failure.
    pub fn commit_edit(&self, booth: Booth) -> Result<()> {
        if let Err(e) = validate_booth(&booth) {
            warn!(booth_id = booth.id, "Rejected edit: {}", e);
            return Err(e.into());
        }

        let booth_id = booth.id;
        let mut booths = self.load_booths();
        replace_booth(&mut booths, booth)?;
        self.save_booths(&booths)?;

        info!(booth_id, "Booth data updated");
        self.notifier.publish(&StoreEvent::BoothsUpdated { booth_id: Some(booth_id) });
        Ok(())
    }

    /// The booth a presiding officer reports for. Picked at random on first
    /// use and remembered per username.
    pub fn assigned_booth(&self, username: &str) -> Result<Booth> {
        let booths = self.load_booths();
        let key = officer_booth_key(username);

        let saved = match self.storage.get(&key) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Could not read booth assignment for {}: {}", username, e);
                None
            }
        };
        if let Some(booth) = saved
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .and_then(|id| find_booth(&booths, id))
        {
            return Ok(booth.clone());
        }

        if booths.is_empty() {
            return Err(Error::new(ErrorCode::NotFound, "No booths available to assign"));
        }
        let booth = booths[random_index(booths.len())].clone();
        self.storage.set(&key, &booth.id.to_string())?;
        info!(username, booth_id = booth.id, "Assigned booth to officer");
        Ok(booth)
    }

    pub fn current_user(&self) -> Option<User> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Could not read stored session: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Error parsing stored user data: {}", e);
                if let Err(e) = self.storage.remove(USER_KEY) {
                    warn!("Could not clear stored session: {}", e);
                }
                None
            }
        }
    }

    pub fn save_user(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)
            .map_err(|e| Error::with_details(ErrorCode::Storage, "Failed to encode session", e.to_string()))?;
        self.storage.set(USER_KEY, &json)?;
        self.notifier.publish(&StoreEvent::SessionChanged);
        Ok(())
    }

    pub fn clear_user(&self) -> Result<()> {
        self.storage.remove(USER_KEY)?;
        self.notifier.publish(&StoreEvent::SessionChanged);
        Ok(())
    }
}

fn random_index(len: usize) -> usize {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => (u64::from_le_bytes(bytes) % len as u64) as usize,
        Err(e) => {
            warn!("No randomness available, assigning first booth: {}", e);
            0
        }
    }
}
