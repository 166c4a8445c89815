use std::rc::Rc;
use shared::store::{BOOTH_DATA_KEY, USER_KEY};
use shared::{BoothStore, KeyValueStore, StorageError, StoreEvent};
use tracing::warn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Storage, StorageEvent, Window};

pub type AppStore = BoothStore<BrowserStorage>;

/// `window.localStorage`, looked up on each access.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_string(), reason: format!("{:?}", e) })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::local()?
            .remove_item(key)
            .map_err(|e| StorageError::Write { key: key.to_string(), reason: format!("{:?}", e) })
    }
}

/// Forwards `storage` events raised by other tabs into the store's notifier.
/// The listener is detached when this value is dropped.
pub struct StorageWatcher {
    window: Window,
    listener: Closure<dyn FnMut(StorageEvent)>,
}

impl Drop for StorageWatcher {
    fn drop(&mut self) {
        let _ = self.window
            .remove_event_listener_with_callback("storage", self.listener.as_ref().unchecked_ref());
    }
}

pub fn watch_other_tabs(store: Rc<AppStore>) -> Option<StorageWatcher> {
    let window = web_sys::window()?;
    let listener = Closure::<dyn FnMut(StorageEvent)>::new(move |event: StorageEvent| {
        match event.key().as_deref() {
            Some(BOOTH_DATA_KEY) => store.publish(StoreEvent::BoothsUpdated { booth_id: None }),
            Some(USER_KEY) => store.publish(StoreEvent::SessionChanged),
            _ => {}
        }
    });

    if let Err(e) = window.add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref()) {
        warn!("Could not watch storage events: {:?}", e);
        return None;
    }
    Some(StorageWatcher { window, listener })
}
