//! Durable string key/value storage shared by browsing contexts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store persists through a [`StorageBackend`]. In the browser that
//! is `window.localStorage`, whose `storage` event notifies *other* tabs of a
//! change. [`MemoryStorage`] reproduces the same semantics in-process: every
//! handle returned by [`MemoryStorage::open_context`] behaves like a separate
//! tab over the same persisted map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Errors produced when persisting a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,

    /// The storage area refused the write (quota, private mode).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Callback invoked when another context changed the persisted values.
pub type ChangeListener = Rc<dyn Fn()>;

/// Registration handle for a [`ChangeListener`]; dropping it unsubscribes.
#[must_use = "dropping a subscription unregisters the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription that never fires and has nothing to release.
    pub fn inert() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.cancel.is_some()).finish()
    }
}

/// String key/value persistence with cross-context change notification.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);

    /// Register `listener` for changes made by other contexts.
    fn subscribe(&self, listener: ChangeListener) -> Subscription;
}

// =============================================================================
// IN-MEMORY
// =============================================================================

#[derive(Default)]
struct SharedArea {
    items: HashMap<String, String>,
    listeners: Vec<Registration>,
    next_context: u64,
    next_listener: u64,
}

struct Registration {
    context: u64,
    id: u64,
    listener: ChangeListener,
}

/// In-process storage area. Clones share the same context; use
/// [`MemoryStorage::open_context`] for an independent one.
#[derive(Clone)]
pub struct MemoryStorage {
    area: Rc<RefCell<SharedArea>>,
    context: u64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self { area: Rc::new(RefCell::new(SharedArea::default())), context: 0 }
    }

    /// Open another browsing context over the same persisted values.
    pub fn open_context(&self) -> Self {
        let context = {
            let mut area = self.area.borrow_mut();
            area.next_context += 1;
            area.next_context
        };
        Self { area: Rc::clone(&self.area), context }
    }

    fn notify_others(&self) {
        // Listeners re-enter the area (they usually call `get`), so the borrow
        // must be released before they run.
        let targets: Vec<ChangeListener> = self
            .area
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.context != self.context)
            .map(|r| Rc::clone(&r.listener))
            .collect();
        for listener in targets {
            listener();
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStorage").field("context", &self.context).finish_non_exhaustive()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.area.borrow().items.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let changed = {
            let mut area = self.area.borrow_mut();
            area.items.insert(key.to_owned(), value.to_owned()).as_deref() != Some(value)
        };
        if changed {
            self.notify_others();
        }
        Ok(())
    }

    fn remove(&self, key: &str) {
        let removed = self.area.borrow_mut().items.remove(key).is_some();
        if removed {
            self.notify_others();
        }
    }

    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let id = {
            let mut area = self.area.borrow_mut();
            area.next_listener += 1;
            let id = area.next_listener;
            area.listeners.push(Registration { context: self.context, id, listener });
            id
        };
        let area = Rc::downgrade(&self.area);
        Subscription::new(move || {
            if let Some(area) = area.upgrade() {
                area.borrow_mut().listeners.retain(|r| r.id != id);
            }
        })
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// `window.localStorage` plus the window `storage` event.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "csr")]
impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; sessions will not persist");
        }
        Self { storage }
    }
}

#[cfg(feature = "csr")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "csr")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.remove_item(key);
        }
    }

    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return Subscription::inert();
        };
        let callback = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |_ev: web_sys::StorageEvent| listener());
        if window
            .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not listen for storage events");
            return Subscription::inert();
        }
        Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
            drop(callback);
        })
    }
}
