/// Persisted identity for the signed-in user

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const EMAIL_KEY: &str = "userEmail";
pub const USER_ID_KEY: &str = "userId";

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.localStorage`; failures are logged and treated as empty
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("Failed to persist {}: {:?}", key, e);
            }
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Failed to remove {}: {:?}", key, e);
            }
        }
    }
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Storage facade for the session: email and user id under fixed keys
#[derive(Clone)]
pub struct SessionStore {
    store: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        SessionStore { store }
    }

    pub fn local() -> Self {
        Self::new(Rc::new(LocalStorage))
    }

    pub fn is_logged_in(&self) -> bool {
        self.email().is_some()
    }

    pub fn email(&self) -> Option<String> {
        self.store.get_item(EMAIL_KEY).filter(|email| !email.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get_item(USER_ID_KEY)
    }

    pub fn set_session(&self, email: &str, user_id: &str) {
        self.store.set_item(EMAIL_KEY, email);
        self.store.set_item(USER_ID_KEY, user_id);
    }

    pub fn clear_session(&self) {
        self.store.remove_item(EMAIL_KEY);
        self.store.remove_item(USER_ID_KEY);
    }
}
