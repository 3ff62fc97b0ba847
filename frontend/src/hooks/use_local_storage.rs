//! Hook for typed localStorage persistence.
//!
//! Used for the single slot the site persists: the admin session. The value
//! is loaded once on mount; `set` writes through to storage and `clear`
//! removes the key entirely (logout).

use serde::{de::DeserializeOwned, Serialize};
use yew::prelude::*;

/// Return value from the use_local_storage hook.
pub struct UseLocalStorage<T: Clone + PartialEq + 'static> {
    /// Current value
    pub value: T,
    /// Set a new value (automatically persists to localStorage)
    pub set: Callback<T>,
    /// Remove the key from storage and reset the value to its default
    pub clear: Callback<()>,
}

/// Load a value from localStorage, falling back to the default on any failure
/// (missing key, storage unavailable, or a value that no longer parses).
fn load_from_storage<T: DeserializeOwned + Default>(key: &str) -> T {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn save_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Ok(json) = serde_json::to_string(value) {
            let _ = storage.set_item(key, &json);
        }
    }
}

fn remove_from_storage(key: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(key);
    }
}

/// Hook for managing state that persists to localStorage.
///
/// # Example
/// ```ignore
/// let stored = use_local_storage::<Option<AdminSession>>(session::STORAGE_KEY);
/// stored.set.emit(Some(session));   // persist a fresh login
/// stored.clear.emit(());            // logout
/// ```
#[hook]
pub fn use_local_storage<T>(key: &'static str) -> UseLocalStorage<T>
where
    T: Clone + PartialEq + Serialize + DeserializeOwned + Default + 'static,
{
    let state = use_state(|| load_from_storage::<T>(key));

    let set = {
        let state = state.clone();
        Callback::from(move |new_value: T| {
            save_to_storage(key, &new_value);
            state.set(new_value);
        })
    };

    let clear = {
        let state = state.clone();
        Callback::from(move |_| {
            remove_from_storage(key);
            state.set(T::default());
        })
    };

    UseLocalStorage {
        value: (*state).clone(),
        set,
        clear,
    }
}
