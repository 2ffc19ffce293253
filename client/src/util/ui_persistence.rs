//! Browser `localStorage` glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write/remove behavior so the
//! draft layer can persist form state without repeating web-sys glue. Outside
//! the browser every call is a no-op and reads return `None`.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

/// Storage operations whose failures are logged.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StorageOp {
    Write,
    Remove,
}

/// Log a failed storage call; returns whether it succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn check<E: std::fmt::Debug>(op: StorageOp, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            let op = match op {
                StorageOp::Write => "write",
                StorageOp::Remove => "remove",
            };
            log::warn!("localStorage {op} failed for {key}: {e:?}");
            false
        }
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`, logging quota/security failures.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        check(StorageOp::Write, key, storage.set_item(key, value));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Delete the entry under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        check(StorageOp::Remove, key, storage.remove_item(key));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
