//! Browser-backed storage, clock, clipboard and configuration loading.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use js_sys::Date;
use lume_identity::error::StorageError;
use lume_identity::feedback::Clock;
use lume_identity::storage::KeyValueStore;
use lume_identity::IdentityConfig;
use rand::Rng;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Element holding an optional JSON widget configuration.
const CONFIG_ELEMENT_ID: &str = "lume-config";

/// `window.localStorage` as a [`KeyValueStore`].
///
/// Values are stored as plain strings, not JSON, so the session key holds the bare token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| backend_error("get", key, &err))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| backend_error("set", key, &err))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| backend_error("remove", key, &err))
    }
}

fn backend_error(operation: &'static str, key: &str, err: &JsValue) -> StorageError {
    let detail = err
        .as_string()
        .unwrap_or_else(|| format!("{err:?}"));
    log_storage_error(operation, key, &detail);
    StorageError::Backend {
        operation,
        key: key.to_string(),
        detail,
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}

/// Wall clock from `Date.now()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        Date::now().max(0.0) as u64
    }
}

/// Seed for the placeholder phrase generator, drawn from the browser's crypto source.
pub(crate) fn phrase_seed() -> u64 {
    rand::rng().random()
}

/// Copy `text` to the system clipboard; failures are logged.
pub(crate) fn write_clipboard(text: &str) {
    let promise = window().navigator().clipboard().write_text(text);
    yew::platform::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            console::error!("clipboard write failed", err);
        }
    });
}

/// Read the widget configuration from `<script id="lume-config" type="application/json">`.
///
/// Missing element: defaults. Invalid document: logged, then defaults.
pub(crate) fn load_config() -> IdentityConfig {
    let Some(raw) = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return IdentityConfig::default();
    };
    IdentityConfig::from_json(&raw).unwrap_or_else(|err| {
        console::error!("invalid lume configuration", err.to_string());
        IdentityConfig::default()
    })
}
