//! Browser implementations of the page collaborators.

use crate::app::Vibrator;
use crate::config::{SERVICE_WORKER_SCOPE, SERVICE_WORKER_SCRIPT};
use crate::error::AppError;
use crate::toggle::{CheckboxView, SettingStore};
use log::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, RegistrationOptions, Storage};

/// `window.localStorage`, or nothing when the browser refuses access.
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        let storage = gloo_utils::window().local_storage().ok().flatten();
        if storage.is_none() {
            warn!("localStorage unavailable, settings will not persist");
        }
        BrowserStorage { storage }
    }
}

impl SettingStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                warn!("could not persist {}: {:?}", key, e);
            }
        }
    }
}

/// A checkbox input looked up by element id.
pub struct DomCheckbox {
    input: HtmlInputElement,
}

impl DomCheckbox {
    pub fn bind(id: &str) -> Result<Self, AppError> {
        let element = gloo_utils::document()
            .get_element_by_id(id)
            .ok_or_else(|| AppError::MissingElement(id.to_string()))?;
        let input = element
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| AppError::NotACheckbox(id.to_string()))?;
        Ok(DomCheckbox { input })
    }
}

impl CheckboxView for DomCheckbox {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.input.set_checked(checked);
    }
}

/// `navigator.vibrate` with a pulse pattern.
pub struct NavigatorVibrator;

impl Vibrator for NavigatorVibrator {
    fn vibrate(&self, pattern: &[u32]) {
        let pattern_js = match serde_wasm_bindgen::to_value(pattern) {
            Ok(value) => value,
            Err(e) => {
                warn!("could not convert pulse pattern: {}", e);
                return;
            }
        };
        if !gloo_utils::window().navigator().vibrate_with_pattern(&pattern_js) {
            debug!("vibration request was rejected");
        }
    }
}

/// Register the offline service worker if the browser supports it.
pub async fn register_service_worker() {
    let navigator = gloo_utils::window().navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        info!("service workers not supported, running online only");
        return;
    }

    let options = RegistrationOptions::new();
    options.set_scope(SERVICE_WORKER_SCOPE);
    let registration = navigator
        .service_worker()
        .register_with_options(SERVICE_WORKER_SCRIPT, &options);
    match JsFuture::from(registration).await {
        Ok(_) => info!("service worker registered for scope {}", SERVICE_WORKER_SCOPE),
        Err(e) => warn!("service worker registration failed: {:?}", e),
    }
}
