//! Service worker module. `sw_loader.js` owns the event listeners and calls
//! into `OfflineCache` once this module has been instantiated.

use js_sys::Promise;
use morse_pulse::worker::{cache_manager, lifecycle_promise, response_promise, BrowserCacheManager};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Request;

#[wasm_bindgen]
pub struct OfflineCache {
    manager: Rc<BrowserCacheManager>,
}

#[wasm_bindgen]
impl OfflineCache {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<OfflineCache, JsValue> {
        Ok(OfflineCache {
            manager: Rc::new(cache_manager()?),
        })
    }

    pub fn install(&self) -> Promise {
        let manager = self.manager.clone();
        lifecycle_promise("install", async move { manager.install().await })
    }

    pub fn activate(&self) -> Promise {
        let manager = self.manager.clone();
        lifecycle_promise("activate", async move { manager.activate().await })
    }

    pub fn intercepts(&self, request: &Request) -> bool {
        self.manager.intercepts(request)
    }

    pub fn respond(&self, request: Request) -> Promise {
        response_promise(self.manager.clone(), request)
    }
}

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}
