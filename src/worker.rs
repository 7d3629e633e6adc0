//! Service worker wiring: browser cache storage behind the caching policy,
//! and the promises handed back to the listeners in `sw_loader.js`.

use crate::cache::{AssetCacheManager, CacheBucket, CacheGeneration, CacheStorage, WorkerScope};
use crate::config::{CACHE_NAMESPACE, CACHE_VERSION, STATIC_ASSETS};
use crate::error::CacheError;
use async_trait::async_trait;
use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use js_sys::{Array, Promise};
use log::{error, info};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{Cache, Request, Response, ServiceWorkerGlobalScope, Url};

pub type BrowserCacheManager = AssetCacheManager<ServiceWorkerHost, BrowserCaches, BrowserSpawner>;

/// Runs spawned tasks on the browser's microtask queue.
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

pub struct ServiceWorkerHost {
    global: ServiceWorkerGlobalScope,
}

#[async_trait(?Send)]
impl WorkerScope for ServiceWorkerHost {
    type Request = Request;
    type Response = Response;

    fn origin(&self) -> String {
        self.global.location().origin()
    }

    fn request_origin(&self, request: &Request) -> Option<String> {
        Url::new(&request.url()).ok().map(|url| url.origin())
    }

    async fn fetch(&self, request: &Request) -> Result<Response, CacheError> {
        let value = JsFuture::from(self.global.fetch_with_request(request))
            .await
            .map_err(|e| CacheError::Network(format!("{:?}", e)))?;
        Ok(value.dyn_into::<Response>()?)
    }

    fn duplicate(&self, response: &Response) -> Result<Response, CacheError> {
        Ok(response.clone()?)
    }

    async fn skip_waiting(&self) -> Result<(), CacheError> {
        JsFuture::from(self.global.skip_waiting()?).await?;
        Ok(())
    }

    async fn claim_clients(&self) -> Result<(), CacheError> {
        JsFuture::from(self.global.clients().claim()).await?;
        Ok(())
    }
}

/// The worker's `caches` object.
#[derive(Clone)]
pub struct BrowserCaches {
    storage: web_sys::CacheStorage,
}

#[derive(Clone)]
pub struct BrowserBucket {
    cache: Cache,
}

#[async_trait(?Send)]
impl CacheStorage<Request, Response> for BrowserCaches {
    type Bucket = BrowserBucket;

    async fn open(&self, name: &str) -> Result<BrowserBucket, CacheError> {
        let cache = JsFuture::from(self.storage.open(name))
            .await
            .map_err(|e| CacheError::Storage(format!("open {}: {:?}", name, e)))?;
        Ok(BrowserBucket {
            cache: cache.dyn_into()?,
        })
    }

    async fn keys(&self) -> Result<Vec<String>, CacheError> {
        let keys: Array = JsFuture::from(self.storage.keys()).await?.dyn_into()?;
        Ok(keys.iter().filter_map(|k| k.as_string()).collect())
    }

    async fn delete(&self, name: &str) -> Result<bool, CacheError> {
        let deleted = JsFuture::from(self.storage.delete(name)).await?;
        Ok(deleted.as_bool().unwrap_or(false))
    }
}

#[async_trait(?Send)]
impl CacheBucket<Request, Response> for BrowserBucket {
    async fn add_all(&self, paths: &[String]) -> Result<(), CacheError> {
        let list: Array = paths.iter().map(|p| JsValue::from_str(p)).collect();
        JsFuture::from(self.cache.add_all_with_str_sequence(&list))
            .await
            .map_err(|e| CacheError::AssetFetch(format!("{:?}", e)))?;
        Ok(())
    }

    async fn lookup(&self, request: &Request) -> Result<Option<Response>, CacheError> {
        let found = JsFuture::from(self.cache.match_with_request(request)).await?;
        if found.is_undefined() {
            return Ok(None);
        }
        Ok(Some(found.dyn_into()?))
    }

    async fn put(&self, request: &Request, response: Response) -> Result<(), CacheError> {
        JsFuture::from(self.cache.put_with_request(request, &response)).await?;
        Ok(())
    }
}

/// Build the caching policy over this worker's global scope.
pub fn cache_manager() -> Result<BrowserCacheManager, CacheError> {
    let global: ServiceWorkerGlobalScope = js_sys::global().dyn_into().map_err(JsValue::from)?;
    let caches = BrowserCaches {
        storage: global.caches()?,
    };
    let manager = AssetCacheManager::new(
        ServiceWorkerHost { global },
        caches,
        BrowserSpawner,
        CacheGeneration::new(CACHE_NAMESPACE, CACHE_VERSION),
        STATIC_ASSETS,
    );
    info!(
        "service worker ready for {}",
        manager.generation().bucket_name()
    );
    Ok(manager)
}

/// Run a lifecycle step as a promise for `ExtendableEvent.waitUntil`.
/// A failed step rejects, so the browser does not advance the worker.
pub fn lifecycle_promise<F>(phase: &'static str, work: F) -> Promise
where
    F: std::future::Future<Output = Result<(), CacheError>> + 'static,
{
    future_to_promise(async move {
        match work.await {
            Ok(()) => {
                info!("{} complete", phase);
                Ok(JsValue::UNDEFINED)
            }
            Err(e) => {
                error!("{} failed: {}", phase, e);
                Err(e.into())
            }
        }
    })
}

/// Answer a same-origin request, as a promise for `FetchEvent.respondWith`.
pub fn response_promise(manager: Rc<BrowserCacheManager>, request: Request) -> Promise {
    future_to_promise(async move {
        // A failed network fetch resolves to `undefined`, which the browser
        // reports as a failed load.
        Ok(match manager.respond(request).await {
            Some(response) => response.into(),
            None => JsValue::UNDEFINED,
        })
    })
}
