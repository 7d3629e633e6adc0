//! Offline caching policy for the page's static assets.
//!
//! One generation of assets lives in a bucket named
//! `{namespace}-{version}-static`. Installing fills the bucket, activating
//! drops older buckets of the same namespace, and same-origin fetches are
//! served cache first with a network fallback that back-fills the bucket.

use crate::error::CacheError;
use async_trait::async_trait;
use futures::future::try_join_all;
use futures::task::{LocalSpawn, LocalSpawnExt};
use log::{debug, info, warn};

/// A versioned snapshot of cached assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheGeneration {
    pub namespace: String,
    pub version: String,
}

impl CacheGeneration {
    pub fn new(namespace: impl Into<String>, version: impl Into<String>) -> Self {
        CacheGeneration {
            namespace: namespace.into(),
            version: version.into(),
        }
    }

    pub fn bucket_name(&self) -> String {
        format!("{}-{}-static", self.namespace, self.version)
    }

    /// True for buckets of this namespace that belong to another generation.
    pub fn is_stale(&self, bucket: &str) -> bool {
        bucket.starts_with(&self.namespace) && bucket != self.bucket_name()
    }
}

/// The execution context the caching policy runs in.
#[async_trait(?Send)]
pub trait WorkerScope {
    type Request: Clone + 'static;
    type Response: 'static;

    /// Origin of the page this worker serves.
    fn origin(&self) -> String;
    /// Origin a request targets, if it can be determined.
    fn request_origin(&self, request: &Self::Request) -> Option<String>;
    async fn fetch(&self, request: &Self::Request) -> Result<Self::Response, CacheError>;
    /// A second, independently consumable copy of a response.
    fn duplicate(&self, response: &Self::Response) -> Result<Self::Response, CacheError>;
    async fn skip_waiting(&self) -> Result<(), CacheError>;
    async fn claim_clients(&self) -> Result<(), CacheError>;
}

#[async_trait(?Send)]
pub trait CacheStorage<Req, Resp>: Clone + 'static {
    type Bucket: CacheBucket<Req, Resp>;

    /// Open a bucket, creating it if needed.
    async fn open(&self, name: &str) -> Result<Self::Bucket, CacheError>;
    async fn keys(&self) -> Result<Vec<String>, CacheError>;
    async fn delete(&self, name: &str) -> Result<bool, CacheError>;
}

#[async_trait(?Send)]
pub trait CacheBucket<Req, Resp> {
    /// Fetch and store every path, or store nothing.
    async fn add_all(&self, paths: &[String]) -> Result<(), CacheError>;
    async fn lookup(&self, request: &Req) -> Result<Option<Resp>, CacheError>;
    async fn put(&self, request: &Req, response: Resp) -> Result<(), CacheError>;
}

pub struct AssetCacheManager<W, C, S> {
    scope: W,
    caches: C,
    spawner: S,
    generation: CacheGeneration,
    assets: Vec<String>,
}

impl<W, C, S> AssetCacheManager<W, C, S>
where
    W: WorkerScope,
    C: CacheStorage<W::Request, W::Response>,
    S: LocalSpawn,
{
    pub fn new(scope: W, caches: C, spawner: S, generation: CacheGeneration, assets: &[&str]) -> Self {
        AssetCacheManager {
            scope,
            caches,
            spawner,
            generation,
            assets: assets.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn generation(&self) -> &CacheGeneration {
        &self.generation
    }

    /// Fill this generation's bucket, then activate without waiting.
    pub async fn install(&self) -> Result<(), CacheError> {
        let name = self.generation.bucket_name();
        let bucket = self.caches.open(&name).await?;
        bucket.add_all(&self.assets).await?;
        info!("cached {} assets in {}", self.assets.len(), name);
        self.scope.skip_waiting().await
    }

    /// Remove stale generations, then take control of open pages.
    pub async fn activate(&self) -> Result<(), CacheError> {
        let stale: Vec<String> = self
            .caches
            .keys()
            .await?
            .into_iter()
            .filter(|name| self.generation.is_stale(name))
            .collect();
        if !stale.is_empty() {
            info!("removing stale caches: {:?}", stale);
        }
        try_join_all(stale.iter().map(|name| self.caches.delete(name))).await?;
        self.scope.claim_clients().await
    }

    /// Whether a request is served by this policy. Cross-origin requests are
    /// left to the browser untouched.
    pub fn intercepts(&self, request: &W::Request) -> bool {
        self.scope.request_origin(request).as_deref() == Some(self.scope.origin().as_str())
    }

    /// Serve a same-origin request from the cache, falling back to the
    /// network. Network failure yields `None`.
    ///
    /// Only the current generation's bucket is searched, not every bucket.
    pub async fn respond(&self, request: W::Request) -> Option<W::Response> {
        let name = self.generation.bucket_name();
        match self.lookup(&name, &request).await {
            Ok(Some(hit)) => return Some(hit),
            Ok(None) => {}
            Err(e) => warn!("cache lookup failed, using network: {}", e),
        }

        let response = match self.scope.fetch(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("network fetch failed: {}", e);
                return None;
            }
        };

        match self.scope.duplicate(&response) {
            Ok(copy) => self.stash(name, request, copy),
            Err(e) => warn!("response not cached: {}", e),
        }
        Some(response)
    }

    async fn lookup(&self, name: &str, request: &W::Request) -> Result<Option<W::Response>, CacheError> {
        self.caches.open(name).await?.lookup(request).await
    }

    /// Store a response in the background; the caller does not wait.
    fn stash(&self, name: String, request: W::Request, response: W::Response) {
        let caches = self.caches.clone();
        let task = async move {
            let stored = match caches.open(&name).await {
                Ok(bucket) => bucket.put(&request, response).await,
                Err(e) => Err(e),
            };
            match stored {
                Ok(()) => debug!("stored response in {}", name),
                Err(e) => warn!("failed to store response in {}: {}", name, e),
            }
        };
        if let Err(e) = self.spawner.spawn_local(task) {
            warn!("could not schedule cache write: {}", e);
        }
    }
}
