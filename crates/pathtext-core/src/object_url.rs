//! Process-local `blob:` URLs for in-memory font data.
//!
//! [`ObjectUrl`] is a scoped handle: the URL stays resolvable until the handle is revoked or
//! dropped, whichever comes first.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

const URL_PREFIX: &str = "blob:pathtext/";

#[derive(Debug, Clone)]
pub struct Blob {
    pub data: Arc<[u8]>,
    pub mime: String,
}

#[derive(Debug, Default)]
pub struct ObjectUrlRegistry {
    entries: Mutex<HashMap<String, Blob>>,
}

impl ObjectUrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Blob>> {
        // A poisoned map is still a valid map; nothing here can leave it half-written.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Registers `data` under a fresh URL. The bytes are shared, not copied.
    pub fn create(&self, data: Arc<[u8]>, mime: &str) -> ObjectUrl<'_> {
        let url = format!("{URL_PREFIX}{}", uuid::Uuid::new_v4());
        self.lock().insert(
            url.clone(),
            Blob {
                data,
                mime: mime.to_string(),
            },
        );
        tracing::trace!(%url, mime, "object URL created");
        ObjectUrl {
            registry: self,
            url,
            revoked: false,
        }
    }

    pub fn resolve(&self, url: &str) -> Option<Blob> {
        self.lock().get(url).cloned()
    }

    pub fn is_object_url(location: &str) -> bool {
        location.starts_with(URL_PREFIX)
    }

    /// Number of URLs that are still resolvable.
    pub fn live_count(&self) -> usize {
        self.lock().len()
    }

    fn revoke(&self, url: &str) {
        if self.lock().remove(url).is_some() {
            tracing::trace!(%url, "object URL revoked");
        }
    }
}

#[derive(Debug)]
pub struct ObjectUrl<'a> {
    registry: &'a ObjectUrlRegistry,
    url: String,
    revoked: bool,
}

impl ObjectUrl<'_> {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn revoke(mut self) {
        self.revoke_inner();
    }

    fn revoke_inner(&mut self) {
        if !self.revoked {
            self.registry.revoke(&self.url);
            self.revoked = true;
        }
    }
}

impl Drop for ObjectUrl<'_> {
    fn drop(&mut self) {
        self.revoke_inner();
    }
}
