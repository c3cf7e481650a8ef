// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS JetStream Key-Value Attribute Store
//!
//! Persists owned ring instances in a JetStream KV bucket:
//!
//! ```text
//! key   = <domain>.<item>          e.g. cassandra_myring.3
//! value = JSON [ {"name": .., "value": ..}, .. ]
//! ```
//!
//! Both key parts are escaped: bytes outside `[A-Za-z0-9_-]` become `=XX`
//! (uppercase hex), so a part never contains `.` and the key only uses
//! characters JetStream accepts. `a.b` is stored as `a=2Eb`.
//!
//! Selects list the bucket keys, keep those whose first part is exactly the
//! escaped domain, sort them and page by item name. Writes are read-modify-write on a single key; there is
//! no compare-and-swap, so concurrent writers to one item race and the last
//! one wins.

use async_nats::jetstream::{self, kv};
use async_trait::async_trait;
use futures::TryStreamExt;
use tracing::{debug, info};

use crate::config::InstanceStoreConfig;
use crate::errors::{TopologyError, TopologyResult};
use crate::repository::attributes::{
    merge_delete, merge_put, page_of, Attribute, AttributeStore, Item, ReplaceableAttribute,
    SelectPage,
};

/// [`AttributeStore`] backed by a JetStream key-value bucket
pub struct NatsKvAttributeStore {
    kv: kv::Store,
    page_size: usize,
}

impl std::fmt::Debug for NatsKvAttributeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatsKvAttributeStore")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl NatsKvAttributeStore {
    /// Wrap an already opened bucket
    pub fn new(kv: kv::Store, page_size: usize) -> Self {
        Self {
            kv,
            page_size: page_size.max(1),
        }
    }

    /// Connect to NATS and open (or create) the configured bucket
    pub async fn connect(config: &InstanceStoreConfig) -> TopologyResult<Self> {
        let client = async_nats::connect(&config.nats_url)
            .await
            .map_err(|e| TopologyError::unavailable("connect to NATS", e))?;
        let jetstream = jetstream::new(client);

        let kv = match jetstream.get_key_value(&config.kv_bucket).await {
            Ok(kv) => kv,
            Err(_) => {
                info!(bucket = %config.kv_bucket, "Creating instance KV bucket");
                jetstream
                    .create_key_value(kv::Config {
                        bucket: config.kv_bucket.clone(),
                        history: 1,
                        ..Default::default()
                    })
                    .await
                    .map_err(|e| TopologyError::unavailable("create KV bucket", e))?
            }
        };

        Ok(Self::new(kv, config.page_size))
    }

    fn key(domain: &str, item: &str) -> String {
        format!("{}.{}", escape(domain), escape(item))
    }

    async fn load(&self, key: &str) -> TopologyResult<Option<Vec<Attribute>>> {
        let entry = self
            .kv
            .get(key)
            .await
            .map_err(|e| TopologyError::unavailable("read KV entry", e))?;
        match entry {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn store(&self, key: &str, attributes: &[Attribute]) -> TopologyResult<()> {
        let data = serde_json::to_vec(attributes)?;
        self.kv
            .put(key, data.into())
            .await
            .map_err(|e| TopologyError::unavailable("write KV entry", e))?;
        Ok(())
    }

    async fn item_names(&self, domain: &str) -> TopologyResult<Vec<String>> {
        let keys: Vec<String> = self
            .kv
            .keys()
            .await
            .map_err(|e| TopologyError::unavailable("list KV keys", e))?
            .try_collect()
            .await
            .map_err(|e| TopologyError::unavailable("list KV keys", e))?;

        Ok(keys
            .into_iter()
            .filter_map(|key| item_name(&key, domain))
            .collect())
    }
}

fn is_plain(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

/// Escape one key part
fn escape(part: &str) -> String {
    let mut escaped = String::with_capacity(part.len());
    for &byte in part.as_bytes() {
        if is_plain(byte) {
            escaped.push(byte as char);
        } else {
            escaped.push_str(&format!("={:02X}", byte));
        }
    }
    escaped
}

/// Reverse [`escape`]; `None` for a part no escape could have produced
fn unescape(part: &str) -> Option<String> {
    let bytes = part.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'=' {
            let hex = part.get(i + 1..i + 3)?;
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else if is_plain(bytes[i]) {
            decoded.push(bytes[i]);
            i += 1;
        } else {
            return None;
        }
    }
    String::from_utf8(decoded).ok()
}

/// Item name of `key` if the key belongs to `domain`
fn item_name(key: &str, domain: &str) -> Option<String> {
    let (key_domain, item) = key.split_once('.')?;
    if key_domain != escape(domain) {
        return None;
    }
    unescape(item)
}

#[async_trait]
impl AttributeStore for NatsKvAttributeStore {
    async fn select(&self, domain: &str, next_token: Option<&str>) -> TopologyResult<SelectPage> {
        let (names, next_token) = page_of(self.item_names(domain).await?, next_token, self.page_size);

        let mut items = Vec::with_capacity(names.len());
        for name in names {
            // Deleted between listing and reading
            if let Some(attributes) = self.load(&Self::key(domain, &name)).await? {
                items.push(Item { name, attributes });
            }
        }

        debug!(domain, items = items.len(), more = next_token.is_some(), "Selected page from KV");
        Ok(SelectPage { items, next_token })
    }

    async fn get_item(&self, domain: &str, item: &str) -> TopologyResult<Option<Item>> {
        Ok(self
            .load(&Self::key(domain, item))
            .await?
            .map(|attributes| Item {
                name: item.to_string(),
                attributes,
            }))
    }

    async fn put_attributes(
        &self,
        domain: &str,
        item: &str,
        attributes: Vec<ReplaceableAttribute>,
    ) -> TopologyResult<()> {
        let key = Self::key(domain, item);
        let mut existing = self.load(&key).await?.unwrap_or_default();
        merge_put(&mut existing, attributes);
        self.store(&key, &existing).await
    }

    async fn delete_attributes(
        &self,
        domain: &str,
        item: &str,
        attributes: Vec<Attribute>,
    ) -> TopologyResult<()> {
        let key = Self::key(domain, item);
        let Some(mut existing) = self.load(&key).await? else {
            return Ok(());
        };

        if merge_delete(&mut existing, &attributes) {
            self.kv
                .delete(&key)
                .await
                .map_err(|e| TopologyError::unavailable("delete KV entry", e))?;
            Ok(())
        } else {
            self.store(&key, &existing).await
        }
    }
}
