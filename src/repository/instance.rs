// Copyright (c) 2025 - Cowboy AI, Inc.
//! Instance Repository
//!
//! CRUD for instances of owned rings, i.e. rings whose membership is written
//! here rather than discovered. Each ring lives in its own attribute-store
//! domain and each instance is one item named by its identifier.
//!
//! # Attribute Schema
//!
//! | Attribute | Field | Write mode |
//! |-----------|-------|------------|
//! | `id` | identifier | append |
//! | `datacenter` | datacenter | replace |
//! | `rack` | rack | replace |
//! | `hostname` | hostname | replace |
//! | `publicIpAddress` | public IP | replace |
//! | `fullyQualifiedDomainName` | FQDN | replace |
//!
//! Unknown attributes are ignored on read. There is no read-after-write
//! guarantee beyond what the store provides, and no versioning: the last
//! writer wins.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use super::attributes::{Attribute, AttributeStore, Item, ReplaceableAttribute};
use crate::config::InstanceStoreConfig;
use crate::domain::{CassandraInstance, InstanceId};
use crate::errors::{TopologyError, TopologyResult};

pub const ID_KEY: &str = "id";
pub const DATACENTER_KEY: &str = "datacenter";
pub const RACK_KEY: &str = "rack";
pub const HOSTNAME_KEY: &str = "hostname";
pub const PUBLIC_IP_ADDRESS_KEY: &str = "publicIpAddress";
pub const FULLY_QUALIFIED_DOMAIN_NAME_KEY: &str = "fullyQualifiedDomainName";

/// Persistence of instances for owned rings
#[async_trait]
pub trait InstanceRepository: Send + Sync {
    /// Every instance of `ring`, in identifier order
    async fn find_all(&self, ring: &str) -> TopologyResult<Vec<CassandraInstance>>;

    async fn find_by_id(
        &self,
        ring: &str,
        id: &InstanceId,
    ) -> TopologyResult<Option<CassandraInstance>>;

    /// Insert or update the instance with this identifier
    async fn save(&self, ring: &str, instance: &CassandraInstance) -> TopologyResult<()>;

    async fn delete(&self, ring: &str, instance: &CassandraInstance) -> TopologyResult<()>;
}

/// [`InstanceRepository`] over any [`AttributeStore`]
#[derive(Debug)]
pub struct AttributeInstanceRepository<S> {
    store: S,
    config: InstanceStoreConfig,
}

impl<S: AttributeStore> AttributeInstanceRepository<S> {
    pub fn new(store: S, config: InstanceStoreConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn domain(&self, ring: &str) -> String {
        self.config.domain(ring)
    }
}

#[async_trait]
impl<S: AttributeStore> InstanceRepository for AttributeInstanceRepository<S> {
    async fn find_all(&self, ring: &str) -> TopologyResult<Vec<CassandraInstance>> {
        let domain = self.domain(ring);
        let mut instances = BTreeMap::new();
        let mut next_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();
        let mut pages = 0usize;

        loop {
            let page = self.store.select(&domain, next_token.as_deref()).await?;
            pages += 1;

            for item in &page.items {
                let instance = transform(item);
                instances.insert(instance.id.clone(), instance);
            }

            // Pagination must make progress: a token seen before means a cycle
            match page.next_token {
                Some(token) if !seen_tokens.insert(token.clone()) => {
                    return Err(TopologyError::BackingStoreUnavailable(format!(
                        "select on {} returned continuation token {:?} twice",
                        domain, token
                    )));
                }
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        debug!(domain = %domain, pages, instances = instances.len(), "Loaded ring instances");
        Ok(instances.into_values().collect())
    }

    async fn find_by_id(
        &self,
        ring: &str,
        id: &InstanceId,
    ) -> TopologyResult<Option<CassandraInstance>> {
        let item = self.store.get_item(&self.domain(ring), &id.to_string()).await?;
        Ok(item.as_ref().map(transform))
    }

    async fn save(&self, ring: &str, instance: &CassandraInstance) -> TopologyResult<()> {
        self.store
            .put_attributes(
                &self.domain(ring),
                &instance.id.to_string(),
                save_attributes(instance),
            )
            .await
    }

    async fn delete(&self, ring: &str, instance: &CassandraInstance) -> TopologyResult<()> {
        self.store
            .delete_attributes(
                &self.domain(ring),
                &instance.id.to_string(),
                delete_attributes(instance),
            )
            .await
    }
}

/// Map a stored item onto an instance
///
/// A missing `id` attribute falls back to the item name.
pub fn transform(item: &Item) -> CassandraInstance {
    let mut builder = CassandraInstance::builder(InstanceId::parse(&item.name));
    for attr in &item.attributes {
        builder = match attr.name.as_str() {
            ID_KEY => builder.id(InstanceId::parse(&attr.value)),
            DATACENTER_KEY => builder.datacenter(attr.value.as_str()),
            RACK_KEY => builder.rack(attr.value.as_str()),
            HOSTNAME_KEY => builder.hostname(attr.value.as_str()),
            PUBLIC_IP_ADDRESS_KEY => builder.public_ip_address(attr.value.as_str()),
            FULLY_QUALIFIED_DOMAIN_NAME_KEY => {
                builder.fully_qualified_domain_name(attr.value.as_str())
            }
            _ => builder,
        };
    }
    builder.build()
}

pub fn save_attributes(instance: &CassandraInstance) -> Vec<ReplaceableAttribute> {
    vec![
        ReplaceableAttribute::new(ID_KEY, instance.id.to_string(), false),
        ReplaceableAttribute::new(DATACENTER_KEY, instance.datacenter.as_str(), true),
        ReplaceableAttribute::new(RACK_KEY, instance.rack.as_str(), true),
        ReplaceableAttribute::new(HOSTNAME_KEY, instance.hostname.as_str(), true),
        ReplaceableAttribute::new(PUBLIC_IP_ADDRESS_KEY, instance.public_ip_address.as_str(), true),
        ReplaceableAttribute::new(
            FULLY_QUALIFIED_DOMAIN_NAME_KEY,
            instance.fully_qualified_domain_name.as_str(),
            true,
        ),
    ]
}

pub fn delete_attributes(instance: &CassandraInstance) -> Vec<Attribute> {
    vec![
        Attribute::new(ID_KEY, instance.id.to_string()),
        Attribute::new(DATACENTER_KEY, instance.datacenter.as_str()),
        Attribute::new(RACK_KEY, instance.rack.as_str()),
        Attribute::new(HOSTNAME_KEY, instance.hostname.as_str()),
        Attribute::new(PUBLIC_IP_ADDRESS_KEY, instance.public_ip_address.as_str()),
        Attribute::new(
            FULLY_QUALIFIED_DOMAIN_NAME_KEY,
            instance.fully_qualified_domain_name.as_str(),
        ),
    ]
}
