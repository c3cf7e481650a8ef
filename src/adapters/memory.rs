// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory attribute store

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::TopologyResult;
use crate::repository::attributes::{
    merge_delete, merge_put, page_of, Attribute, AttributeStore, Item, ReplaceableAttribute,
    SelectPage,
};

type Domain = BTreeMap<String, Vec<Attribute>>;

/// [`AttributeStore`] held entirely in process memory
///
/// Pages hold at most `page_size` items so that callers exercise the same
/// continuation-token loop they would against a remote store.
#[derive(Debug)]
pub struct MemoryAttributeStore {
    domains: RwLock<BTreeMap<String, Domain>>,
    page_size: usize,
}

impl Default for MemoryAttributeStore {
    fn default() -> Self {
        Self::new(100)
    }
}

impl MemoryAttributeStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            domains: RwLock::new(BTreeMap::new()),
            page_size: page_size.max(1),
        }
    }

    /// Number of items currently stored in `domain`
    pub async fn item_count(&self, domain: &str) -> usize {
        self.domains
            .read()
            .await
            .get(domain)
            .map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl AttributeStore for MemoryAttributeStore {
    async fn select(&self, domain: &str, next_token: Option<&str>) -> TopologyResult<SelectPage> {
        let domains = self.domains.read().await;
        let Some(items) = domains.get(domain) else {
            return Ok(SelectPage::default());
        };

        let (names, next_token) = page_of(items.keys().cloned().collect(), next_token, self.page_size);
        let items = names
            .into_iter()
            .filter_map(|name| {
                items.get(&name).map(|attributes| Item {
                    name,
                    attributes: attributes.clone(),
                })
            })
            .collect::<Vec<_>>();

        debug!(domain, items = items.len(), more = next_token.is_some(), "Selected page");
        Ok(SelectPage { items, next_token })
    }

    async fn get_item(&self, domain: &str, item: &str) -> TopologyResult<Option<Item>> {
        let domains = self.domains.read().await;
        Ok(domains
            .get(domain)
            .and_then(|items| items.get(item))
            .map(|attributes| Item {
                name: item.to_string(),
                attributes: attributes.clone(),
            }))
    }

    async fn put_attributes(
        &self,
        domain: &str,
        item: &str,
        attributes: Vec<ReplaceableAttribute>,
    ) -> TopologyResult<()> {
        let mut domains = self.domains.write().await;
        let existing = domains
            .entry(domain.to_string())
            .or_default()
            .entry(item.to_string())
            .or_default();
        merge_put(existing, attributes);
        Ok(())
    }

    async fn delete_attributes(
        &self,
        domain: &str,
        item: &str,
        attributes: Vec<Attribute>,
    ) -> TopologyResult<()> {
        let mut domains = self.domains.write().await;
        if let Some(items) = domains.get_mut(domain) {
            let emptied = items
                .get_mut(item)
                .is_some_and(|existing| merge_delete(existing, &attributes));
            if emptied {
                items.remove(item);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = MemoryAttributeStore::default();
        store
            .put_attributes(
                "cassandra_myring",
                "1",
                vec![
                    ReplaceableAttribute::new("id", "1", false),
                    ReplaceableAttribute::new("rack", "a", true),
                ],
            )
            .await
            .unwrap();

        let item = store.get_item("cassandra_myring", "1").await.unwrap().unwrap();
        assert_eq!(
            item.attributes,
            vec![Attribute::new("id", "1"), Attribute::new("rack", "a")]
        );
        assert!(store.get_item("cassandra_other", "1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_select_pages_through_domain() {
        let store = MemoryAttributeStore::new(2);
        for name in ["1", "2", "3"] {
            store
                .put_attributes("d", name, vec![ReplaceableAttribute::new("id", name, false)])
                .await
                .unwrap();
        }

        let first = store.select("d", None).await.unwrap();
        assert_eq!(first.items.len(), 2);
        let token = first.next_token.expect("second page");

        let second = store.select("d", Some(&token)).await.unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].name, "3");
        assert!(second.next_token.is_none());
    }

    #[tokio::test]
    async fn test_select_unknown_domain_is_empty() {
        let store = MemoryAttributeStore::default();
        assert_eq!(store.select("nothing", None).await.unwrap(), SelectPage::default());
    }

    #[tokio::test]
    async fn test_empty_delete_removes_item() {
        let store = MemoryAttributeStore::default();
        store
            .put_attributes("d", "1", vec![ReplaceableAttribute::new("id", "1", false)])
            .await
            .unwrap();

        store.delete_attributes("d", "1", Vec::new()).await.unwrap();
        assert_eq!(store.item_count("d").await, 0);

        // Deleting again is a no-op
        store.delete_attributes("d", "1", Vec::new()).await.unwrap();
    }
}
