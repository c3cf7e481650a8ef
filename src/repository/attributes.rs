// Copyright (c) 2025 - Cowboy AI, Inc.
//! Attribute Store Abstraction
//!
//! A minimal multi-valued key-value store modelled on item/attribute
//! databases: a *domain* holds *items*, an item holds named string
//! *attributes*, and a name may carry several values.
//!
//! # Write Semantics
//!
//! - `put_attributes`: a replaceable attribute drops every existing value of
//!   its name first; a non-replaceable attribute is appended (values are a
//!   set, so appending an existing value is a no-op).
//! - `delete_attributes`: removes the listed name/value pairs; an empty list
//!   removes the whole item. An item left without attributes disappears.
//!
//! # Reads
//!
//! `select` returns one page of items in item-name order plus a continuation
//! token when more remain.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::TopologyResult;

/// A name/value pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A name/value pair with its write mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceableAttribute {
    pub name: String,
    pub value: String,
    pub replace: bool,
}

impl ReplaceableAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>, replace: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            replace,
        }
    }
}

/// A stored item and its attributes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

/// One page of a select
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectPage {
    pub items: Vec<Item>,
    /// Present when more items follow; pass it to the next `select`
    pub next_token: Option<String>,
}

/// Backing store for owned ring instances
#[async_trait]
pub trait AttributeStore: Send + Sync {
    /// One page of the items in `domain`, starting after `next_token`
    async fn select(&self, domain: &str, next_token: Option<&str>) -> TopologyResult<SelectPage>;

    /// A single item by name
    async fn get_item(&self, domain: &str, item: &str) -> TopologyResult<Option<Item>>;

    async fn put_attributes(
        &self,
        domain: &str,
        item: &str,
        attributes: Vec<ReplaceableAttribute>,
    ) -> TopologyResult<()>;

    async fn delete_attributes(
        &self,
        domain: &str,
        item: &str,
        attributes: Vec<Attribute>,
    ) -> TopologyResult<()>;
}

/// Apply a put to an item's current attributes
pub fn merge_put(existing: &mut Vec<Attribute>, attributes: Vec<ReplaceableAttribute>) {
    for attribute in attributes.iter().filter(|a| a.replace) {
        existing.retain(|a| a.name != attribute.name);
    }
    for attribute in attributes {
        let attribute = Attribute::new(attribute.name, attribute.value);
        if !existing.contains(&attribute) {
            existing.push(attribute);
        }
    }
}

/// Apply a delete to an item's current attributes
///
/// Returns true when nothing is left and the item should be removed.
pub fn merge_delete(existing: &mut Vec<Attribute>, attributes: &[Attribute]) -> bool {
    if attributes.is_empty() {
        existing.clear();
    } else {
        existing.retain(|a| !attributes.contains(a));
    }
    existing.is_empty()
}

/// Take one page of `names`, sorted, starting strictly after `next_token`
pub fn page_of(mut names: Vec<String>, next_token: Option<&str>, page_size: usize) -> (Vec<String>, Option<String>) {
    names.sort();
    names.dedup();
    let start = match next_token {
        Some(token) => names.partition_point(|name| name.as_str() <= token),
        None => 0,
    };
    let remaining = &names[start..];
    let page: Vec<String> = remaining.iter().take(page_size.max(1)).cloned().collect();
    let next = if remaining.len() > page.len() {
        page.last().cloned()
    } else {
        None
    };
    (page, next)
}
