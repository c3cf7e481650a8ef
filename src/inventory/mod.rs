// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Sources
//!
//! An inventory source produces the raw host manifest that topology is
//! resolved from. The manifest is externally owned and loosely typed; this
//! module only fetches and parses it.
//!
//! # Failure Semantics
//!
//! Every failure to obtain a manifest (connection refused, timeout,
//! cancellation, non-success status, malformed body) is reported as
//! [`TopologyError::BackingStoreUnavailable`](crate::TopologyError). A
//! reachable but empty inventory is a valid, empty manifest.
//!
//! Sources do not cache and do not retry.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::TopologyResult;

pub mod host;
pub mod http;
pub mod memory;

pub use host::{HostRecord, Manifest};
pub use http::HttpInventorySource;
pub use memory::StaticInventorySource;

/// Source of the raw host inventory
#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Fetch the full manifest (region → hostname → host record)
    async fn fetch(&self) -> TopologyResult<Manifest>;

    /// Fetch the manifest and flatten it into its hosts
    async fn hosts(&self) -> TopologyResult<Vec<HostRecord>> {
        Ok(self.fetch().await?.hosts())
    }
}

#[async_trait]
impl<S> InventorySource for Arc<S>
where
    S: InventorySource + ?Sized,
{
    async fn fetch(&self) -> TopologyResult<Manifest> {
        (**self).fetch().await
    }
}
