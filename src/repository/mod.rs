// Copyright (c) 2025 - Cowboy AI, Inc.
//! Repositories
//!
//! - [`RingRepository`] - Rings, discovered from the inventory and read-only
//! - [`InstanceRepository`] - Instances of owned rings, kept in an [`AttributeStore`]

pub mod attributes;
pub mod instance;
pub mod ring;

pub use attributes::{Attribute, AttributeStore, Item, ReplaceableAttribute, SelectPage};
pub use instance::{AttributeInstanceRepository, InstanceRepository};
pub use ring::{DiscoveryRingRepository, RingRepository};
