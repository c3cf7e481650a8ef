// Copyright (c) 2025 - Cowboy AI, Inc.

//! Attribute store implementations
//!
//! Concrete backends for the [`AttributeStore`](crate::repository::AttributeStore)
//! trait used by owned-ring instance repositories.

pub mod memory;

pub use memory::MemoryAttributeStore;

#[cfg(feature = "nats-kv")]
pub mod nats_kv;

#[cfg(feature = "nats-kv")]
pub use nats_kv::NatsKvAttributeStore;
